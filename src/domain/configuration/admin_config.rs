//! Client configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::pagination::MAX_PAGE_LIMIT;

/// Configuration loaded from `escala.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// REST API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Token storage settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// List view defaults.
    #[serde(default)]
    pub views: ViewsConfig,
}

impl AdminConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.views.validate()?;
        Ok(())
    }
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Server root; endpoint paths such as `/api/absence-types` are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "base_url must be an absolute http(s) URL: {}",
                self.base_url
            )));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "base_url must use http or https: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Where the bearer token is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// File holding the bearer token. A leading `~/` expands to `$HOME`.
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

/// List view defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewsConfig {
    /// Page size used when a command does not pass `--limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self { default_limit: default_limit() }
    }
}

impl ViewsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_limit == 0 || self.default_limit > MAX_PAGE_LIMIT {
            return Err(AppError::InvalidConfig(format!(
                "default_limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:3000").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_limit() -> u32 {
    crate::domain::pagination::DEFAULT_PAGE_LIMIT
}
