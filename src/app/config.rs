//! Configuration loading for the CLI.
//!
//! The config path comes from `--config`, then `ESCALA_CONFIG`, then
//! `./escala.toml`. Only the implicit default may be absent; an explicitly
//! named file must exist. `ESCALA_API_URL` overrides `api.base_url`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use url::Url;

use crate::adapters::{EnvTokenStore, FileTokenStore, TokenChain};
use crate::domain::{AdminConfig, AppError, parse_config_content};

pub const CONFIG_ENV_VAR: &str = "ESCALA_CONFIG";
pub const API_URL_ENV_VAR: &str = "ESCALA_API_URL";
pub const DEFAULT_CONFIG_FILE: &str = "escala.toml";

/// Where the configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Default(PathBuf),
}

impl ConfigSource {
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => ConfigSource::Explicit(PathBuf::from(path)),
            _ => ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_FILE)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Default(path) => path,
        }
    }
}

/// Load, override and validate the configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<AdminConfig, AppError> {
    let source = ConfigSource::resolve(explicit);
    let mut config = match fs::read_to_string(source.path()) {
        Ok(content) => parse_config_content(&content)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => match &source {
            ConfigSource::Default(_) => {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                AdminConfig::default()
            }
            ConfigSource::Explicit(path) => {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        },
        Err(err) => return Err(AppError::Io(err)),
    };

    if let Ok(raw) = std::env::var(API_URL_ENV_VAR)
        && !raw.trim().is_empty()
    {
        config.api.base_url = Url::parse(raw.trim()).map_err(|err| {
            AppError::InvalidConfig(format!("{} is not a valid URL: {}", API_URL_ENV_VAR, err))
        })?;
    }

    config.validate()?;
    Ok(config)
}

/// Token lookup order: environment first, then the configured token file.
pub fn token_chain(config: &AdminConfig) -> TokenChain {
    let chain = TokenChain::new().with(EnvTokenStore::default());
    match &config.auth.token_file {
        Some(path) => chain.with(FileTokenStore::new(path)),
        None => chain,
    }
}
