//! Pure parse/validate for `escala.toml`.

use crate::domain::{AdminConfig, AppError};

/// Parse and validate client configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AdminConfig, AppError> {
    let config: AdminConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
