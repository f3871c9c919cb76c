pub mod admin_config;
pub mod parse;

pub use admin_config::{AdminConfig, ApiConfig, AuthConfig, ViewsConfig};
pub use parse::parse_config_content;
