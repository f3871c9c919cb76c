//! escala-admin: client library and CLI for administering scheduled absences,
//! absence types, schedules (escalas) and schedule generations.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::HttpApiClient;
use app::AppContext;

pub use app::config::load_config;
pub use domain::{
    AdminConfig, AppError, ConfigurationMapper, Page, PageRequest, ScheduleGroupConfiguration,
    map_generation_configuration,
};

/// Load the configuration (see [`load_config`]) and connect to the API with
/// the first token found in `ESCALA_API_TOKEN` or the configured token file.
pub fn connect(config_path: Option<&Path>) -> Result<AppContext<HttpApiClient>, AppError> {
    let config = load_config(config_path)?;
    AppContext::connect(&config)
}
