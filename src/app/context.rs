use crate::adapters::HttpApiClient;
use crate::app::config::token_chain;
use crate::domain::{AdminConfig, AppError};
use crate::ports::AdminApi;

/// Application context holding the API client and view defaults.
pub struct AppContext<A: AdminApi> {
    api: A,
    default_limit: u32,
}

impl<A: AdminApi> AppContext<A> {
    pub fn new(api: A, default_limit: u32) -> Self {
        Self { api, default_limit }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Page size for list commands that do not pass one explicitly.
    pub fn limit(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_limit)
    }
}

impl AppContext<HttpApiClient> {
    /// Build an HTTP-backed context. Fails when no token is available.
    pub fn connect(config: &AdminConfig) -> Result<Self, AppError> {
        let token = token_chain(config).require_token()?;
        let client = HttpApiClient::new(token, &config.api)?;
        Ok(Self::new(client, config.views.default_limit))
    }
}
