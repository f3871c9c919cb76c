pub mod api_client;
pub mod token_store;

pub use api_client::{Endpoints, HttpApiClient};
pub use token_store::{EnvTokenStore, FileTokenStore, TOKEN_ENV_VAR, TokenChain};
