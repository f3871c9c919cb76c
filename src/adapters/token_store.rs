//! Bearer token stores.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::TokenStore;

pub const TOKEN_ENV_VAR: &str = "ESCALA_API_TOKEN";

/// Reads the token from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvTokenStore {
    var: String,
}

impl EnvTokenStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvTokenStore {
    fn default() -> Self {
        Self::new(TOKEN_ENV_VAR)
    }
}

impl TokenStore for EnvTokenStore {
    fn read_token(&self) -> Result<Option<String>, AppError> {
        Ok(std::env::var(&self.var).ok().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()))
    }
}

/// Reads the token from a file. A missing file holds no token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: expand_home(path.as_ref()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn read_token(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Io(err)),
        }
    }
}

/// Tries each store in order and returns the first token found.
#[derive(Default)]
pub struct TokenChain {
    stores: Vec<Box<dyn TokenStore>>,
}

impl TokenChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, store: impl TokenStore + 'static) -> Self {
        self.stores.push(Box::new(store));
        self
    }

    /// First token found, or [`AppError::TokenMissing`].
    pub fn require_token(&self) -> Result<String, AppError> {
        self.read_token()?.ok_or(AppError::TokenMissing)
    }
}

impl TokenStore for TokenChain {
    fn read_token(&self) -> Result<Option<String>, AppError> {
        for store in &self.stores {
            if let Some(token) = store.read_token()? {
                return Ok(Some(token));
            }
        }
        Ok(None)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    path.to_path_buf()
}
