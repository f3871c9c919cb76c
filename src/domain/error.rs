use std::io;

use thiserror::Error;

use crate::domain::Resource;

/// Library-wide error type for escala-admin operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file contents failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No bearer token could be read from any token store.
    #[error("No API token found. Set ESCALA_API_TOKEN or configure auth.token_file.")]
    TokenMissing,

    /// Request through the shared HTTP client failed. The message is the
    /// server's message when one was returned.
    #[error("{message}")]
    Api { message: String, status: Option<u16> },

    /// DELETE request rejected by the server.
    #[error("{message}")]
    DeleteFailed { resource: Resource, status: u16, message: String },

    /// Form submission is missing required fields.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Form values are present but inconsistent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn api<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Api { message: message.into(), status }
    }

    /// HTTP status attached to the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => *status,
            AppError::DeleteFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::MissingFields(_)
            | AppError::InvalidInput(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::TokenMissing => io::ErrorKind::NotFound,
            AppError::Api { status, .. } => match status {
                Some(401) | Some(403) => io::ErrorKind::PermissionDenied,
                Some(404) => io::ErrorKind::NotFound,
                Some(409) => io::ErrorKind::AlreadyExists,
                _ => io::ErrorKind::Other,
            },
            AppError::DeleteFailed { status, .. } => match status {
                401 => io::ErrorKind::PermissionDenied,
                404 => io::ErrorKind::NotFound,
                409 => io::ErrorKind::AlreadyExists,
                _ => io::ErrorKind::Other,
            },
        }
    }
}
