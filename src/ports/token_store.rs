use crate::domain::AppError;

/// Port for reading the stored bearer token.
pub trait TokenStore {
    /// Return the token, or `None` when this store holds none.
    fn read_token(&self) -> Result<Option<String>, AppError>;
}
