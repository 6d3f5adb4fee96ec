use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("missing credential: set {0} or pass --uri")]
    MissingCredential(&'static str),
    #[error("invalid connection settings: {0}")]
    InvalidConnection(String),
    #[error("invalid listing document: {0}")]
    InvalidDocument(String),
    #[error("invalid date '{0}': expected YYYY-MM-DD or RFC 3339")]
    InvalidDate(String),
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub type Result<T> = std::result::Result<T, ListingsError>;
