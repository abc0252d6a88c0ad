//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported language code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Dictionary or other domain error
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
