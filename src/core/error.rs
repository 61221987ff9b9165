//! Error types for quote operations.

use thiserror::Error;

/// Result type alias for quote operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Errors that can occur while managing quotes.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// User supplied a quote without text or category
    #[error("Validation error: {0}")]
    Validation(String),

    /// Durable mirror holds data that is not a quote list
    #[error("Stored quotes could not be parsed: {0}")]
    StorageParse(String),

    /// Fetch or post against the remote endpoint failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Import file is not a JSON quote list
    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<fjall::Error> for QuoteError {
    fn from(err: fjall::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
