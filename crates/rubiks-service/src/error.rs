//! Error types for the transformation service.

use thiserror::Error;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An environment variable held a value that could not be parsed
    #[error("invalid value {value:?} for {var}")]
    Config { var: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
