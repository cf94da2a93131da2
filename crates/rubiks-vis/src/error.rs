//! Error types for the visualiser.

use rubiks_topology::StateError;
use thiserror::Error;

/// Result type for visualiser operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the cube.
#[derive(Debug, Error)]
pub enum Error {
    /// The transformation service answered but refused the request
    #[error("Transformation service error: {0}")]
    Service(String),

    /// Transport failure talking to the transformation service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A response that is not a valid 54-facelet layout
    #[error("Malformed state: {0}")]
    MalformedState(#[from] StateError),

    #[error("Invalid value {value:?} for {var}")]
    Config { var: &'static str, value: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A front-end line that is not a known command
    #[error("Unknown command: {0}")]
    Command(String),

    /// The session event loop has stopped
    #[error("Session closed")]
    SessionClosed,
}
