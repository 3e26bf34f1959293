//! Error types for cf-cli
//!
//! Every error defined here is handled locally: the command layer converts it
//! into the failure envelope written to standard output.

use thiserror::Error;

/// Result type alias for cf-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for cf-cli
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid credential, at setup or at use time
    #[error("{0}")]
    Configuration(String),

    /// Filesystem access while loading or saving the credential
    #[error("{0}")]
    Io(String),

    /// The HTTP client could not complete the exchange
    /// (DNS, connection refused, timeout, malformed request)
    #[error("failed to request, cause: {0}")]
    Transport(String),

    /// The response body could not be read
    #[error("failed to read response body, cause: {0}")]
    Read(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a filesystem error
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a response-body read error
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The readiness-gate failure: no credential was loaded at startup
    pub fn unready() -> Self {
        Self::Configuration(UNREADY_MESSAGE.to_string())
    }
}

/// Message emitted when a network command runs without a loaded credential
pub const UNREADY_MESSAGE: &str = "Configuration unready";
