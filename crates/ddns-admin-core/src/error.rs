//! Error types for the DDNS admin client
//!
//! This module defines all error types used throughout the crate.
//!
//! Contract violations in secret generation (empty alphabet, zero length)
//! are programming errors and panic instead of returning an [`Error`].

use thiserror::Error;

/// Result type alias for admin client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the admin client
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input (missing id, malformed field, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No handler registered under the requested action identifier
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Clipboard backend errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// I/O errors (spawning clipboard tools, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors (connect, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Authentication errors (401/403 from the admin backend)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found on the admin backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// Admin backend rejected the request
    #[error("Backend error ({status}): {message}")]
    Backend {
        /// HTTP status code returned by the backend
        status: u16,
        /// Message from the backend's JSON body, or the raw body
        message: String,
    },

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an unknown action error
    pub fn unknown_action(id: impl Into<String>) -> Self {
        Self::UnknownAction(id.into())
    }

    /// Create a clipboard error
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a backend rejection error
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
