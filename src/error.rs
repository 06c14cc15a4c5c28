//! Error types for figma-export
//!
//! One enum covers the whole failure surface: configuration problems caught at
//! startup, transport and API failures from the remote endpoints, and
//! filesystem errors while persisting rendered images. Only the initial
//! document fetch is allowed to surface these to the caller; everything inside
//! the export loop is caught and logged at the call site.

use thiserror::Error;

/// Result type alias for figma-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for figma-export
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "file_key")
        key: Option<String>,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote API answered with a non-success status
    #[error("API returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Response body, or the status text when the body is unreadable
        message: String,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a specific key.
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}
