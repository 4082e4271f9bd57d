//! Error types for the Eddie.surf client.

use thiserror::Error;

/// Result type for Eddie.surf client operations.
pub type Result<T> = std::result::Result<T, EddieError>;

/// Eddie.surf client errors.
#[derive(Debug, Error)]
pub enum EddieError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input, caught before any network call. Never retried.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response from the API, surfaced as-is.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level failure from the HTTP client.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request or response body (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
