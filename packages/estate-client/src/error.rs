//! Error types for the estate API client.

use thiserror::Error;

/// Result type for estate API operations.
pub type Result<T> = std::result::Result<T, EstateApiError>;

/// Estate back-office API errors.
#[derive(Debug, Error)]
pub enum EstateApiError {
    /// Network error (connection failed, DNS, TLS)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for EstateApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EstateApiError::Timeout
        } else if err.is_decode() {
            EstateApiError::Parse(err.to_string())
        } else {
            EstateApiError::Network(err)
        }
    }
}
