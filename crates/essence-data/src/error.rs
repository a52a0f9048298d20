//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not complete (connection refused, DNS, etc.).
    #[error("Request failed: {0}")]
    Transport(String),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// Invalid URL or client configuration.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Non-success HTTP status from the server.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error on a request body.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidRequest(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Json(e.to_string())
    }
}
