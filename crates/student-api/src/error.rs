//! Student API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`StudentApi`](crate::StudentApi) implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP status: {0}")]
    HttpStatus(StatusCode),

    /// The response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a response (connection refused, reset, ...).
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// The backend is unreachable; only produced by the in-memory API.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(code) => Self::HttpStatus(code),
            None => Self::Transport(err),
        }
    }
}

/// Convenience type alias for student API results.
pub type Result<T> = std::result::Result<T, ApiError>;
