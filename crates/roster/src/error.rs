//! Front end error types.

use student_api::ApiError;
use thiserror::Error;

/// Errors that stop the front end.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The API client could not be built (bad base URL).
    #[error("API client error: {0}")]
    Api(#[from] ApiError),

    /// Reading commands or writing output failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for front end results.
pub type Result<T> = std::result::Result<T, RosterError>;
