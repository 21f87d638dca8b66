//! API error types.

use thiserror::Error;

/// Errors from a booking API call. Wrappers never classify beyond this.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport error, including malformed URLs from an unset base URL.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },
}

impl ApiError {
    /// Status code when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(_) => None,
        }
    }
}
