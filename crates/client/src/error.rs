//! Error types for the collector client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during collector client operations.
///
/// Transport failures are surfaced to the caller as-is and never retried;
/// the editor layer is responsible for turning them into user-visible
/// notifications.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from the collector API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid response format from the server.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is a transport-level failure, as opposed to an
    /// error response the server produced.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }

    /// Check if this error indicates a missing resource.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::ApiError { status, .. } => *status == 404,
            _ => false,
        }
    }
}
