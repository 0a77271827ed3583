//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error
//!   types.
//! - Map client and validation errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use collector_client::{ClientError, ValidationError};

/// Structured exit codes for collector-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Network, timeout, or DNS failure. Scripts may retry; the CLI itself
    /// never does.
    ConnectionError = 3,

    /// Collector or entity not found.
    NotFound = 4,

    /// Local name validation rejected the entity; no request was sent.
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// The server rejected the request (4xx/5xx other than 404).
    ServerError = 6,
}

impl ExitCode {
    /// The code as an i32 for `std::process::exit`.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map an error chain to an exit code by inspecting its root causes.
    pub fn from_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if cause.downcast_ref::<ValidationError>().is_some() {
                return Self::ValidationError;
            }
            if let Some(client_error) = cause.downcast_ref::<ClientError>() {
                return match client_error {
                    ClientError::HttpError(_) => Self::ConnectionError,
                    ClientError::NotFound(_) => Self::NotFound,
                    ClientError::ApiError { status: 404, .. } => Self::NotFound,
                    ClientError::ApiError { .. } => Self::ServerError,
                    _ => Self::GeneralError,
                };
            }
        }
        Self::GeneralError
    }
}
