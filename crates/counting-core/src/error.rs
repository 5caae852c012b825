//! Shared error type across the counting crates.

use thiserror::Error;

/// Stable error codes (used in HTTP error bodies and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Request did not complete at the transport layer.
    Transport,
    /// Response body could not be produced.
    Render,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::Render => "RENDER",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CountingError>;

/// Unified error type used by core, service and client.
#[derive(Debug, Error)]
pub enum CountingError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("transport: {0}")]
    Transport(String),
    #[error("Error when writing response. Error: {0}")]
    Render(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl CountingError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            CountingError::BadRequest(_) => ErrorCode::BadRequest,
            CountingError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            CountingError::Transport(_) => ErrorCode::Transport,
            CountingError::Render(_) => ErrorCode::Render,
            CountingError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<std::fmt::Error> for CountingError {
    fn from(e: std::fmt::Error) -> Self {
        CountingError::Render(e.to_string())
    }
}
