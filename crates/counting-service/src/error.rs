//! HTTP mapping of the shared error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use counting_core::error::{CountingError, ErrorCode};

/// Handler error; renders as a plain-text body with the error message.
#[derive(Debug)]
pub struct ServiceError(pub CountingError);

impl From<CountingError> for ServiceError {
    fn from(e: CountingError) -> Self {
        Self(e)
    }
}

impl From<std::fmt::Error> for ServiceError {
    fn from(e: std::fmt::Error) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self.0.code() {
            ErrorCode::BadRequest | ErrorCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ErrorCode::Transport | ErrorCode::Render | ErrorCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        tracing::error!(code = self.0.code().as_str(), error = %self.0, "request failed");
        (status, self.0.to_string()).into_response()
    }
}
