use super::protocol::ErrorBody;
use crate::store::types::StoreError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const ERR_NOT_ARRAY: &str = "Stickies must be an array";
pub const ERR_EMPTY_CREATE: &str = "Stickies array cannot be empty";
pub const ERR_EMPTY_REPLACE: &str = "Stickies array cannot be empty. Use DELETE to remove stickies.";

/// Request failure taxonomy for the persistence API.
///
/// Every handler catches at its own boundary and maps into one of these four
/// kinds; no error crosses into another request's handling.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or empty input body.
    #[error("{0}")]
    Validation(&'static str),

    /// Identifier fails the 24-hex syntax check. Never reaches the store.
    #[error("Invalid stickies ID format")]
    InvalidId,

    /// Identifier is well-formed but resolves to nothing.
    #[error("Stickies not found")]
    NotFound,

    /// Anything unexpected. The caller gets a generic message; details go to
    /// the log at the point of failure.
    #[error("Something went wrong!")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            // Handlers validate emptiness up front with operation-specific
            // messages; this arm covers the store's own guard.
            StoreError::EmptyStickies => ApiError::Validation(ERR_EMPTY_REPLACE),
        }
    }
}
