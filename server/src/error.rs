//! Error types for the todo API.
//!
//! # Design
//! Both variants describe expected, non-fatal conditions surfaced straight
//! to the caller as a status code plus `{"error": …}` JSON body. The 404
//! wording differs between GET ("Not Found") and PATCH/DELETE ("Todo not
//! found"); that split is part of the wire contract, hence two variants.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the todo routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The id path segment does not parse as an integer.
    #[error("Invalid ID")]
    InvalidId,

    /// No record matches the id (GET wording).
    #[error("Not Found")]
    NotFound,

    /// No record matches the id (PATCH/DELETE wording).
    #[error("Todo not found")]
    TodoNotFound,
}

impl ApiError {
    fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::TodoNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
