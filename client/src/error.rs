//! Error types for the todo API client.
//!
//! # Design
//! `InvalidId` and `NotFound` get dedicated variants because they are the
//! two expected failure modes of the API contract (400 and 404). Every
//! other non-2xx response lands in `HttpError` with the raw status code
//! and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 400 — the id path segment was not an integer.
    #[error("invalid id")]
    InvalidId,

    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
