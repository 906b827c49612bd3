//! HTTP error mapping.
//!
//! Translates the core's two failure classes into status codes: resource
//! absent is 404, request rejected is 400, anything else is a 500 whose
//! detail stays in the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use proctor_core::error::SubmissionError;

/// Error type returned by every handler.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    /// Wrap an internal failure, logging the cause and surfacing only the
    /// context string to the client.
    pub fn internal(err: impl std::fmt::Display, context: &str) -> Self {
        tracing::error!("{context}: {err}");
        ApiError::Internal(context.to_string())
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::NotFound(resource) => ApiError::NotFound(resource.to_string()),
            SubmissionError::Rejected(rejection) => ApiError::BadRequest(rejection.to_string()),
            SubmissionError::Store(store) => ApiError::internal(store, "store operation failed"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
