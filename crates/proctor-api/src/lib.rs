//! proctor-api — HTTP boundary for the submission service.
//!
//! A thin axum layer: routes extract typed ids and payloads, hand them to
//! `SubmissionService`, and map the two failure classes onto status codes.

use std::sync::Arc;

use axum::Router;

use proctor_core::service::SubmissionService;

pub mod error;
pub mod routes;

pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SubmissionService>,
}

/// Assemble the application router around a submission service.
pub fn app(service: Arc<SubmissionService>) -> Router {
    routes::router().with_state(AppState { service })
}
