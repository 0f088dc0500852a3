//! Handler errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::views::ViewError;

/// Anything a route handler can fail with. Route actions themselves never
/// fail; only rendering their view can.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    View(#[from] ViewError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
