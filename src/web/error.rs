//! Mapping of workflow failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::task::services::TaskWorkflowError;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// The workflow service rejected the request.
    #[error(transparent)]
    Workflow(#[from] TaskWorkflowError),
    /// The dashboard template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Result type for request handlers.
pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    /// Returns the HTTP status reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Workflow(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Workflow(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::NOT_FOUND {
            self.to_string()
        } else {
            error!(error = %self, "request failed");
            "internal server error".to_owned()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
