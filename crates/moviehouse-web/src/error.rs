//! Web-adapter error types and mappings.
//!
//! Handler-level failures the application knows about (missing movie,
//! bad form input) are rendered through the error template and never
//! reach this type. `HttpError` covers what's left: infrastructure
//! failures that bubble out of a handler via `?`.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use moviehouse_core::{CoreError, RenderError, RepositoryError};
use thiserror::Error;

/// Web-adapter error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(status = %status, error = %self, "request failed");

        // Bare-bones page: the templated error view is for expected
        // failures, this is the last-resort surface.
        let body = format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p></body></html>",
            status, self
        );
        (status, Html(body)).into_response()
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
            RepositoryError::Constraint(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl From<RenderError> for HttpError {
    fn from(err: RenderError) -> Self {
        HttpError::Internal(err.to_string())
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Render(render_err) => render_err.into(),
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::Configuration(msg) => HttpError::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}
