//! API error type and its HTTP mapping.
//!
//! Every failure a handler or middleware can produce funnels into
//! [`ApiError`], which renders the JSON error envelope the frontend
//! expects: `{"status": "error", "message": ...}` for single-message
//! failures and `{"status": "error", "errors": [...]}` for field-level
//! validation reports.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use dkt_core::errors::ValidationError;
use dkt_db::service::TaskError;

use crate::identity::AuthError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed validation; maps to 400 with field details.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No task with that id (or title) owned by the caller; maps to 404.
    #[error("task not found")]
    NotFound,

    /// Authentication failed; maps to 401.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Anti-forgery check failed on a mutating request; maps to 403.
    #[error("invalid csrf token")]
    CsrfRejected,

    /// Caller exhausted their request window; maps to 429.
    #[error("too many requests")]
    RateLimited { retry_after_secs: u64 },

    /// Request could not be read at all; maps to 400.
    #[error("{0}")]
    BadRequest(String),

    /// Anything else; maps to 500 with the detail kept out of the body.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Validation(inner) => Self::Validation(inner),
            TaskError::NotFound => Self::NotFound,
            TaskError::Store(inner) => Self::Internal(inner.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(ValidationError::Fields(violations)) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "status": "error", "errors": violations })),
            )
                .into_response(),
            Self::Validation(other) => error_body(StatusCode::BAD_REQUEST, &other.to_string()),
            Self::NotFound => error_body(StatusCode::NOT_FOUND, "task not found"),
            Self::Auth(err) => {
                tracing::warn!(reason = %err, "request rejected as unauthenticated");
                let message = match err {
                    AuthError::TokenMissing => "unauthorized: token missing",
                    _ => "unauthorized: invalid token",
                };
                error_body(StatusCode::UNAUTHORIZED, message)
            }
            Self::CsrfRejected => error_body(StatusCode::FORBIDDEN, "invalid csrf token"),
            Self::RateLimited { retry_after_secs } => {
                let mut response = error_body(
                    StatusCode::TOO_MANY_REQUESTS,
                    "too many requests, try again later",
                );
                if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
                response
            }
            Self::BadRequest(message) => error_body(StatusCode::BAD_REQUEST, &message),
            Self::Internal(detail) => {
                tracing::error!(detail = %detail, "request failed");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "error", "message": message }))).into_response()
}
