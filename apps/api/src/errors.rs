use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure is terminal for the request: nothing is retried, and every
/// variant surfaces to the caller as `{"error": "<message>"}` plus a log line.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The generation API answered with a non-success status. The caller
    /// receives the same status and the upstream error text unmodified.
    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("no content generated")]
    NoContent,

    #[error("Generation blocked by safety filter: {0}")]
    SafetyBlocked(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, message } => AppError::Upstream { status, message },
            LlmError::EmptyContent => AppError::NoContent,
            LlmError::SafetyBlocked(reason) => AppError::SafetyBlocked(reason),
            LlmError::Http(e) => AppError::Internal(anyhow::anyhow!("Generation request failed: {e}")),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Request validation failed: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Upstream { status, message } => {
                tracing::error!("Upstream generation API returned {status}: {message}");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    message.clone(),
                )
            }
            AppError::NoContent => {
                tracing::error!("Upstream generation API returned no content");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::SafetyBlocked(reason) => {
                tracing::error!("Generation blocked by safety filter: {reason}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Generation blocked by safety filter: {reason}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
