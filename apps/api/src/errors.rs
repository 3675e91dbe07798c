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
/// Every variant renders as `{"error": "<message>", "hbdi_json": null}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Model output is not valid JSON: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("Model output does not match the report schema: {0}")]
    SchemaViolation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_)
            | AppError::MalformedOutput(_)
            | AppError::SchemaViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => tracing::warn!("Rejected request: {msg}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::MalformedOutput(e) => tracing::error!("Malformed model output: {e}"),
            AppError::SchemaViolation(msg) => tracing::error!("Schema violation: {msg}"),
        }

        let body = Json(json!({
            "error": self.to_string(),
            "hbdi_json": null
        }));

        (self.status(), body).into_response()
    }
}
