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
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM call timed out")]
    LlmTimeout,

    #[error("Model response error: {0}")]
    ModelResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Timeout => AppError::LlmTimeout,
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::LlmTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Extraction(_)
            | AppError::Llm(_)
            | AppError::ModelResponse(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => ("PAYLOAD_TOO_LARGE", msg.clone()),
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                (
                    "EXTRACTION_ERROR",
                    "Failed to read text from the uploaded document".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::LlmTimeout => {
                tracing::error!("LLM call timed out");
                (
                    "LLM_TIMEOUT",
                    "The AI service did not respond in time".to_string(),
                )
            }
            AppError::ModelResponse(msg) => {
                tracing::error!("Model response error: {msg}");
                (
                    "MODEL_RESPONSE_ERROR",
                    "The AI service returned an unusable response".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
