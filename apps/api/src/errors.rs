#![allow(dead_code)]

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
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Survey must contain at least one response")]
    EmptySurvey,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidEmail => (StatusCode::BAD_REQUEST, "Invalid email format"),
            AppError::InvalidPhone => (StatusCode::BAD_REQUEST, "Invalid phone number format"),
            AppError::EmptySurvey => (
                StatusCode::BAD_REQUEST,
                "Survey must contain at least one response",
            ),
            // Collaborator and internal failures collapse to one generic
            // message; details stay in the server log.
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze survey")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze survey")
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
