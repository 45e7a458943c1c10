use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const INVALID_INPUT_MESSAGE: &str = "회사명과 직무를 모두 입력해주세요.";
pub const CONFIGURATION_MESSAGE: &str = "서버 설정 오류가 발생했습니다.";
pub const PROVIDER_FAILURE_MESSAGE: &str = "면접 질문 생성에 실패했습니다. 잠시 후 다시 시도해주세요.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "응답을 받을 수 없습니다.";
pub const GENERIC_FAILURE_MESSAGE: &str = "서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider error: {0}")]
    Provider(LlmError),

    #[error("Provider returned empty content")]
    EmptyResponse,

    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => AppError::EmptyResponse,
            other => AppError::Provider(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Configuration(detail) => {
                tracing::error!("Configuration error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CONFIGURATION_MESSAGE.to_string(),
                )
            }
            AppError::Provider(e) => {
                tracing::error!("Completion provider error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROVIDER_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::EmptyResponse => {
                tracing::error!("Completion provider returned no content");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EMPTY_RESPONSE_MESSAGE.to_string(),
                )
            }
            AppError::Unhandled(msg) => {
                tracing::error!("Unhandled error: {msg}");
                let message = if msg.trim().is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    msg.clone()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
