//! Axum route handlers for the interview question API.

use axum::{body::Bytes, extract::State, Json};

use crate::errors::AppError;
use crate::interview::generator::generate_question;
use crate::interview::models::{GenerationRequest, GenerationResponse};
use crate::interview::validation::validate_request;
use crate::state::AppState;

/// POST /api/generate
///
/// Validates company/jobTitle, makes one provider call and returns a single
/// normalized question. Every failure is rendered as `{ "error": ... }`.
///
/// The body is parsed as JSON regardless of `Content-Type`.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerationResponse>, AppError> {
    let request: GenerationRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Unhandled(e.to_string()))?;

    let validated = validate_request(&request)?;

    let api_key = state.credential.resolve().ok_or_else(|| {
        AppError::Configuration(format!("{} is not set", state.credential.describe()))
    })?;

    let question = generate_question(state.llm.as_ref(), &api_key, &validated).await?;

    Ok(Json(GenerationResponse { question }))
}
