//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::models::{GenerationRequest, Suggestion};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub suggestions: Vec<Suggestion>,
}

/// POST /api/generate
///
/// Validates the form input, then asks the model for five names.
/// Validation problems come back as 400 with details; every later failure
/// is a generic 500 and only the log carries the reason.
///
/// The first web client answered schema failures with the same generic 500
/// as generation failures. Here they are a 400 listing each bad field, so
/// the form can show them without a model call.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;

    let issues = request.validate();
    if !issues.is_empty() {
        return Err(AppError::Validation(issues));
    }

    let suggestions = state.generator.generate(&request).await?;

    Ok(Json(GenerateResponse { suggestions }))
}
