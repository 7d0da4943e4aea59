//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_openers, GenerateRequest, GenerateResponse};
use crate::state::AppState;

/// POST /api/v1/openers/generate
///
/// Runs the full pipeline: clean → validate → prompt → LLM → extract.
/// Generation is open to anonymous callers; only saving requires a session.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = generate_openers(&state.llm, request).await?;
    Ok(Json(response))
}
