//! Axum route handlers for free-text prompt generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generate_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub goal: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
}

/// POST /api/v1/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = generate_prompt(&state.llm, &request.goal, &request.category).await?;
    Ok(Json(GenerateResponse { prompt }))
}
