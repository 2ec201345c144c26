//! Axum route handlers for the prompt library.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::library::{list_user_prompts, save_prompt};
use crate::models::prompt::PromptRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SavePromptRequest {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct LibraryResponse {
    pub prompts: Vec<PromptRow>,
}

/// POST /api/v1/library
pub async fn handle_save_prompt(
    State(state): State<AppState>,
    Json(request): Json<SavePromptRequest>,
) -> Result<(StatusCode, Json<PromptRow>), AppError> {
    let row = save_prompt(&state.db, request.user_id, &request.title, &request.content).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/library?user_id=
pub async fn handle_list_prompts(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<LibraryResponse>, AppError> {
    let prompts = list_user_prompts(&state.db, params.user_id).await?;
    Ok(Json(LibraryResponse { prompts }))
}
