//! Axum route handlers for transformation history.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::history::{self, HistoryItem};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub items: Vec<HistoryItem>,
}

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let items = history::load(state.kv.as_ref()).await?;
    Ok(Json(HistoryResponse { items }))
}

/// DELETE /api/v1/history
pub async fn handle_clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    history::clear(state.kv.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}
