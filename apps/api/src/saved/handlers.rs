//! Axum route handlers for saved items.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::saved;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SavedListResponse {
    pub items: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub key: String,
    pub saved: bool,
}

fn validate_key(key: &str) -> Result<(), AppError> {
    if key.trim().is_empty() {
        return Err(AppError::Validation("key cannot be empty".to_string()));
    }
    Ok(())
}

/// GET /api/v1/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
) -> Result<Json<SavedListResponse>, AppError> {
    let items = saved::list(state.kv.as_ref()).await?;
    Ok(Json(SavedListResponse { items }))
}

/// GET /api/v1/saved/:key
pub async fn handle_get_saved(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>, AppError> {
    saved::get(state.kv.as_ref(), &key)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Saved item '{key}' not found")))
}

/// PUT /api/v1/saved/:key
pub async fn handle_put_saved(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(item): Json<Map<String, Value>>,
) -> Result<Json<Map<String, Value>>, AppError> {
    validate_key(&key)?;
    let stored = saved::save(state.kv.as_ref(), &key, item).await?;
    Ok(Json(stored))
}

/// POST /api/v1/saved/:key/toggle
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(item): Json<Map<String, Value>>,
) -> Result<Json<ToggleResponse>, AppError> {
    validate_key(&key)?;
    let saved = saved::toggle(state.kv.as_ref(), &key, item).await?;
    Ok(Json(ToggleResponse { key, saved }))
}

/// DELETE /api/v1/saved/:key
pub async fn handle_delete_saved(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    saved::remove(state.kv.as_ref(), &key).await?;
    Ok(StatusCode::NO_CONTENT)
}
