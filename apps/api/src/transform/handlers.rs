//! Axum route handlers for prompt transformation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::history::{self, HistoryItem};
use crate::models::platform::Platform;
use crate::state::AppState;
use crate::transform::options::TransformOptions;
use crate::transform::TemplateSelection;

#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    pub prompt: String,
    #[serde(default)]
    pub template_id: TemplateSelection,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub options: TransformOptions,
}

#[derive(Debug, Serialize)]
pub struct TransformResponse {
    /// Template actually applied (the matcher's pick in auto mode).
    pub template_id: String,
    pub platform: Platform,
    pub result: Value,
}

/// POST /api/v1/transform
///
/// Transforms a natural-language prompt into a platform payload and records it in history.
pub async fn handle_transform(
    State(state): State<AppState>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let transformed = state.transformer.transform(
        &request.prompt,
        &request.template_id,
        request.platform,
        &request.options,
    )?;

    // History is best-effort: a store outage must not fail the transformation.
    let recorded = match HistoryItem::new(
        &request.prompt,
        request.platform,
        &transformed.template_id,
        &transformed.payload,
    ) {
        Ok(item) => history::record(state.kv.as_ref(), item, state.config.history_limit).await,
        Err(e) => Err(e),
    };
    if let Err(e) = recorded {
        warn!("Failed to record transformation history: {e}");
    }

    Ok(Json(TransformResponse {
        template_id: transformed.template_id,
        platform: request.platform,
        result: transformed.payload,
    }))
}
