//! Axum route handlers for template introspection and matching.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::platform::Platform;
use crate::state::AppState;
use crate::templates::{Matcher, Template};

#[derive(Debug, Deserialize)]
pub struct PlatformQuery {
    pub platform: Option<Platform>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<Template>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub prompt: String,
    pub platform: Option<Platform>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub template: Template,
    pub score: u32,
}

/// GET /api/v1/templates[?platform=]
///
/// Registry order; restricted to the platform's templates when one is given.
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<PlatformQuery>,
) -> Json<TemplateListResponse> {
    let templates = match params.platform {
        Some(platform) => state
            .registry
            .for_platform(platform)
            .into_iter()
            .cloned()
            .collect(),
        None => state.registry.all().to_vec(),
    };
    Json(TemplateListResponse { templates })
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    state
        .registry
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::TemplateNotFound(id))
}

/// POST /api/v1/templates/match
pub async fn handle_match_template(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResponse> {
    let matched =
        Matcher::new(&state.registry).match_for_platform(&request.prompt, request.platform);
    Json(MatchResponse {
        template: matched.template.clone(),
        score: matched.score,
    })
}
