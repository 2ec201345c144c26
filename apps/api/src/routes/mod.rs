pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::history::handlers as history;
use crate::library::handlers as library;
use crate::saved::handlers as saved;
use crate::state::AppState;
use crate::templates::handlers as templates;
use crate::transform::handlers as transform;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/templates/match",
            post(templates::handle_match_template),
        )
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        // Transformation
        .route("/api/v1/transform", post(transform::handle_transform))
        .route(
            "/api/v1/history",
            get(history::handle_list_history).delete(history::handle_clear_history),
        )
        // Saved items
        .route("/api/v1/saved", get(saved::handle_list_saved))
        .route(
            "/api/v1/saved/:key",
            get(saved::handle_get_saved)
                .put(saved::handle_put_saved)
                .delete(saved::handle_delete_saved),
        )
        .route(
            "/api/v1/saved/:key/toggle",
            post(saved::handle_toggle_saved),
        )
        // Free-text generation
        .route("/api/v1/generate", post(generation::handle_generate))
        // Prompt library
        .route(
            "/api/v1/library",
            post(library::handle_save_prompt).get(library::handle_list_prompts),
        )
        .with_state(state)
}
