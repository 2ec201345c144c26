use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::storage::KvStore;
use crate::templates::TemplateRegistry;
use crate::transform::Transformer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Key-value store backing history and saved items. Redis in production.
    pub kv: Arc<dyn KvStore>,
    pub llm: LlmClient,
    pub config: Config,
    /// Read-only template catalogue, built once at startup.
    pub registry: Arc<TemplateRegistry>,
    pub transformer: Arc<Transformer>,
}
