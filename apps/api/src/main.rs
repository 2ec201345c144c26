mod config;
mod db;
mod errors;
mod generation;
mod history;
mod library;
mod llm_client;
mod models;
mod routes;
mod saved;
mod state;
mod storage;
mod templates;
mod transform;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{KvStore, MemoryStore, RedisStore};
use crate::templates::TemplateRegistry;
use crate::transform::Transformer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PromptKit API v{}", env!("CARGO_PKG_VERSION"));

    // Template catalogue and transformer (immutable for the life of the process)
    let registry = Arc::new(TemplateRegistry::builtin()?);
    let transformer =
        Arc::new(Transformer::new(registry.clone()).context("Failed to compile slot extractors")?);
    info!("Template registry loaded ({} templates)", registry.all().len());

    // Initialize PostgreSQL (prompt library)
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Initialize key-value store (history and saved items)
    let kv: Arc<dyn KvStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Redis store initialized");
            Arc::new(RedisStore::new(client))
        }
        None => {
            warn!("REDIS_URL not set; history and saved items are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_api_url.clone(), config.together_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        db,
        kv,
        llm,
        config: config.clone(),
        registry,
        transformer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the web client's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
