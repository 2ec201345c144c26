use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_PROMPTS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS prompts (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )";

const CREATE_PROMPTS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS prompts_user_id_idx ON prompts (user_id, created_at DESC)";

/// Creates the PostgreSQL pool backing the prompt library.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the prompt library table and index if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_PROMPTS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create prompts table")?;
    sqlx::query(CREATE_PROMPTS_USER_INDEX)
        .execute(pool)
        .await
        .context("Failed to create prompts index")?;

    info!("Prompt library schema ready");
    Ok(())
}
