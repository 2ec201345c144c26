//! Prompt library — per-user prompts persisted in PostgreSQL.

pub mod handlers;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::prompt::PromptRow;

/// Rejects blank titles or content before anything reaches the database.
pub fn validate_entry(title: &str, content: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    Ok(())
}

pub async fn save_prompt(
    db: &PgPool,
    user_id: Uuid,
    title: &str,
    content: &str,
) -> Result<PromptRow, AppError> {
    validate_entry(title, content)?;

    let row = sqlx::query_as::<_, PromptRow>(
        "INSERT INTO prompts (id, user_id, title, content) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title.trim())
    .bind(content)
    .fetch_one(db)
    .await?;

    tracing::info!("Saved prompt {} for user {}", row.id, user_id);
    Ok(row)
}

/// The user's prompts, newest first.
pub async fn list_user_prompts(db: &PgPool, user_id: Uuid) -> Result<Vec<PromptRow>, AppError> {
    let rows = sqlx::query_as::<_, PromptRow>(
        "SELECT * FROM prompts WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
