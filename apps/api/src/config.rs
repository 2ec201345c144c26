use anyhow::{bail, Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Unset → history and saved items live in process memory.
    pub redis_url: Option<String>,
    pub together_api_key: String,
    pub llm_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Number of transformations kept in history.
    pub history_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            together_api_key: require_env("TOGETHER_API_KEY")?,
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            history_limit: parse_history_limit(std::env::var("HISTORY_LIMIT").ok().as_deref())?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_history_limit(raw: Option<&str>) -> Result<usize> {
    let limit = match raw {
        None => return Ok(10),
        Some(v) => v
            .trim()
            .parse::<usize>()
            .context("HISTORY_LIMIT must be a positive integer")?,
    };
    if limit == 0 {
        bail!("HISTORY_LIMIT must be a positive integer");
    }
    Ok(limit)
}
