//! Key-value persistence surface used for transformation history and saved items.
//!
//! Two backends: `RedisStore` (production) and `MemoryStore` (tests, embedding).
//! Carried in `AppState` as `Arc<dyn KvStore>`.

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String-keyed store holding plain values and capped lists.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes a value or a list. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Keys starting with `prefix`, sorted. Lists are included, so callers keep
    /// lists and plain values under separate prefixes.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Prepends `value` to the list at `key` and trims it to `limit` entries,
    /// as one atomic step.
    async fn push_front(&self, key: &str, value: &str, limit: usize) -> Result<(), StoreError>;

    /// Every entry of the list at `key`, front first. Empty when absent.
    async fn list(&self, key: &str) -> Result<Vec<String>, StoreError>;
}
