use async_trait::async_trait;
use ::redis::aio::MultiplexedConnection;
use ::redis::{AsyncCommands, Client};

use crate::storage::{KvStore, StoreError};

/// Namespace prepended to every key so the store can share a Redis database.
pub const KEY_PREFIX: &str = "promptkit:";

/// Redis-backed store. Opens a multiplexed connection per operation.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

fn namespaced(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        Ok(conn.get::<_, Option<String>>(namespaced(key)).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(namespaced(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(namespaced(key)).await?;
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection().await?;
        let raw: Vec<String> = conn.keys(format!("{}*", namespaced(prefix))).await?;
        let mut keys: Vec<String> = raw
            .into_iter()
            .filter_map(|k| k.strip_prefix(KEY_PREFIX).map(str::to_string))
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn push_front(&self, key: &str, value: &str, limit: usize) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let key = namespaced(key);
        let last = isize::try_from(limit).unwrap_or(isize::MAX) - 1;
        ::redis::pipe()
            .atomic()
            .lpush(&key, value)
            .ignore()
            .ltrim(&key, 0, last)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn list(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection().await?;
        Ok(conn.lrange(namespaced(key), 0, -1).await?)
    }
}
