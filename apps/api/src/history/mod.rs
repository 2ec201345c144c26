//! Transformation history — the most recent transformations, newest first.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::models::platform::Platform;
use crate::storage::{KvStore, StoreError};

pub const HISTORY_KEY: &str = "promptHistory";
const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: Uuid,
    /// First 100 characters of the prompt, "..." appended when cut.
    pub prompt: String,
    pub platform: Platform,
    pub template: String,
    pub timestamp: DateTime<Utc>,
    /// Pretty-printed transformation output.
    pub result: String,
}

impl HistoryItem {
    pub fn new(
        prompt: &str,
        platform: Platform,
        template: &str,
        result: &Value,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            prompt: preview(prompt),
            platform,
            template: template.to_string(),
            timestamp: Utc::now(),
            result: serde_json::to_string_pretty(result)?,
        })
    }
}

fn preview(prompt: &str) -> String {
    let mut chars = prompt.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Stored history, newest first. Unreadable entries are skipped.
pub async fn load(store: &dyn KvStore) -> Result<Vec<HistoryItem>, StoreError> {
    let raw = store.list(HISTORY_KEY).await?;
    Ok(raw
        .iter()
        .filter_map(|entry| match serde_json::from_str(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping unreadable history entry: {e}");
                None
            }
        })
        .collect())
}

/// Prepends `item` and keeps at most `limit` entries.
pub async fn record(
    store: &dyn KvStore,
    item: HistoryItem,
    limit: usize,
) -> Result<(), StoreError> {
    let entry = serde_json::to_string(&item)?;
    store.push_front(HISTORY_KEY, &entry, limit).await
}

pub async fn clear(store: &dyn KvStore) -> Result<(), StoreError> {
    store.remove(HISTORY_KEY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use serde_json::json;

    fn item(prompt: &str) -> HistoryItem {
        HistoryItem::new(prompt, Platform::Chatgpt, "question-answer", &json!({"a": 1})).unwrap()
    }

    #[test]
    fn test_short_prompt_not_truncated() {
        assert_eq!(preview("hello"), "hello");
        assert_eq!(preview(&"x".repeat(100)), "x".repeat(100));
    }

    #[test]
    fn test_long_prompt_truncated_with_ellipsis() {
        let p = preview(&"é".repeat(150));
        assert_eq!(p.chars().count(), 103);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_result_is_pretty_printed() {
        let i = item("q");
        assert_eq!(i.result, "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_record_prepends_and_caps() {
        let store = MemoryStore::new();
        for n in 0..12 {
            record(&store, item(&format!("prompt {n}")), 10).await.unwrap();
        }
        let items = load(&store).await.unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].prompt, "prompt 11");
        assert_eq!(items[9].prompt, "prompt 2");
    }

    #[tokio::test]
    async fn test_unreadable_entry_is_skipped() {
        let store = MemoryStore::new();
        record(&store, item("older"), 10).await.unwrap();
        store.push_front(HISTORY_KEY, "not json", 10).await.unwrap();
        record(&store, item("fresh"), 10).await.unwrap();

        let items = load(&store).await.unwrap();
        let prompts: Vec<&str> = items.iter().map(|i| i.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["fresh", "older"]);
    }

    /// Yields to the scheduler before every call so interleavings surface.
    struct YieldingStore(MemoryStore);

    #[async_trait]
    impl KvStore for YieldingStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            tokio::task::yield_now().await;
            self.0.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            tokio::task::yield_now().await;
            self.0.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            tokio::task::yield_now().await;
            self.0.remove(key).await
        }

        async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
            tokio::task::yield_now().await;
            self.0.keys(prefix).await
        }

        async fn push_front(&self, key: &str, value: &str, limit: usize) -> Result<(), StoreError> {
            tokio::task::yield_now().await;
            self.0.push_front(key, value, limit).await
        }

        async fn list(&self, key: &str) -> Result<Vec<String>, StoreError> {
            tokio::task::yield_now().await;
            self.0.list(key).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_records_are_all_kept() {
        let store = YieldingStore(MemoryStore::new());
        let (a, b) = tokio::join!(
            record(&store, item("first"), 10),
            record(&store, item("second"), 10),
        );
        a.unwrap();
        b.unwrap();
        assert_eq!(load(&store).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = MemoryStore::new();
        record(&store, item("q"), 10).await.unwrap();
        clear(&store).await.unwrap();
        assert!(load(&store).await.unwrap().is_empty());
    }
}
