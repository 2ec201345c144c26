//! Saved items — JSON objects kept under caller-chosen keys in the key-value store.
//!
//! Keys live under their own `saved:` namespace, so no caller-chosen key can
//! reach history or any other stored value. Listing keeps objects with a
//! truthy `prompt`.

pub mod handlers;

use chrono::{NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::storage::{KvStore, StoreError};
use crate::transform::platform::is_truthy;

const CREATED_ON: &str = "createdOn";
const SAVED_PREFIX: &str = "saved:";

fn store_key(key: &str) -> String {
    format!("{SAVED_PREFIX}{key}")
}

/// Adds `createdOn` (YYYY-MM-DD) unless the item already carries one.
fn stamp_created_on(mut item: Map<String, Value>, today: NaiveDate) -> Map<String, Value> {
    if !item.get(CREATED_ON).is_some_and(|v| !v.is_null()) {
        item.insert(
            CREATED_ON.to_string(),
            Value::String(today.format("%Y-%m-%d").to_string()),
        );
    }
    item
}

pub async fn save(
    store: &dyn KvStore,
    key: &str,
    item: Map<String, Value>,
) -> Result<Map<String, Value>, StoreError> {
    let item = stamp_created_on(item, Utc::now().date_naive());
    store
        .set(&store_key(key), &serde_json::to_string(&Value::Object(item.clone()))?)
        .await?;
    Ok(item)
}

/// Removes the item if present, saves it otherwise. Returns whether it is now saved.
pub async fn toggle(
    store: &dyn KvStore,
    key: &str,
    item: Map<String, Value>,
) -> Result<bool, StoreError> {
    if store.get(&store_key(key)).await?.is_some() {
        remove(store, key).await?;
        Ok(false)
    } else {
        save(store, key, item).await?;
        Ok(true)
    }
}

/// The stored JSON value, if the key exists and holds valid JSON.
pub async fn get(store: &dyn KvStore, key: &str) -> Result<Option<Value>, StoreError> {
    Ok(store
        .get(&store_key(key))
        .await?
        .and_then(|raw| serde_json::from_str(&raw).ok()))
}

pub async fn remove(store: &dyn KvStore, key: &str) -> Result<(), StoreError> {
    store.remove(&store_key(key)).await
}

/// Every saved item as `{id: key, ...item}`; fields inside the item win over `id`.
pub async fn list(store: &dyn KvStore) -> Result<Vec<Value>, StoreError> {
    let mut saved = Vec::new();
    for stored in store.keys(SAVED_PREFIX).await? {
        let Some(key) = stored.strip_prefix(SAVED_PREFIX) else {
            continue;
        };
        let Some(Value::Object(fields)) = get(store, key).await? else {
            continue;
        };
        if !fields.get("prompt").is_some_and(is_truthy) {
            continue;
        }
        let mut entry = Map::new();
        entry.insert("id".to_string(), Value::String(key.to_string()));
        entry.extend(fields);
        saved.push(Value::Object(entry));
    }
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{self, HistoryItem, HISTORY_KEY};
    use crate::models::platform::Platform;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_created_on_stamped_when_absent() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let item = stamp_created_on(obj(json!({"prompt": "p"})), today);
        assert_eq!(item[CREATED_ON], json!("2026-03-09"));
    }

    #[test]
    fn test_created_on_kept_when_present() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let item = stamp_created_on(obj(json!({"prompt": "p", "createdOn": "2024-01-01"})), today);
        assert_eq!(item[CREATED_ON], json!("2024-01-01"));
    }

    #[tokio::test]
    async fn test_toggle_saves_then_removes() {
        let store = MemoryStore::new();
        let item = obj(json!({"prompt": "A neon city at dusk", "title": "City"}));
        assert!(toggle(&store, "city", item.clone()).await.unwrap());
        assert!(get(&store, "city").await.unwrap().is_some());
        assert!(!toggle(&store, "city", item).await.unwrap());
        assert!(get(&store, "city").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_skips_unrelated_values() {
        let store = MemoryStore::new();
        save(&store, "one", obj(json!({"prompt": "first"}))).await.unwrap();
        save(&store, "blank", obj(json!({"prompt": ""}))).await.unwrap();
        save(&store, "zero", obj(json!({"prompt": 0}))).await.unwrap();
        save(&store, "off", obj(json!({"prompt": false}))).await.unwrap();
        store.set(&store_key("raw"), "not json").await.unwrap();
        store.set("unrelated", r#"{"prompt": "elsewhere"}"#).await.unwrap();

        let items = list(&store).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], json!("one"));
        assert_eq!(items[0]["prompt"], json!("first"));
        assert!(items[0][CREATED_ON].is_string());
    }

    #[tokio::test]
    async fn test_item_id_overrides_key() {
        let store = MemoryStore::new();
        save(&store, "key", obj(json!({"prompt": "p", "id": "own-id"}))).await.unwrap();
        let items = list(&store).await.unwrap();
        assert_eq!(items[0]["id"], json!("own-id"));
    }

    #[tokio::test]
    async fn test_remove_then_get_is_none() {
        let store = MemoryStore::new();
        save(&store, "k", obj(json!({"prompt": "p"}))).await.unwrap();
        remove(&store, "k").await.unwrap();
        assert!(get(&store, "k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_saved_key_does_not_collide_with_history() {
        let store = MemoryStore::new();
        save(&store, HISTORY_KEY, obj(json!({"prompt": "kept"}))).await.unwrap();
        let item = HistoryItem::new("q", Platform::Chatgpt, "question-answer", &json!({})).unwrap();
        history::record(&store, item, 10).await.unwrap();

        let saved = get(&store, HISTORY_KEY).await.unwrap().unwrap();
        assert_eq!(saved["prompt"], json!("kept"));
        assert_eq!(history::load(&store).await.unwrap().len(), 1);

        remove(&store, HISTORY_KEY).await.unwrap();
        assert_eq!(history::load(&store).await.unwrap().len(), 1);
    }
}
