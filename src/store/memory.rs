// ABOUTME: In-memory document store backend for local development and tests
// ABOUTME: Concurrent map of collections, sparse updates merged atomically per entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::{DocumentStore, StoreError, UpdateDocument};

/// Zero-configuration in-memory backend. Contents live for the process
/// lifetime; every operation is atomic on its entry via the map's sharding.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, DashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, name: &str) -> dashmap::mapref::one::Ref<'_, String, DashMap<String, Value>> {
        self.collections.entry(name.to_owned()).or_default().downgrade()
    }

    fn merge(target: &mut Value, update: UpdateDocument) {
        if let Value::Object(fields) = target {
            for (key, value) in update {
                fields.insert(key, value);
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let entries = self.collection(collection);
        let mut documents: Vec<Value> = entries.iter().map(|e| e.value().clone()).collect();
        // Deterministic listing order across backends: creation time, then id.
        // RFC3339 timestamps sort lexicographically.
        documents.sort_by(|a, b| {
            let key = |v: &Value| {
                (
                    v.get("created_at")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_owned(),
                    v.get("id")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_owned(),
                )
            };
            key(a).cmp(&key(b))
        });
        Ok(documents)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.collection(collection).get(id).map(|e| e.value().clone()))
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError> {
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::Unavailable("document is missing a string id".into()))?
            .to_owned();
        self.collection(collection).insert(id, document);
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<bool, StoreError> {
        let entries = self.collection(collection);
        let result = match entries.get_mut(id) {
            Some(mut entry) => {
                Self::merge(entry.value_mut(), update);
                Ok(true)
            }
            None => Ok(false),
        };
        result
    }

    async fn upsert(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<(), StoreError> {
        let entries = self.collection(collection);
        let mut entry = entries
            .entry(id.to_owned())
            .or_insert_with(|| serde_json::json!({ "id": id }));
        Self::merge(entry.value_mut(), update);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        Ok(self.collection(collection).remove(id).is_some())
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        Ok(self.collection(collection).len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update_of(pairs: &[(&str, Value)]) -> UpdateDocument {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryStore::new();
        store
            .insert("projects", json!({"id": "p1", "title": "Reel"}))
            .await
            .unwrap();

        let found = store.find_by_id("projects", "p1").await.unwrap().unwrap();
        assert_eq!(found["title"], "Reel");
        assert!(store.find_by_id("projects", "p2").await.unwrap().is_none());
        assert_eq!(store.count("projects").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_requires_id() {
        let store = MemoryStore::new();
        let err = store.insert("projects", json!({"title": "x"})).await;
        assert!(matches!(err, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_sparse_update_leaves_other_fields() {
        let store = MemoryStore::new();
        store
            .insert("reviews", json!({"id": "r1", "client_name": "Ada", "star_rating": 5}))
            .await
            .unwrap();

        let matched = store
            .update("reviews", "r1", update_of(&[("star_rating", json!(4))]))
            .await
            .unwrap();
        assert!(matched);

        let doc = store.find_by_id("reviews", "r1").await.unwrap().unwrap();
        assert_eq!(doc["star_rating"], 4);
        assert_eq!(doc["client_name"], "Ada");
    }

    #[tokio::test]
    async fn test_update_missing_returns_false() {
        let store = MemoryStore::new();
        let matched = store
            .update("reviews", "nope", update_of(&[("star_rating", json!(1))]))
            .await
            .unwrap();
        assert!(!matched);
    }

    #[tokio::test]
    async fn test_upsert_creates_then_merges() {
        let store = MemoryStore::new();
        store
            .upsert("site_settings", "site_settings", update_of(&[("logo", json!("data:..."))]))
            .await
            .unwrap();
        store
            .upsert("site_settings", "site_settings", update_of(&[("hero_title", json!("Rexora"))]))
            .await
            .unwrap();

        let doc = store
            .find_by_id("site_settings", "site_settings")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc["id"], "site_settings");
        assert_eq!(doc["logo"], "data:...");
        assert_eq!(doc["hero_title"], "Rexora");
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        store.insert("projects", json!({"id": "p1"})).await.unwrap();

        assert!(store.delete("projects", "p1").await.unwrap());
        assert!(!store.delete("projects", "p1").await.unwrap());
        assert_eq!(store.count("projects").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_created_at() {
        let store = MemoryStore::new();
        store
            .insert("projects", json!({"id": "b", "created_at": "2025-02-01T00:00:00Z"}))
            .await
            .unwrap();
        store
            .insert("projects", json!({"id": "a", "created_at": "2025-01-01T00:00:00Z"}))
            .await
            .unwrap();

        let all = store.find_all("projects").await.unwrap();
        assert_eq!(all[0]["id"], "a");
        assert_eq!(all[1]["id"], "b");
    }
}
