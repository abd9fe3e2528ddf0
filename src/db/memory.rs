// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process storage backend.

use super::{KeyValueStore, StorageError};
use dashmap::DashMap;

/// Key/value storage held in memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items across all namespaces.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .items
            .get(&(namespace.to_string(), key.to_string()))
            .map(|entry| entry.value().clone()))
    }

    async fn set_item(
        &self,
        namespace: &str,
        key: &str,
        value: String,
    ) -> Result<(), StorageError> {
        self.items
            .insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }

    async fn remove_item(&self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.items.remove(&(namespace.to_string(), key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_namespaces_are_isolated() {
        let store = MemoryStore::new();
        store
            .set_item("alice", "k", "1".to_string())
            .await
            .unwrap();
        store.set_item("bob", "k", "2".to_string()).await.unwrap();

        assert_eq!(store.get_item("alice", "k").await.unwrap(), Some("1".to_string()));
        assert_eq!(store.get_item("bob", "k").await.unwrap(), Some("2".to_string()));

        store.remove_item("alice", "k").await.unwrap();
        assert_eq!(store.get_item("alice", "k").await.unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
