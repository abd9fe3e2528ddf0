// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile-scoped storage with defensive (de)serialization.
//!
//! Failures are logged and swallowed here: reads fall back to an empty
//! list and writes become no-ops, so callers never see a storage error.
//! Read-modify-write callers use [`ProfileStorage::try_load_list`] so a
//! failed read is never written back as an empty list.

use super::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A storage backend bound to one profile.
#[derive(Clone)]
pub struct ProfileStorage {
    store: Arc<dyn KeyValueStore>,
    profile_id: String,
}

impl ProfileStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, profile_id: impl Into<String>) -> Self {
        Self {
            store,
            profile_id: profile_id.into(),
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// Load the list stored under `key`, empty if it cannot be read.
    pub async fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.try_load_list(key).await.unwrap_or_default()
    }

    /// Load the list stored under `key` for a read-modify-write.
    ///
    /// An absent key is an empty list. Returns `None` when the read fails
    /// or the stored value is not a JSON array; the caller must not write
    /// the key back in that case. Entries that fail to decode are dropped
    /// individually, so one bad record does not hide the others.
    pub async fn try_load_list<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let raw = match self.store.get_item(&self.profile_id, key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Some(Vec::new()),
            Err(e) => {
                tracing::warn!(
                    profile_id = %self.profile_id,
                    key,
                    error = %e,
                    "Storage read failed"
                );
                return None;
            }
        };

        let entries = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(entries)) => entries,
            Ok(_) | Err(_) => {
                tracing::warn!(
                    profile_id = %self.profile_id,
                    key,
                    "Stored value is not a JSON array"
                );
                return None;
            }
        };

        let total = entries.len();
        let decoded: Vec<T> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();

        if decoded.len() != total {
            tracing::warn!(
                profile_id = %self.profile_id,
                key,
                skipped = total - decoded.len(),
                "Skipped malformed stored records"
            );
        }

        Some(decoded)
    }

    /// Replace the list stored under `key`.
    pub async fn save_list<T: Serialize>(&self, key: &str, items: &[T]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to encode records");
                return;
            }
        };

        if let Err(e) = self.store.set_item(&self.profile_id, key, raw).await {
            tracing::warn!(
                profile_id = %self.profile_id,
                key,
                error = %e,
                "Storage write failed, change not persisted"
            );
        }
    }

    /// Remove one key.
    pub async fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove_item(&self.profile_id, key).await {
            tracing::warn!(
                profile_id = %self.profile_id,
                key,
                error = %e,
                "Storage remove failed"
            );
        }
    }
}
