// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stores over a backend whose reads can fail while writes still succeed.

use elderease_tutorials::db::{KeyValueStore, MemoryStore, ProfileStorage, StorageError};
use elderease_tutorials::models::ToggleOutcome;
use elderease_tutorials::services::{FavoritesStore, ProgressStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Memory store that fails the next read when armed.
#[derive(Default)]
struct FailNextRead {
    inner: MemoryStore,
    armed: AtomicBool,
}

impl FailNextRead {
    fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FailNextRead {
    async fn get_item(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        if self.armed.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Backend("deadline exceeded".to_string()));
        }
        self.inner.get_item(namespace, key).await
    }

    async fn set_item(
        &self,
        namespace: &str,
        key: &str,
        value: String,
    ) -> Result<(), StorageError> {
        self.inner.set_item(namespace, key, value).await
    }

    async fn remove_item(&self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(namespace, key).await
    }
}

fn storage(backend: &Arc<FailNextRead>) -> ProfileStorage {
    ProfileStorage::new(backend.clone(), "flaky")
}

#[tokio::test]
async fn test_failed_read_does_not_erase_progress() {
    let backend = Arc::new(FailNextRead::default());
    let progress = ProgressStore::new(storage(&backend));

    progress.mark_started("zoom-join").await;
    progress.mark_completed("gmail-attach").await;
    progress.mark_started("tiktok-record").await;
    assert_eq!(progress.get_all().await.len(), 3);

    backend.arm();
    progress.mark_started("messenger-send").await;

    let ids: Vec<String> = progress
        .get_all()
        .await
        .into_iter()
        .map(|r| r.tutorial_id)
        .collect();
    assert_eq!(ids, vec!["zoom-join", "gmail-attach", "tiktok-record"]);

    // Once reads work again the update goes through
    progress.mark_started("messenger-send").await;
    assert_eq!(progress.get_all().await.len(), 4);
}

#[tokio::test]
async fn test_failed_read_does_not_erase_time_spent() {
    let backend = Arc::new(FailNextRead::default());
    let progress = ProgressStore::new(storage(&backend));

    progress.record_time_spent("zoom-join", 10).await;
    backend.arm();
    progress.record_time_spent("zoom-join", 5).await;

    let record = progress.get("zoom-join").await.unwrap();
    assert_eq!(record.time_spent, 10);
}

#[tokio::test]
async fn test_failed_read_does_not_flip_favorites() {
    let backend = Arc::new(FailNextRead::default());
    let favorites = FavoritesStore::new(storage(&backend));

    favorites.toggle("zoom-join", "zoom").await;
    favorites.toggle("gmail-attach", "gmail").await;

    backend.arm();
    assert_eq!(favorites.toggle("zoom-join", "zoom").await, None);

    assert!(favorites.is_favorite("zoom-join").await);
    assert!(favorites.is_favorite("gmail-attach").await);

    assert_eq!(
        favorites.toggle("zoom-join", "zoom").await,
        Some(ToggleOutcome::Removed)
    );
    assert_eq!(favorites.get_all().await.len(), 1);
}
