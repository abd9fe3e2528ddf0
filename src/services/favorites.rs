// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-profile favorite tutorials.

use crate::db::{keys, ProfileStorage};
use crate::models::{FavoriteRecord, ToggleOutcome};

#[derive(Clone)]
pub struct FavoritesStore {
    storage: ProfileStorage,
}

impl FavoritesStore {
    pub fn new(storage: ProfileStorage) -> Self {
        Self { storage }
    }

    pub async fn get_all(&self) -> Vec<FavoriteRecord> {
        self.storage.load_list(keys::FAVORITES).await
    }

    /// Add the tutorial if absent, remove it if present.
    ///
    /// Returns `None` without touching storage when the stored favorites
    /// cannot be read.
    pub async fn toggle(&self, tutorial_id: &str, platform: &str) -> Option<ToggleOutcome> {
        let Some(mut favorites) = self
            .storage
            .try_load_list::<FavoriteRecord>(keys::FAVORITES)
            .await
        else {
            tracing::warn!(
                profile_id = self.storage.profile_id(),
                tutorial_id,
                "Stored favorites unreadable, toggle skipped"
            );
            return None;
        };

        let before = favorites.len();
        favorites.retain(|f| f.tutorial_id != tutorial_id);

        let outcome = if favorites.len() < before {
            ToggleOutcome::Removed
        } else {
            favorites.push(FavoriteRecord {
                tutorial_id: tutorial_id.to_string(),
                platform: platform.to_string(),
                added_at: chrono::Utc::now(),
            });
            ToggleOutcome::Added
        };

        self.storage.save_list(keys::FAVORITES, &favorites).await;

        tracing::debug!(
            profile_id = self.storage.profile_id(),
            tutorial_id,
            outcome = ?outcome,
            "Favorite toggled"
        );

        Some(outcome)
    }

    pub async fn is_favorite(&self, tutorial_id: &str) -> bool {
        self.get_all()
            .await
            .iter()
            .any(|f| f.tutorial_id == tutorial_id)
    }

    pub async fn clear(&self) {
        self.storage.remove(keys::FAVORITES).await;
    }
}
