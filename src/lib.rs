// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! ElderEase Tutorials: progress tracking and discovery for how-to guides
//!
//! This crate provides the per-profile progress and favorites stores, the
//! keyword matcher behind tutorial search and the chat assistant, and the
//! HTTP API that exposes them.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::{KeyValueStore, ProfileStorage};
use services::{ChatAssistant, FavoritesStore, ProgressStore, TutorialCatalog};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub catalog: Arc<TutorialCatalog>,
    pub assistant: ChatAssistant,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>, catalog: TutorialCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            config,
            store,
            assistant: ChatAssistant::new(catalog.clone()),
            catalog,
        }
    }

    pub fn profile_storage(&self, profile_id: &str) -> ProfileStorage {
        ProfileStorage::new(self.store.clone(), profile_id)
    }

    pub fn progress(&self, profile_id: &str) -> ProgressStore {
        ProgressStore::new(self.profile_storage(profile_id))
    }

    pub fn favorites(&self, profile_id: &str) -> FavoritesStore {
        FavoritesStore::new(self.profile_storage(profile_id))
    }
}
