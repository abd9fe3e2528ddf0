// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod assistant;
pub mod catalog;
pub mod favorites;
pub mod progress;

pub use assistant::{AssistantReply, ChatAssistant};
pub use catalog::{CatalogError, SearchResolution, TutorialCatalog};
pub use favorites::FavoritesStore;
pub use progress::ProgressStore;
