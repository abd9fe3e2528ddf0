// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Favorite (bookmarked) tutorial model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A bookmarked tutorial, stored under `elder_tutorial_favorites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteRecord {
    pub tutorial_id: String,
    /// Platform key (e.g. "messenger")
    pub platform: String,
    #[serde(default = "Utc::now")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub added_at: DateTime<Utc>,
}

/// Outcome of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ToggleOutcome {
    Added,
    Removed,
}
