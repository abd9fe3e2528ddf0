// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod favorite;
pub mod progress;
pub mod stats;
pub mod tutorial;

pub use favorite::{FavoriteRecord, ToggleOutcome};
pub use progress::{ProgressUpdate, TutorialProgressRecord, TutorialStatus};
pub use stats::LearningStats;
pub use tutorial::{GlossaryTerm, Platform, TermCategory, TutorialDefinition, TutorialMatch};
