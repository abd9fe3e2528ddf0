// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Static tutorial catalog and glossary models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A how-to guide for a third-party app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TutorialDefinition {
    /// Stable identifier (e.g. "messenger-send")
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered step descriptions
    pub steps: Vec<String>,
    /// Video path served by the front end
    pub video: String,
    /// Video length in seconds
    pub duration: u32,
}

/// An app with its tutorials, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Platform {
    /// Lookup key (e.g. "googlemeet")
    pub key: String,
    /// Display name (e.g. "Google Meet")
    pub name: String,
    pub icon: String,
    /// Brand colour as `#rrggbb`
    pub color: String,
    pub tutorials: Vec<TutorialDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TermCategory {
    Slang,
    Tech,
    Internet,
}

/// A modern word with its phonetic spelling and meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GlossaryTerm {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub category: TermCategory,
}

/// A tutorial located in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TutorialMatch {
    /// Platform key
    pub platform: String,
    /// Index within the platform's tutorial list
    pub tutorial_index: usize,
    pub tutorial: TutorialDefinition,
}
