// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tutorial catalog loading and keyword matching.
//!
//! Matching is a linear scan in catalog order (platform-major, then
//! tutorial index). Substring hits on title, description or steps come
//! first; the word-level fallback only runs when there are none.

use crate::models::{GlossaryTerm, Platform, TutorialDefinition, TutorialMatch};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/tutorials.json");

/// Result cap for conversational replies.
pub const CHAT_RESULT_LIMIT: usize = 10;
/// Result cap for inline search suggestions.
pub const SUGGESTION_LIMIT: usize = 5;
/// Query tokens this short are ignored by the keyword fallback.
const MIN_KEYWORD_LEN: usize = 3;

/// Phrases that mark a message as a glossary question.
const GLOSSARY_TRIGGERS: [&str; 4] = ["what does", "meaning of", "mean?", "pronounce"];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    platforms: Vec<Platform>,
    #[serde(default)]
    glossary: Vec<GlossaryTerm>,
}

/// Static tutorials and glossary with lookup operations.
#[derive(Debug, Default, Clone)]
pub struct TutorialCatalog {
    platforms: Vec<Platform>,
    glossary: Vec<GlossaryTerm>,
}

/// What the search bar should do with a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SearchResolution {
    Platform(Platform),
    Tutorial(TutorialMatch),
    Term(GlossaryTerm),
    NoMatch,
}

impl TutorialCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load_from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut seen = HashSet::new();
        for tutorial in file.platforms.iter().flat_map(|p| &p.tutorials) {
            if !seen.insert(tutorial.id.as_str()) {
                return Err(CatalogError::DuplicateTutorial(tutorial.id.clone()));
            }
        }

        tracing::info!(
            platforms = file.platforms.len(),
            tutorials = seen.len(),
            glossary = file.glossary.len(),
            "Loaded tutorial catalog"
        );

        Ok(Self {
            platforms: file.platforms,
            glossary: file.glossary,
        })
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn glossary(&self) -> &[GlossaryTerm] {
        &self.glossary
    }

    pub fn platform(&self, key: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.key == key)
    }

    /// Every tutorial in catalog order, with its position.
    fn entries(&self) -> impl Iterator<Item = (&Platform, usize, &TutorialDefinition)> {
        self.platforms.iter().flat_map(|p| {
            p.tutorials
                .iter()
                .enumerate()
                .map(move |(index, tutorial)| (p, index, tutorial))
        })
    }

    /// Locate a tutorial by id.
    pub fn find_tutorial(&self, tutorial_id: &str) -> Option<TutorialMatch> {
        self.entries()
            .find(|(_, _, t)| t.id == tutorial_id)
            .map(|(p, index, t)| to_match(p, index, t))
    }

    /// Tutorials whose title, description or any step contains the query.
    pub fn find_by_substring(&self, query: &str) -> Vec<TutorialMatch> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        self.entries()
            .filter(|(_, _, t)| {
                t.title.to_lowercase().contains(&query)
                    || t.description.to_lowercase().contains(&query)
                    || t.steps.iter().any(|s| s.to_lowercase().contains(&query))
            })
            .map(|(p, index, t)| to_match(p, index, t))
            .collect()
    }

    /// Tutorials with a title word containing any query token.
    pub fn find_by_keywords(&self, query: &str) -> Vec<TutorialMatch> {
        let query = normalize(query);
        let tokens: Vec<&str> = query
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        self.entries()
            .filter(|(_, _, t)| {
                let title = t.title.to_lowercase();
                title
                    .split(|c: char| c.is_whitespace() || c == '-')
                    .filter(|word| !word.is_empty())
                    .any(|word| tokens.iter().any(|token| word.contains(token)))
            })
            .map(|(p, index, t)| to_match(p, index, t))
            .collect()
    }

    /// Substring matches, or keyword matches when there are none, without
    /// duplicate tutorials and capped at `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<TutorialMatch> {
        let mut results = self.find_by_substring(query);
        if results.is_empty() {
            results = self.find_by_keywords(query);
        }

        let mut seen = HashSet::new();
        results.retain(|m| seen.insert(m.tutorial.id.clone()));
        results.truncate(limit);
        results
    }

    /// Distinct tutorial titles containing the query, for type-ahead.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut titles: Vec<String> = Vec::new();
        for (_, _, tutorial) in self.entries() {
            if titles.len() == SUGGESTION_LIMIT {
                break;
            }
            if tutorial.title.to_lowercase().contains(&query) && !titles.contains(&tutorial.title)
            {
                titles.push(tutorial.title.clone());
            }
        }
        titles
    }

    /// First platform whose display name contains the query.
    pub fn find_platform(&self, query: &str) -> Option<&Platform> {
        let query = normalize(query);
        if query.is_empty() {
            return None;
        }
        self.platforms
            .iter()
            .find(|p| p.name.to_lowercase().contains(&query))
    }

    /// Resolve a "what does X mean" style message to a glossary term.
    ///
    /// Returns `None` for messages that are not glossary questions.
    pub fn lookup_term(&self, message: &str) -> Option<&GlossaryTerm> {
        let lower = normalize(message);
        if !GLOSSARY_TRIGGERS.iter().any(|t| lower.contains(t)) {
            return None;
        }

        let words: Vec<String> = lower
            .split_whitespace()
            .map(clean_word)
            .filter(|w| !w.is_empty())
            .collect();

        // Multi-word terms ("no cap") appear as a phrase in the message.
        let phrase = words.join(" ");
        if let Some(term) = self.glossary.iter().find(|t| {
            let word = t.word.to_lowercase();
            word.contains(' ') && format!(" {} ", phrase).contains(&format!(" {} ", word))
        }) {
            return Some(term);
        }

        let candidate = words
            .iter()
            .find(|w| self.glossary.iter().any(|t| term_matches(t, w)))
            .or_else(|| words.last())?;

        self.glossary.iter().find(|t| term_matches(t, candidate))
    }

    /// Search-bar resolution: platform, then tutorial, then glossary term.
    pub fn resolve_search(&self, query: &str) -> SearchResolution {
        let lower = normalize(query);
        if lower.is_empty() {
            return SearchResolution::NoMatch;
        }

        if let Some(platform) = self.find_platform(&lower) {
            return SearchResolution::Platform(platform.clone());
        }

        if let Some((p, index, t)) = self.entries().find(|(_, _, t)| {
            t.title.to_lowercase().contains(&lower) || t.description.to_lowercase().contains(&lower)
        }) {
            return SearchResolution::Tutorial(to_match(p, index, t));
        }

        self.glossary
            .iter()
            .find(|t| {
                t.word.to_lowercase().contains(&lower) || t.meaning.to_lowercase().contains(&lower)
            })
            .map(|t| SearchResolution::Term(t.clone()))
            .unwrap_or(SearchResolution::NoMatch)
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

fn clean_word(word: &str) -> String {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

/// Exact word match, or the candidate appears in the phonetic spelling.
fn term_matches(term: &GlossaryTerm, candidate: &str) -> bool {
    // Very short candidates ("a", "is") would match most phonetic spellings.
    term.word.to_lowercase() == candidate
        || (candidate.chars().count() >= MIN_KEYWORD_LEN
            && term.pronunciation.to_lowercase().contains(candidate))
}

fn to_match(platform: &Platform, index: usize, tutorial: &TutorialDefinition) -> TutorialMatch {
    TutorialMatch {
        platform: platform.key.clone(),
        tutorial_index: index,
        tutorial: tutorial.clone(),
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Duplicate tutorial id: {0}")]
    DuplicateTutorial(String),
}
