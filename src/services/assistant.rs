// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chat assistant that answers free-text questions from the catalog.

use crate::models::{GlossaryTerm, Platform, TutorialMatch};
use crate::services::catalog::{TutorialCatalog, CHAT_RESULT_LIMIT};
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const HELP_MESSAGE: &str = "I can help you with:\n\n\
📱 **Tutorials** - Search for how-to guides\n\
💬 **Language** - Learn modern terms\n\n\
Try asking: 'How to send message on Facebook?' or 'What does stan mean?'";

pub const GREETING_MESSAGE: &str = "Hi! I'm your learning assistant. You can ask me:\n\n\
📱 **Tutorials**: 'How to send message on Instagram?'\n\
💬 **Language**: 'What does stan mean?'\n\n\
Try asking anything about the tutorials!";

/// A reply to one chat message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum AssistantReply {
    Help {
        content: String,
    },
    Term {
        content: String,
        term: GlossaryTerm,
    },
    Platform {
        content: String,
        platform: String,
    },
    Tutorial {
        content: String,
        tutorial: TutorialMatch,
    },
    Tutorials {
        content: String,
        tutorials: Vec<TutorialMatch>,
    },
}

impl AssistantReply {
    pub fn content(&self) -> &str {
        match self {
            AssistantReply::Help { content }
            | AssistantReply::Term { content, .. }
            | AssistantReply::Platform { content, .. }
            | AssistantReply::Tutorial { content, .. }
            | AssistantReply::Tutorials { content, .. } => content,
        }
    }
}

#[derive(Clone)]
pub struct ChatAssistant {
    catalog: Arc<TutorialCatalog>,
}

impl ChatAssistant {
    pub fn new(catalog: Arc<TutorialCatalog>) -> Self {
        Self { catalog }
    }

    /// Opening message of a chat session.
    pub fn greeting(&self) -> AssistantReply {
        AssistantReply::Help {
            content: GREETING_MESSAGE.to_string(),
        }
    }

    /// Answer a message. Never fails; unmatched input gets the help text.
    pub fn reply(&self, message: &str) -> AssistantReply {
        let message = message.trim();
        if message.is_empty() {
            return help();
        }

        if let Some(term) = self.catalog.lookup_term(message) {
            return AssistantReply::Term {
                content: format!(
                    "**{}**\n\n📢 Pronunciation: /{}/\n\n📖 Meaning: {}",
                    term.word, term.pronunciation, term.meaning
                ),
                term: term.clone(),
            };
        }

        if let Some(platform) = self.catalog.find_platform(message) {
            return AssistantReply::Platform {
                content: platform_content(platform),
                platform: platform.key.clone(),
            };
        }

        let mut results = self.catalog.search(message, CHAT_RESULT_LIMIT);
        match results.len() {
            0 => help(),
            1 => {
                let tutorial = results.remove(0);
                AssistantReply::Tutorial {
                    content: format!(
                        "I found this tutorial for you: **\"{}\"** on {}.\n\n{}\n\nClick below to watch the tutorial!",
                        tutorial.tutorial.title,
                        self.platform_name(&tutorial.platform),
                        tutorial.tutorial.description
                    ),
                    tutorial,
                }
            }
            _ => AssistantReply::Tutorials {
                content: self.list_content(message, &results),
                tutorials: results,
            },
        }
    }

    fn platform_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog
            .platform(key)
            .map(|p| p.name.as_str())
            .unwrap_or(key)
    }

    /// Titles grouped under their platform, platforms in first-seen order.
    fn list_content(&self, message: &str, results: &[TutorialMatch]) -> String {
        let mut content = format!(
            "I found {} tutorials related to \"{}\":\n\n",
            results.len(),
            message
        );

        let mut platforms: Vec<&str> = Vec::new();
        for result in results {
            if !platforms.contains(&result.platform.as_str()) {
                platforms.push(&result.platform);
            }
        }

        for platform in platforms {
            let _ = writeln!(content, "**{}:**", self.platform_name(platform));
            for result in results.iter().filter(|r| r.platform == platform) {
                let _ = writeln!(content, "• {}", result.tutorial.title);
            }
            content.push('\n');
        }
        content
    }
}

fn help() -> AssistantReply {
    AssistantReply::Help {
        content: HELP_MESSAGE.to_string(),
    }
}

fn platform_content(platform: &Platform) -> String {
    let mut content = format!(
        "**{}** has {} tutorials:\n\n",
        platform.name,
        platform.tutorials.len()
    );
    for tutorial in &platform.tutorials {
        let _ = writeln!(content, "• {}", tutorial.title);
    }
    content
}
