// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Learning statistics derived from a profile's progress records.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{TutorialProgressRecord, TutorialStatus};

/// Summary shown on the tutorial dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LearningStats {
    /// Tutorials with any recorded interaction
    pub total_tutorials: u32,
    pub completed_tutorials: u32,
    pub in_progress_tutorials: u32,
    /// Minutes, summed over all records
    pub total_time_spent: u32,
}

impl LearningStats {
    pub fn from_records(records: &[TutorialProgressRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.total_tutorials += 1;
            match record.status {
                TutorialStatus::Completed => stats.completed_tutorials += 1,
                TutorialStatus::InProgress => stats.in_progress_tutorials += 1,
                TutorialStatus::NotStarted => {}
            }
            stats.total_time_spent = stats.total_time_spent.saturating_add(record.time_spent);
        }
        stats
    }
}
