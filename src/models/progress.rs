// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Tutorial progress record and its merge rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Progress assigned when a tutorial is first opened.
pub const STARTED_PROGRESS: u8 = 10;
/// Progress of a finished tutorial.
pub const COMPLETE_PROGRESS: u8 = 100;

/// Viewing status of a tutorial.
///
/// Variants are declared in lifecycle order so `Ord` follows the only
/// allowed direction of travel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TutorialStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Per-tutorial progress, stored under `elder_tutorial_progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TutorialProgressRecord {
    pub tutorial_id: String,
    #[serde(default)]
    pub status: TutorialStatus,
    /// Completion percentage (0-100). Records written without it count as 0.
    #[serde(default)]
    pub progress: u8,
    #[serde(default = "Utc::now")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub last_accessed: DateTime<Utc>,
    /// Minutes spent watching
    #[serde(default)]
    pub time_spent: u32,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number[]"))]
    pub completed_steps: BTreeSet<u32>,
}

impl TutorialProgressRecord {
    /// A fresh record: not started, 0%.
    pub fn new(tutorial_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            tutorial_id: tutorial_id.into(),
            status: TutorialStatus::NotStarted,
            progress: 0,
            last_accessed: now,
            time_spent: 0,
            completed_steps: BTreeSet::new(),
        }
    }

    /// Merge a partial update into this record.
    ///
    /// Progress never decreases and status never moves backwards; the
    /// stored value wins in both cases. Completed steps accumulate.
    pub fn apply(&mut self, update: &ProgressUpdate, now: DateTime<Utc>) {
        if let Some(status) = update.status {
            self.status = self.status.max(status);
        }
        if let Some(progress) = update.progress {
            self.progress = self.progress.max(progress.min(COMPLETE_PROGRESS));
        }
        if let Some(time_spent) = update.time_spent {
            self.time_spent = time_spent;
        }
        if let Some(steps) = &update.completed_steps {
            self.completed_steps.extend(steps.iter().copied());
        }
        self.last_accessed = now;
    }
}

/// Partial set of fields for an upsert. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub status: Option<TutorialStatus>,
    pub progress: Option<u8>,
    pub time_spent: Option<u32>,
    pub completed_steps: Option<BTreeSet<u32>>,
}

impl ProgressUpdate {
    pub fn started() -> Self {
        Self {
            status: Some(TutorialStatus::InProgress),
            progress: Some(STARTED_PROGRESS),
            ..Default::default()
        }
    }

    pub fn completed() -> Self {
        Self {
            status: Some(TutorialStatus::Completed),
            progress: Some(COMPLETE_PROGRESS),
            ..Default::default()
        }
    }

    pub fn progress(progress: u8, status: TutorialStatus) -> Self {
        Self {
            status: Some(status),
            progress: Some(progress),
            ..Default::default()
        }
    }
}

/// Convert a playback position into a whole percentage in `[0, 100]`.
///
/// Returns `None` when the duration is not a positive finite number or the
/// position is not finite.
pub fn playback_percent(current_position: f64, total_duration: f64) -> Option<u8> {
    if !total_duration.is_finite() || total_duration <= 0.0 || !current_position.is_finite() {
        return None;
    }
    let percent = (100.0 * current_position / total_duration).round();
    Some(percent.clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_apply_never_lowers_progress() {
        let mut record = TutorialProgressRecord::new("zoom-join", ts("2024-01-01T00:00:00Z"));
        record.apply(
            &ProgressUpdate::progress(60, TutorialStatus::InProgress),
            ts("2024-01-01T00:01:00Z"),
        );
        record.apply(&ProgressUpdate::started(), ts("2024-01-01T00:02:00Z"));

        assert_eq!(record.progress, 60);
        assert_eq!(record.status, TutorialStatus::InProgress);
        assert_eq!(record.last_accessed, ts("2024-01-01T00:02:00Z"));
    }

    #[test]
    fn test_apply_keeps_completed_status() {
        let mut record = TutorialProgressRecord::new("zoom-join", Utc::now());
        record.apply(&ProgressUpdate::completed(), Utc::now());
        record.apply(&ProgressUpdate::started(), Utc::now());

        assert_eq!(record.status, TutorialStatus::Completed);
        assert_eq!(record.progress, COMPLETE_PROGRESS);
    }

    #[test]
    fn test_apply_clamps_progress_and_merges_steps() {
        let mut record = TutorialProgressRecord::new("gmail-attach", Utc::now());
        let update = ProgressUpdate {
            progress: Some(250),
            completed_steps: Some(BTreeSet::from([0, 2])),
            ..Default::default()
        };
        record.apply(&update, Utc::now());
        let update = ProgressUpdate {
            completed_steps: Some(BTreeSet::from([1])),
            ..Default::default()
        };
        record.apply(&update, Utc::now());

        assert_eq!(record.progress, 100);
        assert_eq!(record.completed_steps, BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_playback_percent() {
        assert_eq!(playback_percent(55.0, 110.0), Some(50));
        assert_eq!(playback_percent(110.0, 110.0), Some(100));
        assert_eq!(playback_percent(130.0, 110.0), Some(100));
        assert_eq!(playback_percent(-5.0, 110.0), Some(0));
        assert_eq!(playback_percent(0.4, 100.0), Some(0));
        assert_eq!(playback_percent(10.0, 0.0), None);
        assert_eq!(playback_percent(10.0, f64::NAN), None);
    }

    #[test]
    fn test_record_uses_browser_field_names() {
        let json = r#"{
            "tutorialId": "messenger-send",
            "status": "in-progress",
            "progress": 40,
            "lastAccessed": "2024-03-02T10:15:00.000Z",
            "timeSpent": 3,
            "completedSteps": [0, 1]
        }"#;
        let record: TutorialProgressRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tutorial_id, "messenger-send");
        assert_eq!(record.status, TutorialStatus::InProgress);
        assert_eq!(record.progress, 40);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "in-progress");
        assert!(value.get("lastAccessed").is_some());
    }

    #[test]
    fn test_missing_progress_defaults_to_zero() {
        let json = r#"{"tutorialId": "zoom-mute", "status": "in-progress"}"#;
        let record: TutorialProgressRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.progress, 0);
        assert!(record.completed_steps.is_empty());
    }
}
