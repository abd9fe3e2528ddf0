// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-profile tutorial progress tracking.

use crate::db::{keys, ProfileStorage};
use crate::models::progress::playback_percent;
use crate::models::{LearningStats, ProgressUpdate, TutorialProgressRecord, TutorialStatus};
use chrono::{DateTime, Utc};

/// Read-modify-write access to a profile's progress records.
#[derive(Clone)]
pub struct ProgressStore {
    storage: ProfileStorage,
}

impl ProgressStore {
    pub fn new(storage: ProfileStorage) -> Self {
        Self { storage }
    }

    /// All stored records. Empty when nothing is stored or storage fails.
    pub async fn get_all(&self) -> Vec<TutorialProgressRecord> {
        self.storage.load_list(keys::PROGRESS).await
    }

    pub async fn get(&self, tutorial_id: &str) -> Option<TutorialProgressRecord> {
        self.get_all()
            .await
            .into_iter()
            .find(|r| r.tutorial_id == tutorial_id)
    }

    /// Merge `update` into the tutorial's record, creating it if needed.
    pub async fn upsert(&self, tutorial_id: &str, update: &ProgressUpdate) -> TutorialProgressRecord {
        self.modify(tutorial_id, |record, now| record.apply(update, now))
            .await
    }

    /// Read-modify-write of one record.
    ///
    /// If the stored list cannot be read, the change is applied to a fresh
    /// record and returned without saving, so unreadable data is never
    /// overwritten.
    async fn modify<F>(&self, tutorial_id: &str, change: F) -> TutorialProgressRecord
    where
        F: FnOnce(&mut TutorialProgressRecord, DateTime<Utc>),
    {
        let now = Utc::now();

        let Some(mut records) = self
            .storage
            .try_load_list::<TutorialProgressRecord>(keys::PROGRESS)
            .await
        else {
            let mut record = TutorialProgressRecord::new(tutorial_id, now);
            change(&mut record, now);
            tracing::warn!(
                profile_id = self.storage.profile_id(),
                tutorial_id,
                "Stored progress unreadable, update not saved"
            );
            return record;
        };

        let record = match records.iter_mut().position(|r| r.tutorial_id == tutorial_id) {
            Some(index) => {
                change(&mut records[index], now);
                records[index].clone()
            }
            None => {
                let mut record = TutorialProgressRecord::new(tutorial_id, now);
                change(&mut record, now);
                records.push(record.clone());
                record
            }
        };

        self.storage.save_list(keys::PROGRESS, &records).await;

        tracing::debug!(
            profile_id = self.storage.profile_id(),
            tutorial_id,
            progress = record.progress,
            status = ?record.status,
            "Progress updated"
        );

        record
    }

    pub async fn mark_started(&self, tutorial_id: &str) -> TutorialProgressRecord {
        self.upsert(tutorial_id, &ProgressUpdate::started()).await
    }

    pub async fn mark_completed(&self, tutorial_id: &str) -> TutorialProgressRecord {
        self.upsert(tutorial_id, &ProgressUpdate::completed()).await
    }

    /// Record the video position of a tutorial.
    ///
    /// An existing record only changes when the new percentage is higher
    /// than the stored one. Returns the record as it stands afterwards, or
    /// `None` if there is no record and the duration is unusable.
    pub async fn update_from_playback_position(
        &self,
        tutorial_id: &str,
        current_position: f64,
        total_duration: f64,
    ) -> Option<TutorialProgressRecord> {
        let existing = self.get(tutorial_id).await;

        let Some(percent) = playback_percent(current_position, total_duration) else {
            tracing::debug!(
                tutorial_id,
                current_position,
                total_duration,
                "Ignoring playback update with unusable duration"
            );
            return existing;
        };

        match existing {
            Some(record) if percent <= record.progress => Some(record),
            Some(_) => {
                let status = if percent >= 100 {
                    TutorialStatus::Completed
                } else {
                    TutorialStatus::InProgress
                };
                Some(
                    self.upsert(tutorial_id, &ProgressUpdate::progress(percent, status))
                        .await,
                )
            }
            None => {
                let status = match percent {
                    0 => TutorialStatus::NotStarted,
                    100 => TutorialStatus::Completed,
                    _ => TutorialStatus::InProgress,
                };
                Some(
                    self.upsert(tutorial_id, &ProgressUpdate::progress(percent, status))
                        .await,
                )
            }
        }
    }

    pub async fn mark_step_completed(
        &self,
        tutorial_id: &str,
        step_index: u32,
    ) -> TutorialProgressRecord {
        let update = ProgressUpdate {
            completed_steps: Some([step_index].into_iter().collect()),
            ..Default::default()
        };
        self.upsert(tutorial_id, &update).await
    }

    /// Add watching time (minutes) to a tutorial.
    pub async fn record_time_spent(&self, tutorial_id: &str, minutes: u32) -> TutorialProgressRecord {
        self.modify(tutorial_id, |record, now| {
            let update = ProgressUpdate {
                time_spent: Some(record.time_spent.saturating_add(minutes)),
                ..Default::default()
            };
            record.apply(&update, now);
        })
        .await
    }

    pub async fn stats(&self) -> LearningStats {
        LearningStats::from_records(&self.get_all().await)
    }

    /// Drop every progress record of the profile.
    pub async fn clear(&self) {
        self.storage.remove(keys::PROGRESS).await;
    }
}
