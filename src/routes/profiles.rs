// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile routes: progress, favorites, stats and profile deletion.
//!
//! The profile id is validated by `require_profile` (see routes/mod.rs).
//! Tutorial ids must exist in the catalog.

use crate::error::{AppError, Result};
use crate::extract::{AppJson, AppPath};
use crate::middleware::Profile;
use crate::models::{
    FavoriteRecord, LearningStats, ProgressUpdate, ToggleOutcome, TutorialMatch,
    TutorialProgressRecord, TutorialStatus,
};
use crate::AppState;
use axum::{
    extract::State,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profiles/{profile_id}", delete(delete_profile))
        .route("/api/profiles/{profile_id}/progress", get(list_progress))
        .route(
            "/api/profiles/{profile_id}/progress/{tutorial_id}",
            get(get_progress).patch(patch_progress),
        )
        .route(
            "/api/profiles/{profile_id}/progress/{tutorial_id}/start",
            post(start_tutorial),
        )
        .route(
            "/api/profiles/{profile_id}/progress/{tutorial_id}/complete",
            post(complete_tutorial),
        )
        .route(
            "/api/profiles/{profile_id}/progress/{tutorial_id}/playback",
            post(report_playback),
        )
        .route(
            "/api/profiles/{profile_id}/progress/{tutorial_id}/time",
            post(add_time_spent),
        )
        .route(
            "/api/profiles/{profile_id}/progress/{tutorial_id}/steps/{step}",
            post(complete_step),
        )
        .route("/api/profiles/{profile_id}/stats", get(get_stats))
        .route("/api/profiles/{profile_id}/favorites", get(list_favorites))
        .route(
            "/api/profiles/{profile_id}/favorites/{tutorial_id}",
            get(get_favorite).post(toggle_favorite),
        )
}

/// Look up a tutorial or fail with 404.
fn require_tutorial(state: &AppState, tutorial_id: &str) -> Result<TutorialMatch> {
    state
        .catalog
        .find_tutorial(tutorial_id)
        .ok_or_else(|| AppError::NotFound(format!("Tutorial {} not found", tutorial_id)))
}

// ─── Progress ────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressListResponse {
    pub records: Vec<TutorialProgressRecord>,
}

async fn list_progress(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
) -> Json<ProgressListResponse> {
    Json(ProgressListResponse {
        records: state.progress(&profile.id).get_all().await,
    })
}

async fn get_progress(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
) -> Result<Json<TutorialProgressRecord>> {
    state
        .progress(&profile.id)
        .get(&tutorial_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No progress for tutorial {}", tutorial_id)))
}

/// Partial progress update. Omitted fields are left as stored.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct ProgressPatch {
    status: Option<TutorialStatus>,
    #[validate(range(max = 100))]
    progress: Option<u8>,
    #[validate(range(max = 100_000))]
    time_spent: Option<u32>,
    completed_steps: Option<BTreeSet<u32>>,
}

async fn patch_progress(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
    AppJson(body): AppJson<ProgressPatch>,
) -> Result<Json<TutorialProgressRecord>> {
    body.validate()?;
    let tutorial = require_tutorial(&state, &tutorial_id)?;

    if let Some(steps) = &body.completed_steps {
        let step_count = tutorial.tutorial.steps.len();
        if let Some(bad) = steps.iter().find(|&&s| s as usize >= step_count) {
            return Err(AppError::BadRequest(format!(
                "Step {} out of range (tutorial has {} steps)",
                bad, step_count
            )));
        }
    }

    let update = ProgressUpdate {
        status: body.status,
        progress: body.progress,
        time_spent: body.time_spent,
        completed_steps: body.completed_steps,
    };

    Ok(Json(state.progress(&profile.id).upsert(&tutorial_id, &update).await))
}

async fn start_tutorial(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
) -> Result<Json<TutorialProgressRecord>> {
    require_tutorial(&state, &tutorial_id)?;
    Ok(Json(state.progress(&profile.id).mark_started(&tutorial_id).await))
}

async fn complete_tutorial(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
) -> Result<Json<TutorialProgressRecord>> {
    require_tutorial(&state, &tutorial_id)?;
    tracing::info!(profile_id = %profile.id, tutorial_id = %tutorial_id, "Tutorial completed");
    Ok(Json(state.progress(&profile.id).mark_completed(&tutorial_id).await))
}

/// Video position report, both values in seconds.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct PlaybackRequest {
    #[validate(range(min = 0.0))]
    current_position: f64,
    #[validate(range(exclusive_min = 0.0))]
    total_duration: f64,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlaybackResponse {
    pub record: Option<TutorialProgressRecord>,
}

async fn report_playback(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
    AppJson(body): AppJson<PlaybackRequest>,
) -> Result<Json<PlaybackResponse>> {
    body.validate()?;
    require_tutorial(&state, &tutorial_id)?;

    let record = state
        .progress(&profile.id)
        .update_from_playback_position(&tutorial_id, body.current_position, body.total_duration)
        .await;

    Ok(Json(PlaybackResponse { record }))
}

async fn complete_step(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id, step)): AppPath<(String, String, u32)>,
) -> Result<Json<TutorialProgressRecord>> {
    let tutorial = require_tutorial(&state, &tutorial_id)?;
    if step as usize >= tutorial.tutorial.steps.len() {
        return Err(AppError::BadRequest(format!(
            "Step {} out of range (tutorial has {} steps)",
            step,
            tutorial.tutorial.steps.len()
        )));
    }

    Ok(Json(
        state
            .progress(&profile.id)
            .mark_step_completed(&tutorial_id, step)
            .await,
    ))
}

/// Watching time to add, in minutes.
#[derive(Deserialize, Validate)]
struct TimeSpentRequest {
    #[validate(range(min = 1, max = 600))]
    minutes: u32,
}

async fn add_time_spent(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
    AppJson(body): AppJson<TimeSpentRequest>,
) -> Result<Json<TutorialProgressRecord>> {
    body.validate()?;
    require_tutorial(&state, &tutorial_id)?;
    Ok(Json(
        state
            .progress(&profile.id)
            .record_time_spent(&tutorial_id, body.minutes)
            .await,
    ))
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
) -> Json<LearningStats> {
    Json(state.progress(&profile.id).stats().await)
}

// ─── Favorites ───────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteRecord>,
}

async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
) -> Json<FavoritesResponse> {
    Json(FavoritesResponse {
        favorites: state.favorites(&profile.id).get_all().await,
    })
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusResponse {
    pub tutorial_id: String,
    pub is_favorite: bool,
    /// Set when the request toggled the favorite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ToggleOutcome>,
}

async fn get_favorite(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
) -> Json<FavoriteStatusResponse> {
    let is_favorite = state.favorites(&profile.id).is_favorite(&tutorial_id).await;
    Json(FavoriteStatusResponse {
        tutorial_id,
        is_favorite,
        state: None,
    })
}

async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
    AppPath((_, tutorial_id)): AppPath<(String, String)>,
) -> Result<Json<FavoriteStatusResponse>> {
    let tutorial = require_tutorial(&state, &tutorial_id)?;

    let outcome = state
        .favorites(&profile.id)
        .toggle(&tutorial_id, &tutorial.platform)
        .await
        .ok_or_else(|| AppError::Unavailable("Favorites could not be read".to_string()))?;

    Ok(Json(FavoriteStatusResponse {
        tutorial_id,
        is_favorite: outcome == ToggleOutcome::Added,
        state: Some(outcome),
    }))
}

// ─── Profile Deletion ────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteProfileResponse {
    pub success: bool,
    pub message: String,
}

/// Remove all tutorial data of a profile (account deletion).
async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Extension(profile): Extension<Profile>,
) -> Json<DeleteProfileResponse> {
    tracing::info!(profile_id = %profile.id, "Profile deletion requested");

    futures_util::future::join(
        state.progress(&profile.id).clear(),
        state.favorites(&profile.id).clear(),
    )
    .await;

    Json(DeleteProfileResponse {
        success: true,
        message: "Tutorial progress and favorites removed.".to_string(),
    })
}
