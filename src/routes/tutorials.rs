// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog routes: tutorials, search, glossary and the chat assistant.

use crate::error::Result;
use crate::extract::{AppJson, AppQuery};
use crate::models::{GlossaryTerm, Platform, TutorialMatch};
use crate::services::assistant::AssistantReply;
use crate::services::catalog::{SearchResolution, CHAT_RESULT_LIMIT};
use crate::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_QUERY_LEN: u64 = 200;
const MAX_MESSAGE_LEN: u64 = 500;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tutorials", get(get_catalog))
        .route("/api/tutorials/search", get(search_tutorials))
        .route("/api/tutorials/suggestions", get(get_suggestions))
        .route("/api/tutorials/resolve", get(resolve_search))
        .route("/api/glossary", get(get_glossary))
        .route("/api/assistant", get(assistant_greeting).post(ask_assistant))
}

// ─── Catalog ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CatalogResponse {
    pub platforms: Vec<Platform>,
}

async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        platforms: state.catalog.platforms().to_vec(),
    })
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GlossaryResponse {
    pub terms: Vec<GlossaryTerm>,
}

async fn get_glossary(State(state): State<Arc<AppState>>) -> Json<GlossaryResponse> {
    Json(GlossaryResponse {
        terms: state.catalog.glossary().to_vec(),
    })
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct SearchQuery {
    #[serde(default)]
    #[validate(length(max = MAX_QUERY_LEN))]
    q: String,
    /// Result cap, at most 10
    #[validate(range(min = 1, max = 10))]
    limit: Option<usize>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<TutorialMatch>,
}

async fn search_tutorials(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    params.validate()?;

    let limit = params.limit.unwrap_or(CHAT_RESULT_LIMIT);
    let results = state.catalog.search(&params.q, limit);

    tracing::debug!(query = %params.q, limit, count = results.len(), "Tutorial search");

    Ok(Json(SearchResponse {
        query: params.q,
        results,
    }))
}

#[derive(Deserialize, Validate)]
struct SuggestionQuery {
    #[serde(default)]
    #[validate(length(max = MAX_QUERY_LEN))]
    q: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<SuggestionQuery>,
) -> Result<Json<SuggestionsResponse>> {
    params.validate()?;
    Ok(Json(SuggestionsResponse {
        suggestions: state.catalog.suggestions(&params.q),
    }))
}

async fn resolve_search(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<SuggestionQuery>,
) -> Result<Json<SearchResolution>> {
    params.validate()?;
    Ok(Json(state.catalog.resolve_search(&params.q)))
}

// ─── Assistant ───────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct AssistantRequest {
    #[validate(length(max = MAX_MESSAGE_LEN))]
    message: String,
}

async fn assistant_greeting(State(state): State<Arc<AppState>>) -> Json<AssistantReply> {
    Json(state.assistant.greeting())
}

async fn ask_assistant(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<AssistantRequest>,
) -> Result<Json<AssistantReply>> {
    body.validate()?;
    Ok(Json(state.assistant.reply(&body.message)))
}
