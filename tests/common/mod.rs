// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use elderease_tutorials::config::Config;
use elderease_tutorials::db::{FirestoreStore, MemoryStore};
use elderease_tutorials::routes::create_router;
use elderease_tutorials::services::TutorialCatalog;
use elderease_tutorials::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreStore {
    FirestoreStore::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Generate a unique profile ID for test isolation.
#[allow(dead_code)]
pub fn unique_profile_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("test-{}", nanos)
}

/// Create a test app backed by in-memory storage and the built-in catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        Arc::new(MemoryStore::new()),
        TutorialCatalog::builtin().expect("Built-in catalog should load"),
    ));

    (create_router(state.clone()), state)
}

/// Create a test app whose storage backend is offline.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        Arc::new(FirestoreStore::new_mock()),
        TutorialCatalog::builtin().expect("Built-in catalog should load"),
    ));

    create_router(state)
}

/// Send a request without a body.
#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Send a request with a JSON body.
#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON, asserting the expected status first.
#[allow(dead_code)]
pub async fn json_body(response: Response, expected: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("Response should be JSON")
}
