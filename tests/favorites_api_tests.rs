// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites API tests.

use axum::http::StatusCode;

mod common;
use common::{create_offline_app, create_test_app, json_body, send};

#[tokio::test]
async fn test_toggle_twice() {
    let (app, _) = create_test_app();
    let uri = "/api/profiles/alice/favorites/instagram-story";

    let body = json_body(send(&app, "POST", uri).await, StatusCode::OK).await;
    assert_eq!(body["state"], "added");
    assert_eq!(body["isFavorite"], true);

    let body = json_body(send(&app, "GET", uri).await, StatusCode::OK).await;
    assert_eq!(body["isFavorite"], true);
    assert!(body.get("state").is_none());

    let body = json_body(send(&app, "POST", uri).await, StatusCode::OK).await;
    assert_eq!(body["state"], "removed");
    assert_eq!(body["isFavorite"], false);

    let body = json_body(
        send(&app, "GET", "/api/profiles/alice/favorites").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["favorites"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_platform_comes_from_catalog() {
    let (app, _) = create_test_app();

    send(&app, "POST", "/api/profiles/bob/favorites/meet-share").await;
    send(&app, "POST", "/api/profiles/bob/favorites/gmail-attach").await;

    let body = json_body(
        send(&app, "GET", "/api/profiles/bob/favorites").await,
        StatusCode::OK,
    )
    .await;
    let favorites = body["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0]["tutorialId"], "meet-share");
    assert_eq!(favorites[0]["platform"], "googlemeet");
    assert_eq!(favorites[1]["platform"], "gmail");
    assert!(favorites[1]["addedAt"].is_string());
}

#[tokio::test]
async fn test_unknown_tutorial_cannot_be_favorited() {
    let (app, _) = create_test_app();

    let response = send(&app, "POST", "/api/profiles/bob/favorites/not-a-tutorial").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(
        send(&app, "GET", "/api/profiles/bob/favorites/not-a-tutorial").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["isFavorite"], false);
}

#[tokio::test]
async fn test_toggle_with_unreadable_storage() {
    let app = create_offline_app();

    let body = json_body(
        send(&app, "POST", "/api/profiles/alice/favorites/zoom-join").await,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
    assert_eq!(body["error"], "storage_unavailable");

    // Reads still degrade to empty
    let body = json_body(
        send(&app, "GET", "/api/profiles/alice/favorites").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["favorites"].as_array().unwrap().len(), 0);
}
