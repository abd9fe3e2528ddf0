// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use elderease_tutorials::error::AppError;
use elderease_tutorials::services::{CatalogError, TutorialCatalog};

#[test]
fn test_error_status_codes() {
    let response = AppError::NotFound("Tutorial x not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = AppError::BadRequest("Bad Request".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = AppError::Unavailable("Favorites could not be read".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = AppError::Validation(validator::ValidationErrors::new()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let json = r##"{
        "platforms": [{
            "key": "zoom", "name": "Zoom", "icon": "🎥", "color": "#2D8CFF",
            "tutorials": [
                {"id": "zoom-join", "title": "A", "description": "", "steps": [], "video": "", "duration": 60},
                {"id": "zoom-join", "title": "B", "description": "", "steps": [], "video": "", "duration": 60}
            ]
        }]
    }"##;

    match TutorialCatalog::load_from_json(json) {
        Err(CatalogError::DuplicateTutorial(id)) => assert_eq!(id, "zoom-join"),
        other => panic!("expected duplicate error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_catalog_parse_and_io_errors() {
    assert!(matches!(
        TutorialCatalog::load_from_json("{not json"),
        Err(CatalogError::ParseError(_))
    ));
    assert!(matches!(
        TutorialCatalog::load_from_file("/nonexistent/tutorials.json"),
        Err(CatalogError::IoError(_))
    ));
}
