// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile scoping middleware.
//!
//! Profile routes carry a `{profile_id}` path segment. It is validated
//! once here and handed to handlers as an [`Extension<Profile>`].

use crate::error::AppError;
use crate::extract::AppPath;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

pub const MAX_PROFILE_ID_LEN: usize = 128;

/// The profile a request operates on.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: String,
}

/// Check a profile id: 1-128 chars of ASCII letters, digits, `-` or `_`.
pub fn validate_profile_id(id: &str) -> Result<(), AppError> {
    if id.is_empty() || id.len() > MAX_PROFILE_ID_LEN {
        return Err(AppError::BadRequest(format!(
            "Profile id must be 1-{} characters",
            MAX_PROFILE_ID_LEN
        )));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::BadRequest(
            "Profile id may only contain letters, digits, '-' and '_'".to_string(),
        ));
    }
    Ok(())
}

/// Middleware that requires a valid `profile_id` path parameter.
pub async fn require_profile(
    AppPath(params): AppPath<HashMap<String, String>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(id) = params.get("profile_id") else {
        return AppError::BadRequest("Missing profile id".to_string()).into_response();
    };

    if let Err(e) = validate_profile_id(id) {
        tracing::debug!(profile_id = %id, "Rejected profile id");
        return e.into_response();
    }

    request.extensions_mut().insert(Profile { id: id.clone() });
    next.run(request).await
}
