// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response headers for a JSON-only API.

use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    middleware::Next,
    response::Response,
};

/// Add hardening headers. Only successful catalog `GET`s may be cached;
/// per-profile data, chat replies and errors never are.
pub async fn add_security_headers(req: Request, next: Next) -> Response {
    let cacheable_request =
        req.method() == Method::GET && !req.uri().path().starts_with("/api/profiles/");
    let mut response = next.run(req).await;
    let cacheable = cacheable_request && response.status().is_success();
    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );
    headers.insert("Referrer-Policy", HeaderValue::from_static("no-referrer"));

    if cacheable {
        headers.insert("Cache-Control", HeaderValue::from_static("public, max-age=300"));
    } else {
        headers.insert("Cache-Control", HeaderValue::from_static("no-store"));
    }

    response
}
