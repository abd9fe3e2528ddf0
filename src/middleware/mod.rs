// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (profile scoping, response headers).

pub mod profile;
pub mod security;

pub use profile::{require_profile, Profile};
