// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ElderEase Tutorials API Server
//!
//! Serves the tutorial catalog, keyword search and chat assistant, and
//! stores per-profile tutorial progress and favorites.

use elderease_tutorials::{
    config::{Config, StorageBackend},
    db::{FirestoreStore, KeyValueStore, MemoryStore},
    services::TutorialCatalog,
    AppState,
};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        backend = ?config.storage_backend,
        "Starting ElderEase Tutorials API"
    );

    // Load the tutorial catalog
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading tutorial catalog from file");
            TutorialCatalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path))?
        }
        None => TutorialCatalog::builtin().context("Built-in catalog is invalid")?,
    };

    // Initialize profile storage
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; profile data is lost on restart");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Firestore => Arc::new(
            FirestoreStore::new(&config.gcp_project_id)
                .await
                .context("Failed to connect to Firestore")?,
        ),
    };

    let port = config.port;
    let state = Arc::new(AppState::new(config, store, catalog));

    // Build router
    let app = elderease_tutorials::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("elderease_tutorials=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
