// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore storage backend.
//!
//! Each (profile, key) pair is one document in `tutorial_storage`. The
//! value is kept as the same JSON string the browser would hold in local
//! storage, so records written by either side stay readable by the other.

use super::{collections, KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};

/// Stored key/value document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredValue {
    pub profile_id: String,
    pub key: String,
    /// JSON-encoded value
    pub value: String,
    pub updated_at: String,
}

/// Firestore-backed key/value storage.
#[derive(Clone)]
pub struct FirestoreStore {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreStore {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, StorageError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id).await.map_err(|e| {
            StorageError::Unavailable(format!("Failed to connect to Firestore: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, StorageError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            StorageError::Unavailable(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create an offline store. Every operation fails with
    /// [`StorageError::Unavailable`].
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb, StorageError> {
        self.client.as_ref().ok_or_else(|| {
            StorageError::Unavailable("Database not connected (offline mode)".to_string())
        })
    }

    /// Document ID for a profile's key. The profile part is URL-encoded so
    /// a `/` can never address a sub-collection.
    pub fn document_id(namespace: &str, key: &str) -> String {
        format!("{}_{}", urlencoding::encode(namespace), key)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FirestoreStore {
    async fn get_item(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        let doc: Option<StoredValue> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::TUTORIAL_STORAGE)
            .obj()
            .one(&Self::document_id(namespace, key))
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        Ok(doc.map(|d| d.value))
    }

    async fn set_item(
        &self,
        namespace: &str,
        key: &str,
        value: String,
    ) -> Result<(), StorageError> {
        let doc = StoredValue {
            profile_id: namespace.to_string(),
            key: key.to_string(),
            value,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::TUTORIAL_STORAGE)
            .document_id(Self::document_id(namespace, key))
            .object(&doc)
            .execute()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }

    async fn remove_item(&self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::TUTORIAL_STORAGE)
            .document_id(Self::document_id(namespace, key))
            .execute()
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(())
    }
}
