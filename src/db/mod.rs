//! Storage layer: key/value backends behind a single trait.

pub mod firestore;
pub mod memory;
pub mod profile;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;
pub use profile::ProfileStorage;

/// Storage keys, matching what the browser front end writes to local storage.
pub mod keys {
    pub const PROGRESS: &str = "elder_tutorial_progress";
    pub const FAVORITES: &str = "elder_tutorial_favorites";
}

/// Collection names as constants.
pub mod collections {
    /// One document per (profile, storage key)
    pub const TUTORIAL_STORAGE: &str = "tutorial_storage";
}

/// Errors from a storage backend.
///
/// These never reach API callers; the profile storage logs them and
/// degrades to "no persistence".
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// String key/value storage, namespaced per profile.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError>;

    async fn set_item(&self, namespace: &str, key: &str, value: String)
        -> Result<(), StorageError>;

    async fn remove_item(&self, namespace: &str, key: &str) -> Result<(), StorageError>;
}
