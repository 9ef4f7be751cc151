// src/store/mod.rs

use std::fmt;

use async_trait::async_trait;

use crate::models::feedback::FeedbackRecord;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Failures of the persistence medium behind a `FeedbackStore`.
#[derive(Debug)]
pub enum StoreError {
    /// The backend could not be read or written (I/O failure).
    StorageUnavailable(String),

    /// The persisted document is not valid JSON or lacks the `feedback` array.
    MalformedPersistedState(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::StorageUnavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StoreError::MalformedPersistedState(msg) => {
                write!(f, "malformed persisted state: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::MalformedPersistedState(err.to_string())
    }
}

/// Ordered, append-only holder of the feedback collection.
///
/// Implementations preserve insertion order and accept any record,
/// duplicates included.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Adds `record` to the end of the collection.
    async fn append(&self, record: FeedbackRecord) -> Result<(), StoreError>;

    /// Returns every record in insertion order. An empty backend yields an empty vec.
    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StoreError>;
}
