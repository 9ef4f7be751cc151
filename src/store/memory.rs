// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{FeedbackStore, StoreError};
use crate::models::feedback::FeedbackRecord;

/// Process-memory store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<FeedbackRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn append(&self, record: FeedbackRecord) -> Result<(), StoreError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }
}
