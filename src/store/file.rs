// src/store/file.rs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};

use super::{FeedbackStore, StoreError};
use crate::models::feedback::{FeedbackDocument, FeedbackRecord};

/// JSON-file store. The whole `{ "feedback": [...] }` document is read,
/// extended and rewritten on every append.
///
/// Appends are serialized through `write_lock`, so concurrent submissions
/// cannot read the same base state and drop each other's records. The
/// rewrite lands in a temporary sibling file first and is then renamed over
/// the document, so a reader sees either the old or the new collection.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted collection. A missing file is an empty collection.
    async fn read_document(&self) -> Result<FeedbackDocument, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(FeedbackDocument::default()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(FeedbackDocument::default());
        }

        let document = serde_json::from_str(&raw)?;
        Ok(document)
    }

    async fn write_document(&self, document: &FeedbackDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(document)
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, body).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "db.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl FeedbackStore for FileStore {
    async fn append(&self, record: FeedbackRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        // A malformed document is reported rather than replaced with a fresh one.
        let mut document = self.read_document().await?;
        document.feedback.push(record);
        self.write_document(&document).await?;

        tracing::debug!(
            "Appended feedback to {} ({} records)",
            self.path.display(),
            document.feedback.len()
        );
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        Ok(self.read_document().await?.feedback)
    }
}
