use super::models::FileRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while reading the metadata file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed metadata content: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reader over the metadata file owned by the ingestion pipeline.
///
/// The out-of-process pipeline rewrites the file at any time, so nothing
/// is cached here: every call to [`MetadataStore::list`] re-reads it.
pub struct MetadataStore {
    path: PathBuf,
}

impl MetadataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current list of file records, ordered as stored.
    ///
    /// A missing file is a cold start, not a fault: the pipeline has not
    /// written anything yet. Unreadable or malformed content degrades to
    /// an empty list so a partial write by a concurrently running
    /// pipeline never breaks the query path.
    pub fn list(&self) -> Vec<FileRecord> {
        match self.read_records() {
            Ok(records) => records,
            Err(err) => {
                warn!("Failed to read metadata file {:?}: {}", self.path, err);
                Vec::new()
            }
        }
    }

    fn read_records(&self) -> Result<Vec<FileRecord>, StoreError> {
        if !self.path.exists() {
            debug!("Metadata file not found: {:?}", self.path);
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
