use serde::{Deserialize, Serialize};

/// Terminal classification of the last ingestion attempt for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Processed,
    Rejected,
}

/// One entry of the metadata store, mapped from the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// The original filename.
    pub filename: String,
    /// The file size in bytes at the time of ingestion.
    pub size: u64,
    /// The SHA-256 hash for integrity, computed by the pipeline.
    pub sha256: String,
    /// The processing status of the last ingestion attempt.
    pub status: FileStatus,
    /// Rejection reason, empty if processed.
    #[serde(default)]
    pub reason: String,
    /// The final storage path after ingestion.
    pub path: String,
}
