use super::pipeline::IngestionPipeline;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tracing::{info, warn};

/// Errors that can occur while retrying a rejected file.
#[derive(Debug, Error)]
pub enum RetryError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("File not found in rejected: {0}")]
    NotFound(String),

    #[error("Ingestion failed with exit code {0}")]
    IngestionFailed(i32),

    #[error("Error triggering retry: {0}")]
    Execution(#[from] io::Error),
}

/// Transitions a rejected file back into the incoming directory and
/// re-runs the ingestion pipeline against it.
pub struct RetryOrchestrator {
    rejected_dir: PathBuf,
    incoming_dir: PathBuf,
    pipeline: Arc<dyn IngestionPipeline>,
}

impl RetryOrchestrator {
    pub fn new(
        rejected_dir: impl Into<PathBuf>,
        incoming_dir: impl Into<PathBuf>,
        pipeline: Arc<dyn IngestionPipeline>,
    ) -> Self {
        Self {
            rejected_dir: rejected_dir.into(),
            incoming_dir: incoming_dir.into(),
            pipeline,
        }
    }

    /// Re-trigger ingestion for a previously rejected file.
    ///
    /// The rename out of the rejected directory is the point of no
    /// return and the only per-filename concurrency guard: of two
    /// simultaneous retries for the same file, the one that renames
    /// first wins and the other observes [`RetryError::NotFound`].
    pub async fn retry(&self, filename: &str) -> Result<(), RetryError> {
        validate_filename(filename)?;

        let rejected_path = self.rejected_dir.join(filename);
        let incoming_path = self.incoming_dir.join(filename);

        if !rejected_path.exists() {
            return Err(RetryError::NotFound(filename.to_string()));
        }

        match fs::rename(&rejected_path, &incoming_path).await {
            Ok(()) => {}
            // A concurrent retry (or the pipeline itself) took the file
            // between the existence check and the rename.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RetryError::NotFound(filename.to_string()));
            }
            Err(err) => return Err(RetryError::Execution(err)),
        }
        info!("Moved {} back to incoming, running ingestion", filename);

        // No rollback from here on: if the pipeline cannot be started
        // the file stays in incoming with stale metadata until the
        // pipeline next runs.
        let status = self.pipeline.run().await?;

        if status.success() {
            info!("Ingestion pipeline completed for {}", filename);
            return Ok(());
        }
        match status.code() {
            Some(code) => {
                warn!("Ingestion pipeline exited with code {} for {}", code, filename);
                Err(RetryError::IngestionFailed(code))
            }
            None => Err(RetryError::Execution(io::Error::new(
                io::ErrorKind::Other,
                "ingestion pipeline terminated by signal",
            ))),
        }
    }
}

/// Only plain `.csv` base names are retryable. Anything that could name
/// an entry outside the rejected directory is rejected before any side
/// effect.
fn validate_filename(filename: &str) -> Result<(), RetryError> {
    if filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
        || !filename.ends_with(".csv")
    {
        return Err(RetryError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}
