use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::info;

/// The external ingestion pipeline entry point, abstracted for testing.
///
/// The exit status is the only signal consumed from the pipeline. Its
/// standard streams are forwarded to this process's own for operator
/// visibility, never parsed.
#[async_trait]
pub trait IngestionPipeline: Send + Sync {
    /// Run the pipeline to completion and return its exit status.
    async fn run(&self) -> std::io::Result<ExitStatus>;
}

/// Invokes the configured ingestion executable as a child process.
pub struct SubprocessPipeline {
    command: PathBuf,
}

impl SubprocessPipeline {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl IngestionPipeline for SubprocessPipeline {
    async fn run(&self) -> std::io::Result<ExitStatus> {
        info!("Invoking ingestion pipeline: {:?}", self.command);
        Command::new(&self.command)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
    }
}
