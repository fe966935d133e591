//! Ingest Gateway Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod metadata;
pub mod retry;
pub mod server;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig};
pub use metadata::{FileRecord, FileStatus, MetadataStore};
pub use retry::{IngestionPipeline, RetryError, RetryOrchestrator, SubprocessPipeline};
pub use server::{run_server, RequestsLoggingLevel};
