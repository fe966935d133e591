//! Retry orchestration for rejected files.
//!
//! Retry workflow:
//! 1. Validate the filename (no traversal, `.csv` input only)
//! 2. Move the file from the rejected directory back to incoming
//! 3. Run the external ingestion pipeline and wait for it to exit
//! 4. Classify the outcome by exit status
//!
//! The pipeline itself is a black box; it rewrites the metadata record
//! for the file once it runs.

mod orchestrator;
mod pipeline;

pub use orchestrator::{RetryError, RetryOrchestrator};
pub use pipeline::{IngestionPipeline, SubprocessPipeline};
