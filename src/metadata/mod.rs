//! Read side of the metadata records produced by the ingestion pipeline.
//!
//! The pipeline owns the metadata file and rewrites it on every
//! (re)ingestion attempt; this module only observes it.

mod models;
mod store;

pub use models::{FileRecord, FileStatus};
pub use store::{MetadataStore, StoreError};
