use axum::extract::FromRef;

use crate::metadata::MetadataStore;
use crate::retry::RetryOrchestrator;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedMetadataStore = Arc<MetadataStore>;
pub type GuardedRetryOrchestrator = Arc<RetryOrchestrator>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub metadata_store: GuardedMetadataStore,
    pub retry_orchestrator: GuardedRetryOrchestrator,
}

impl FromRef<ServerState> for GuardedMetadataStore {
    fn from_ref(input: &ServerState) -> Self {
        input.metadata_store.clone()
    }
}

impl FromRef<ServerState> for GuardedRetryOrchestrator {
    fn from_ref(input: &ServerState) -> Self {
        input.retry_orchestrator.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
