//! Test server lifecycle management
//!
//! This module manages spawning test HTTP servers. Each test gets an
//! isolated server with its own data directory and stub pipeline.

use super::fixtures::{TestDataDir, STUB_EXIT_0};
use ingest_gateway::metadata::MetadataStore;
use ingest_gateway::retry::{RetryOrchestrator, SubprocessPipeline};
use ingest_gateway::server::server::make_app;
use ingest_gateway::server::state::ServerState;
use ingest_gateway::server::{RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

/// Test server instance with an isolated data directory.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// The data directory shared with the (stubbed) pipeline; kept
    /// public so tests can seed and inspect filesystem state.
    pub data: TestDataDir,
}

impl TestServer {
    /// Spawns a test server whose stub pipeline exits 0 without doing
    /// anything.
    pub async fn spawn() -> Self {
        Self::spawn_with_stub(STUB_EXIT_0).await
    }

    /// Spawns a test server on a random port with the given stub
    /// pipeline script.
    pub async fn spawn_with_stub(script: &str) -> Self {
        let data = TestDataDir::new();
        let command = data.write_stub_pipeline(script);

        let metadata_store = Arc::new(MetadataStore::new(data.metadata_path()));
        let retry_orchestrator = Arc::new(RetryOrchestrator::new(
            data.rejected_dir(),
            data.incoming_dir(),
            Arc::new(SubprocessPipeline::new(command)),
        ));

        let state = ServerState {
            config: ServerConfig {
                requests_logging_level: RequestsLoggingLevel::None,
                frontend_dir_path: None,
            },
            start_time: Instant::now(),
            metadata_store,
            retry_orchestrator,
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let app = make_app(state);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            port,
            data,
        }
    }
}
