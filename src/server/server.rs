use anyhow::Result;
use std::time::Duration;

use tracing::info;

use tower_http::services::ServeDir;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::{log_requests, state::*};
use crate::retry::RetryError;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
    };
    Json(stats)
}

async fn get_files(State(store): State<GuardedMetadataStore>) -> Response {
    Json(store.list()).into_response()
}

async fn post_retry(
    State(orchestrator): State<GuardedRetryOrchestrator>,
    Path(filename): Path<String>,
) -> Response {
    match orchestrator.retry(&filename).await {
        Ok(()) => (StatusCode::OK, format!("Retry triggered for {}", filename)).into_response(),
        Err(err @ RetryError::InvalidFilename(_)) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err @ RetryError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

pub fn make_app(state: ServerState) -> Router {
    let api_routes: Router = Router::new()
        .route("/files", get(get_files))
        .route("/retry/{filename}", post(post_retry))
        .with_state(state.clone());

    let root_routes: Router = match &state.config.frontend_dir_path {
        Some(frontend_dir_path) => {
            let static_files_service = ServeDir::new(frontend_dir_path);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let mut app: Router = Router::new().nest("/api", api_routes).merge(root_routes);

    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

pub async fn run_server(state: ServerState, port: u16) -> Result<()> {
    let app = make_app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    Ok(axum::serve(listener, app).await?)
}
