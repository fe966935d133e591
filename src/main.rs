use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ingest_gateway::config::{AppConfig, CliConfig, FileConfig};
use ingest_gateway::metadata::MetadataStore;
use ingest_gateway::retry::{RetryOrchestrator, SubprocessPipeline};
use ingest_gateway::server::state::ServerState;
use ingest_gateway::server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the data directory shared with the ingestion pipeline
    /// (holds metadata.json, rejected/ and incoming/ by convention).
    #[clap(long, value_parser = parse_path)]
    pub data_dir: Option<PathBuf>,

    /// Path to the metadata file written by the ingestion pipeline.
    #[clap(long, value_parser = parse_path)]
    pub metadata_path: Option<PathBuf>,

    /// Path to the directory holding rejected files.
    #[clap(long, value_parser = parse_path)]
    pub rejected_dir: Option<PathBuf>,

    /// Path to the directory the ingestion pipeline consumes files from.
    #[clap(long, value_parser = parse_path)]
    pub incoming_dir: Option<PathBuf>,

    /// Path to the ingestion pipeline entry point.
    #[clap(long, value_parser = parse_path)]
    pub ingest_command: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8080)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Path to a TOML config file; its values override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        data_dir: cli_args.data_dir,
        metadata_path: cli_args.metadata_path,
        rejected_dir: cli_args.rejected_dir,
        incoming_dir: cli_args.incoming_dir,
        ingest_command: cli_args.ingest_command,
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        frontend_dir_path: cli_args.frontend_dir_path,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Metadata file path set to: {:?}", config.metadata_path);
    info!("Rejected directory set to: {:?}", config.rejected_dir);
    info!("Incoming directory set to: {:?}", config.incoming_dir);
    info!("Ingestion entry point set to: {:?}", config.ingest_command);

    let metadata_store = Arc::new(MetadataStore::new(&config.metadata_path));
    let retry_orchestrator = Arc::new(RetryOrchestrator::new(
        &config.rejected_dir,
        &config.incoming_dir,
        Arc::new(SubprocessPipeline::new(&config.ingest_command)),
    ));

    let state = ServerState {
        config: ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            frontend_dir_path: config.frontend_dir_path.clone(),
        },
        start_time: Instant::now(),
        metadata_store,
        retry_orchestrator,
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(state, config.port).await
}
