mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub metadata_path: Option<PathBuf>,
    pub rejected_dir: Option<PathBuf>,
    pub incoming_dir: Option<PathBuf>,
    pub ingest_command: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the conventional data layout shared with the pipeline.
    pub data_dir: PathBuf,
    /// The JSON metadata file written by the pipeline.
    pub metadata_path: PathBuf,
    /// Directory holding files that failed ingestion.
    pub rejected_dir: PathBuf,
    /// Directory the pipeline consumes files from.
    pub incoming_dir: PathBuf,
    /// Executable invoked to (re)run the pipeline.
    pub ingest_command: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present; path settings not
    /// given anywhere default to the conventional layout under data_dir.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("data_dir must be specified via --data-dir or in config file")
            })?;

        // Validate data_dir exists
        if !data_dir.exists() {
            bail!("Data directory does not exist: {:?}", data_dir);
        }
        if !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let metadata_path = file
            .metadata_path
            .map(PathBuf::from)
            .or_else(|| cli.metadata_path.clone())
            .unwrap_or_else(|| data_dir.join("metadata.json"));

        let rejected_dir = file
            .rejected_dir
            .map(PathBuf::from)
            .or_else(|| cli.rejected_dir.clone())
            .unwrap_or_else(|| data_dir.join("rejected"));

        let incoming_dir = file
            .incoming_dir
            .map(PathBuf::from)
            .or_else(|| cli.incoming_dir.clone())
            .unwrap_or_else(|| data_dir.join("incoming"));

        let ingest_command = file
            .ingest_command
            .map(PathBuf::from)
            .or_else(|| cli.ingest_command.clone())
            .unwrap_or_else(|| data_dir.join("ingest.sh"));

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        Ok(Self {
            data_dir,
            metadata_path,
            rejected_dir,
            incoming_dir,
            ingest_command,
            port,
            logging_level,
            frontend_dir_path,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
