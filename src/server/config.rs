use super::RequestsLoggingLevel;

/// Static configuration shared with request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            requests_logging_level: RequestsLoggingLevel::Path,
            frontend_dir_path: None,
        }
    }
}
