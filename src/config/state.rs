// Application state module
// Immutable per-process state shared by every connection

use super::types::Config;
use crate::logger::AccessLogFormat;

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Parsed once from `logging.access_log_format`
    pub access_log_format: AccessLogFormat,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let access_log_format = config
            .logging
            .access_log_format
            .parse::<AccessLogFormat>()
            .unwrap_or_else(|never| match never {});

        Self {
            config: config.clone(),
            access_log_format,
        }
    }
}
