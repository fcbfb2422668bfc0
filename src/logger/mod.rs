//! Logger module
//!
//! Provides logging utilities for the mock server including:
//! - `tracing` subscriber setup
//! - Server lifecycle logging
//! - Login/register attempt logging
//! - Access logging with multiple formats

mod format;

pub use format::{AccessLogEntry, AccessLogFormat};

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ServerError;

/// Target used for access log lines, e.g. `RUST_LOG=access=off`
pub const ACCESS_TARGET: &str = "access";

/// Initialize the global `tracing` subscriber
///
/// `RUST_LOG` wins over `logging.level` when set. Should be called once at
/// application startup.
pub fn init(config: &Config) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .map_err(|e| ServerError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("======================================");
    tracing::info!("Mock auth server running on http://{addr}");
    tracing::info!("Available endpoints:");
    for (method, path) in crate::api::ENDPOINTS {
        tracing::info!("  - {method} {path}");
    }
    tracing::info!("Log level: {}", config.logging.level);
    if config.logging.access_log {
        tracing::info!("Access log format: {}", config.logging.access_log_format);
    }
    tracing::info!("======================================");

    if config.logging.log_credentials {
        log_warning("logging.log_credentials is enabled: submitted passwords will be written to the log");
    }
}

pub fn log_server_stopped() {
    tracing::info!("Server stopped");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("[WARN] {message}");
}

/// Log a login attempt; the password only appears when explicitly allowed
pub fn log_login_attempt(email: Option<&str>, password: Option<&str>, log_credentials: bool) {
    let email = email.unwrap_or("-");
    if log_credentials {
        tracing::info!("[LOGIN] Email: {email}, Password: {}", password.unwrap_or("-"));
    } else {
        tracing::info!("[LOGIN] Email: {email}");
    }
}

pub fn log_register_attempt(email: Option<&str>, full_name: Option<&str>) {
    tracing::info!(
        "[REGISTER] Email: {}, Name: {}",
        email.unwrap_or("-"),
        full_name.unwrap_or("-")
    );
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &AccessLogFormat) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}
