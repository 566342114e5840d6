//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Subscriber setup (`tracing-subscriber`, compact or JSON)
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::error::ServerError;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target used for access log lines so they can be filtered separately
pub const ACCESS_TARGET: &str = "access";

/// Initialize the global subscriber with configuration
///
/// `RUST_LOG` takes precedence over `logging.level`.
/// Should be called once at application startup.
pub fn init(config: &Config) -> Result<(), ServerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.level).map_err(|e| ServerError::Logger {
            message: format!("invalid log level '{}': {e}", config.logging.level),
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).json())
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .compact(),
            )
            .try_init()
    };

    result.map_err(|e| ServerError::Logger {
        message: e.to_string(),
    })
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("======================================");
    tracing::info!("PriceOptimize AI demo API started");
    tracing::info!("Listening on: http://{addr}");
    tracing::info!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if let Some(max_conn) = config.performance.max_connections {
        tracing::info!("Max connections: {max_conn}");
    }
    if config.logging.access_log {
        tracing::info!("Access log format: {}", config.logging.access_log_format);
    }
    tracing::info!("======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!(%peer_addr, "connection accepted");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    tracing::info!(target: ACCESS_TARGET, "{}", entry.format(format));
}

pub fn log_shutdown_requested(signal: &str) {
    tracing::info!("{signal} received, stopping accept loop");
}

pub fn log_shutdown_complete(remaining: usize) {
    tracing::info!(remaining_connections = remaining, "server stopped accepting connections");
}
