// Application state module
// Read-only configuration shared by every connection task

use hyper::header::HeaderValue;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;
use crate::http::CorsPolicy;

/// Application state
pub struct AppState {
    pub config: Config,
    pub cors: CorsPolicy,
    /// `Server` response header; `None` when the configured name is not a valid header value
    pub server_header: Option<HeaderValue>,

    // Cached config values for fast access on the request path
    pub access_log: bool,
    pub access_log_format: String,

    /// Connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cors: CorsPolicy::from_config(&config.cors),
            server_header: HeaderValue::from_str(&config.http.server_name).ok(),
            access_log: config.logging.access_log,
            access_log_format: config.logging.access_log_format.clone(),
            active_connections: AtomicUsize::new(0),
        }
    }

    pub fn connection_count(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
