// Server module entry
// Listener setup, connection handling, accept loop and graceful shutdown

pub mod connection;
pub mod drain;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the file is mounted under another name
#[path = "loop.rs"]
pub mod server_loop;

use std::sync::Arc;
use tokio::sync::Notify;

use crate::config::{AppState, Config};
use crate::error::ServerError;
use crate::logger;

pub use listener::{create_listener, DEFAULT_BACKLOG};
pub use server_loop::start_server_loop;

/// Bind the configured address and serve until SIGINT/SIGTERM
pub async fn run(cfg: Config) -> Result<(), ServerError> {
    let addr = cfg.get_socket_addr()?;
    let listener = create_listener(addr, cfg.performance.backlog)?;
    let state = Arc::new(AppState::new(&cfg));

    logger::log_server_start(&listener.local_addr()?, &cfg);

    let shutdown = Arc::new(Notify::new());
    signal::start_signal_handler(Arc::clone(&shutdown));

    start_server_loop(listener, state, shutdown).await?;
    Ok(())
}
