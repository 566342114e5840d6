// Server loop module
// Accepts connections until shutdown is requested, then drains

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use super::drain::drain_connections;
use crate::config::AppState;
use crate::logger;

/// Accept loop
///
/// Runs until `shutdown` is notified. The listener is closed first, then
/// in-flight connections get up to `write_timeout` seconds to finish.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    let grace = Duration::from_secs(state.config.performance.write_timeout);
    let remaining = drain_connections(&state, grace).await;
    logger::log_shutdown_complete(remaining);
    Ok(())
}
