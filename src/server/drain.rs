// Connection drain module
// Waits for in-flight connections after the listener has been closed

use std::time::Duration;

use crate::config::AppState;

/// Interval between connection counter checks
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Wait until no connection is active or `grace` has elapsed.
///
/// Connection tasks decrement the shared counter when they finish, so
/// polling it is enough; no per-connection handle is kept.
///
/// # Returns
///
/// Number of connections still open when the wait ended.
pub async fn drain_connections(state: &AppState, grace: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + grace;

    loop {
        let active = state.connection_count();
        if active == 0 || tokio::time::Instant::now() >= deadline {
            return active;
        }
        tracing::debug!(active, "waiting for connections to finish");
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
