//! Signal handling for graceful shutdown

use std::{future::Future, io};
use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{info, warn};

/// Wait for SIGTERM or SIGINT.
///
/// If the handler cannot be installed, falls back to tokio's ctrl-c listener.
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([SIGTERM, SIGINT]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to register signal handler: {}, using ctrl-c only", e);
            wait_for_ctrl_c(tokio::signal::ctrl_c()).await;
            return;
        }
    };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
    signals.handle().close();
}

/// Resolve when `ctrl_c` fires. A listener that fails never resolves, so the
/// server keeps running instead of shutting down at startup.
async fn wait_for_ctrl_c<F>(ctrl_c: F)
where
    F: Future<Output = io::Result<()>>,
{
    match ctrl_c.await {
        Ok(()) => info!("Received ctrl-c"),
        Err(e) => {
            warn!("Failed to listen for ctrl-c: {}, shutdown by signal disabled", e);
            std::future::pending::<()>().await;
        }
    }
}
