//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT on unix; Ctrl+C elsewhere)
//! - Translate the first signal into a [`Shutdown`] trigger
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Signals after the first are left to the OS default once the task exits

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::Shutdown;

/// Spawn a background task that triggers `shutdown` on the first
/// termination signal.
pub fn spawn_signal_listener(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    })
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => tracing::info!("SIGTERM received, requesting shutdown"),
        _ = sigint.recv() => tracing::info!("SIGINT received, requesting shutdown"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Ctrl+C received, requesting shutdown");
}
