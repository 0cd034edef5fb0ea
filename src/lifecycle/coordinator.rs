//! The startup/shutdown coordination protocol.
//!
//! # Responsibilities
//! - Run the accept loop on its own task
//! - Race run-loop exit against the one-shot shutdown notification
//! - Bound the drain with the configured deadline
//! - Report exactly one terminal outcome per invocation

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tokio::time::Instant;

use crate::lifecycle::servable::{DrainError, Servable, ServeError, ServeResult};
use crate::lifecycle::shutdown::ShutdownListener;

/// Run `servable` until it stops on its own or `shutdown` fires.
///
/// The accept loop is spawned on its own task so it keeps serving while this
/// function waits. When the shutdown notification arrives first, the server
/// is asked to drain within `drain_timeout`; in-flight work that finishes in
/// time yields `Ok(())`, anything else yields [`ServeError::Drain`]. When the
/// accept loop exits first with an error, that error is returned immediately
/// as [`ServeError::RunLoop`] and no drain is attempted.
///
/// An accept loop that closes cleanly before any notification was observed
/// means some other actor already drained the server; this resolves as
/// `Ok(())` without waiting further.
///
/// A `drain_timeout` of zero still invokes `drain()`; it simply supplies the
/// shortest possible deadline.
pub async fn serve_until_shutdown<S>(
    servable: S,
    drain_timeout: Duration,
    mut shutdown: ShutdownListener,
) -> ServeResult<S::Error>
where
    S: Servable,
{
    let servable = Arc::new(servable);
    let mut run_task = tokio::spawn({
        let servable = Arc::clone(&servable);
        async move { servable.run().await }
    });

    tokio::select! {
        exit = &mut run_task => resolve_run_exit(exit),
        _ = shutdown.recv() => {
            tracing::info!(timeout = ?drain_timeout, "shutdown requested, draining connections");
            let deadline = Instant::now() + drain_timeout;
            match tokio::time::timeout_at(deadline, servable.drain(deadline)).await {
                Ok(Ok(())) => {
                    tracing::info!("drain complete");
                    Ok(())
                }
                Ok(Err(e)) => Err(ServeError::Drain(DrainError::Shutdown(e))),
                Err(_elapsed) => Err(ServeError::Drain(DrainError::DeadlineExceeded(drain_timeout))),
            }
        }
    }
}

/// Map the run task's exit into an outcome.
fn resolve_run_exit<E>(exit: Result<Result<(), E>, JoinError>) -> ServeResult<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match exit {
        Ok(Ok(())) => {
            // Closed cleanly without this coordinator triggering drain.
            tracing::debug!("accept loop closed before a shutdown signal was observed");
            Ok(())
        }
        Ok(Err(e)) => Err(ServeError::RunLoop(e)),
        // The task is never aborted, so a join failure is a panic.
        Err(join) => std::panic::resume_unwind(join.into_panic()),
    }
}
