//! The server capability consumed by the coordinator.
//!
//! # Responsibilities
//! - Define the `Servable` contract: an accept loop plus a bounded drain
//! - Define the outcome taxonomy for one coordination pass
//!
//! # Design Decisions
//! - `run()` resolving `Ok(())` means "closed because drain was requested";
//!   every other termination is an error carried in `Self::Error`
//! - One associated error type covers both operations; the coordinator
//!   wraps it with the phase that failed

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Something that can run an accept loop and be asked to drain within a
/// deadline.
///
/// The coordinator invokes `run()` exactly once and `drain()` at most once
/// per instance. Implementations keep full ownership of their listener and
/// connection resources; the coordinator only sequences the calls.
pub trait Servable: Send + Sync + 'static {
    /// Failure reported by either operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run the accept loop until the server stops.
    ///
    /// Resolves `Ok(())` when the server closed because a drain was
    /// requested, or `Err` for any other termination (bind failure,
    /// unrecoverable I/O error).
    fn run(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Stop accepting new work and wait for in-flight work to finish.
    ///
    /// Implementations should honor `deadline` themselves; the coordinator
    /// additionally bounds the call, so a drain that overruns the deadline
    /// is reported as a timeout either way.
    fn drain(&self, deadline: Instant) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Terminal outcome of one coordination pass, when it is not a success.
#[derive(Debug, Error)]
pub enum ServeError<E>
where
    E: std::error::Error + 'static,
{
    /// The accept loop terminated for a reason other than a requested drain.
    #[error("accept loop failed")]
    RunLoop(#[source] E),

    /// The shutdown signal arrived but the drain did not complete cleanly.
    #[error("graceful drain failed")]
    Drain(#[source] DrainError<E>),
}

/// Why a drain did not complete.
#[derive(Debug, Error)]
pub enum DrainError<E>
where
    E: std::error::Error + 'static,
{
    /// In-flight work did not finish before the deadline elapsed.
    #[error("drain deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    /// The server reported a shutdown failure of its own.
    #[error(transparent)]
    Shutdown(E),
}

/// Result alias for one coordination pass.
pub type ServeResult<E> = Result<(), ServeError<E>>;
