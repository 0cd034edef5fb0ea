//! Lifecycle coordination subsystem.
//!
//! # Data Flow
//! ```text
//! Coordinator (coordinator.rs):
//!     spawn run() → race {run-loop exit, shutdown notification}
//!         → drain(deadline) → one terminal outcome
//!
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast → ShutdownListener::recv()
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger()
//! ```
//!
//! # Design Decisions
//! - run() is never cancelled directly; it stops as a side effect of drain
//!   or by failing on its own
//! - The drain deadline is passed to the Servable and enforced by the
//!   coordinator as well
//! - One terminal outcome per invocation, no internal retries

pub mod coordinator;
pub mod servable;
pub mod shutdown;
pub mod signals;

pub use coordinator::serve_until_shutdown;
pub use servable::{DrainError, Servable, ServeError, ServeResult};
pub use shutdown::{Shutdown, ShutdownListener};
