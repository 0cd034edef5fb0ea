//! Graceful startup and shutdown coordination for network servers.
//!
//! Runs a server's accept loop while watching for a one-shot shutdown
//! notification; on notification the server is asked to drain in-flight work
//! within a deadline, and the whole pass resolves to a single outcome.
//!
//! ```text
//!   run() task ──────────────┐
//!                            ├─ race ─ run exited ──► Ok / RunLoop(cause)
//!   shutdown notification ───┘
//!                            │
//!                            └─ notification first ──► drain(deadline)
//!                                   ──► Ok / Drain(DeadlineExceeded | cause)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use axum::{routing::get, Router};
//! use graceful_serve::lifecycle::signals;
//! use graceful_serve::{serve_until_shutdown, HttpServer, Shutdown};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let shutdown = Shutdown::new();
//!     let listener = shutdown.listener();
//!     let _signals = signals::spawn_signal_listener(shutdown);
//!
//!     let app = Router::new().route("/", get(|| async { "ok" }));
//!     let server = HttpServer::new("127.0.0.1:8080".parse()?, app);
//!
//!     serve_until_shutdown(server, Duration::from_secs(30), listener).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;

pub use config::GracefulConfig;
pub use http::HttpServer;
pub use lifecycle::{serve_until_shutdown, DrainError, Servable, ServeError, Shutdown, ShutdownListener};
