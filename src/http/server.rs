//! HTTP server setup.
//!
//! # Responsibilities
//! - Bind an Axum router through axum-server
//! - Expose the server as a [`Servable`] for the lifecycle coordinator
//! - Implement drain on top of `Handle::graceful_shutdown`

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;
use thiserror::Error;
use tokio::time::Instant;

use crate::lifecycle::servable::Servable;

/// How often the drain loop re-checks the open connection count.
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Errors reported by the HTTP server adapter.
#[derive(Debug, Error)]
pub enum HttpServerError {
    /// Bind failure or unrecoverable I/O error in the accept loop.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connections were still open when the drain deadline passed.
    #[error("connections still open at drain deadline")]
    DrainDeadline,
}

/// An Axum HTTP server that can be run and drained by the coordinator.
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
    handle: Handle,
}

impl HttpServer {
    /// Create a server for `router`, to be bound on `addr`.
    pub fn new(addr: SocketAddr, router: Router) -> Self {
        Self {
            addr,
            router,
            handle: Handle::new(),
        }
    }

    /// Handle onto the running server.
    ///
    /// Useful for discovering the bound address after a port-0 bind via
    /// [`Handle::listening`].
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }
}

impl Servable for HttpServer {
    type Error = HttpServerError;

    async fn run(&self) -> Result<(), HttpServerError> {
        tracing::info!(address = %self.addr, "HTTP server starting");
        axum_server::bind(self.addr)
            .handle(self.handle.clone())
            .serve(self.router.clone().into_make_service())
            .await?;
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    async fn drain(&self, deadline: Instant) -> Result<(), HttpServerError> {
        let grace = deadline.saturating_duration_since(Instant::now());
        self.handle.graceful_shutdown(Some(grace));

        while self.handle.connection_count() > 0 {
            if Instant::now() >= deadline {
                return Err(HttpServerError::DrainDeadline);
            }
            tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
        }
        Ok(())
    }
}
