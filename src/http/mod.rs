//! HTTP server adapter subsystem.
//!
//! # Data Flow
//! ```text
//! axum::Router + bind address
//!     → server.rs (axum-server setup, Handle ownership)
//!     → Servable::run()  = accept loop until graceful close
//!     → Servable::drain() = stop accepting, wait for in-flight requests
//! ```

pub mod server;

pub use server::{HttpServer, HttpServerError};
