//! Echo server demonstrating lifecycle coordination.
//!
//! Serves a trivial handler until SIGTERM/SIGINT, then drains in-flight
//! requests within the configured timeout. Takes an optional TOML config
//! path as its only argument.

use std::path::Path;

use axum::{routing::get, Router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graceful_serve::lifecycle::signals;
use graceful_serve::{config, serve_until_shutdown, GracefulConfig, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graceful_serve=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => config::load_config(Path::new(&path))?,
        None => GracefulConfig::default(),
    };

    tracing::info!(
        bind_address = %config.bind_address,
        drain_timeout_secs = config.drain_timeout_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let listener = shutdown.listener();
    let _signals = signals::spawn_signal_listener(shutdown);

    let app = Router::new().route("/", get(|| async { "ok\n" }));
    let server = HttpServer::new(config.bind_address.parse()?, app);

    serve_until_shutdown(server, config.drain_timeout(), listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
