//! Configuration management.
//!
//! All fields have defaults so a minimal (or absent) config file works.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Graceful shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GracefulConfig {
    /// Bind address for the listener (e.g. "127.0.0.1:8080").
    pub bind_address: String,

    /// Seconds allowed for in-flight requests to finish during drain.
    pub drain_timeout_secs: u64,
}

impl Default for GracefulConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            drain_timeout_secs: 30,
        }
    }
}

impl GracefulConfig {
    /// The drain timeout as a [`Duration`].
    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GracefulConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
