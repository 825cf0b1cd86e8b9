//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so the page printed on
//! stdout stays clean. `RUST_LOG` takes precedence over the configured filter.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG`, else `override_filter`, else the configured one
pub fn build_filter(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = override_filter.unwrap_or(&config.filter);
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::InvalidFilter(e.to_string()))
}

/// Install the global subscriber
pub fn init_logging(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config, override_filter)?;

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))
    }
}
