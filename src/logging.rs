//! Logging bootstrap for the command-line binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. `RUST_LOG` takes precedence over the level passed in.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ChatlensError, Result};

/// Level used when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `log_level`.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidFormat`] when the level is not a valid
/// filter directive or a global subscriber is already installed.
pub fn init_logging(log_level: Option<&str>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .map_err(|e| ChatlensError::invalid_format("log level", e.to_string()))?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| ChatlensError::invalid_format("log level", e.to_string()))?;

    tracing::debug!("logging initialized");
    Ok(())
}
