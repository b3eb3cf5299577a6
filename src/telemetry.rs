//! Optional `tracing` subscriber setup for binaries and tools embedding the crate.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::DashboardError;

/// Installs a global fmt subscriber. `RUST_LOG` wins over `level`.
///
/// Fails if a global subscriber is already set.
pub fn init(level: &str) -> Result<(), DashboardError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| DashboardError::Config(e.to_string()))
}

pub fn init_from_config(config: &LoggingConfig) -> Result<(), DashboardError> {
    init(&config.level)
}
