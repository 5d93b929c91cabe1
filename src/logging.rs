//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber. `RUST_LOG`, when set,
//! takes precedence over the configured level.

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingSection;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Build the filter from `RUST_LOG` or the configured level
pub fn build_filter(section: &LoggingSection) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&section.level)?),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(section: &LoggingSection) -> Result<(), LoggingError> {
    let filter = build_filter(section)?;
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
