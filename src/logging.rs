//! Tracing setup
//!
//! The terminal UI owns stdout, so events go to the configured log file.
//! Without a log file no subscriber is installed.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "SIDEDIFF_LOG";

const DEFAULT_FILTER: &str = "info";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Filter from `SIDEDIFF_LOG`, or `info` when unset or invalid
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the file subscriber described by `settings`.
///
/// Returns `false` when logging is disabled.
pub fn init(settings: &Settings) -> Result<bool, LoggingError> {
    match settings.log_file.as_deref() {
        Some(path) => init_file(path).map(|()| true),
        None => Ok(false),
    }
}

fn init_file(path: &Path) -> Result<(), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter()),
        )
        .try_init()?;

    Ok(())
}
