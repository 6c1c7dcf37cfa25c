//! Tracing setup.
//!
//! The dashboard owns the terminal, so log output goes to a daily-rolling
//! file under `${CITIDASH_HOME}/logs`. `CITIDASH_LOG` overrides the filter.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

const LOG_ENV: &str = "CITIDASH_LOG";
const LOG_FILE_PREFIX: &str = "citidash.log";

/// Installs the global subscriber.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init(config: &Config, verbose: bool) -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = build_filter(config, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}

fn build_filter(config: &Config, verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{level}'"))
}
