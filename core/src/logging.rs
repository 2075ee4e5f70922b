//! Logging setup
//!
//! Builds the global tracing subscriber from [`LoggingConfig`]: an
//! `EnvFilter` level plus an optional non-blocking file appender.

use anyhow::Context;
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// Returns the appender guard when file logging is enabled; the caller must
/// keep it alive or buffered log lines are dropped on shutdown.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, anyhow::Error> {
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid logging.level {:?}", config.level))?;

    match &config.file {
        Some(file) => {
            let path = Path::new(file);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().unwrap_or_else(|| OsStr::new("locale-sync.log"));

            let appender = tracing_appender::rolling::daily(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
            Ok(Some(guard))
        },
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
            Ok(None)
        },
    }
}
