//! Global `tracing` subscriber setup.

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// Installs the global subscriber described by `settings`.
///
/// Logs go to stdout, or to `directory/file_name` when a directory is set.
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the program.
///
/// # Errors
/// - Invalid filter directives
/// - A global subscriber is already installed
pub fn init(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_new(&settings.filter)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let guard = match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::never(directory, &settings.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
            Some(guard)
        }
        None => {
            builder.try_init().map_err(|e| LoggingError::Init(e.to_string()))?;
            None
        }
    };

    tracing::debug!(filter = %settings.filter, "Logging initialized");
    Ok(guard)
}
