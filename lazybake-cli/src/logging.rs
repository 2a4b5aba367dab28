//! Tracing subscriber setup.

use std::io;
use std::path::Path;

use lazybake::config::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::CliError;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `--verbose`, which takes precedence over
/// the configured level. Log lines go to stderr and, if configured, to a log
/// file. The returned guard flushes the file writer when dropped.
pub fn init(settings: &LoggingSettings, verbose: bool) -> Result<Option<WorkerGuard>, CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = if verbose { "debug" } else { settings.level.as_str() };
            EnvFilter::try_new(level)
                .map_err(|e| CliError::Logging(format!("invalid level '{}': {}", level, e)))?
        }
    };

    let (file_layer, guard) = match &settings.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    Ok(guard)
}

fn file_appender(path: &Path) -> Result<tracing_appender::rolling::RollingFileAppender, CliError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CliError::Logging(format!("not a file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(tracing_appender::rolling::never(directory, file_name))
}
