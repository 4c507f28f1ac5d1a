//! Logging initialization

use crate::config::{Config, Mode};
use crate::error::AppError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// Interactive mode owns stdout and the screen, so it only logs when a log
/// file was given. Dump mode logs to stderr. `RUST_LOG` takes precedence over
/// the configured level. The returned guard must be held until exit so
/// buffered lines reach the file.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    if let Some(path) = &config.log_file {
        let file_appender = file_appender(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_ansi(false),
            )
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string()))?;
        return Ok(Some(guard));
    }

    if let Mode::Dump { .. } = config.mode {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string()))?;
    }
    Ok(None)
}

/// Opens the log file without rotation, reporting failures instead of panicking
fn file_appender(path: &Path) -> Result<RollingFileAppender, AppError> {
    let (directory, file_name) = split_log_path(path)?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .map_err(|e| AppError::Logging(format!("cannot open {}: {e}", path.display())))
}

fn split_log_path(path: &Path) -> Result<(&Path, &Path), AppError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::Logging(format!("{} is not a file path", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((directory, Path::new(file_name)))
}
