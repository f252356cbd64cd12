//! Structured logging system
//!
//! This module provides structured logging with:
//! - JSON and text format support
//! - Configurable log levels
//! - stderr or file output, never stdout (the screens own stdout)

use crate::core::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logger instance that manages the logging system
pub struct Logger {
    _guard: WorkerGuard,
}

impl Logger {
    /// Initialize the logging system based on configuration
    ///
    /// The returned logger must stay alive for the whole process, otherwise
    /// buffered lines in the non-blocking writer are lost.
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let level = parse_log_level(&config.level)?;

        // RUST_LOG wins over the configured level
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

        let (writer, guard) = match config.output.as_str() {
            "stderr" => tracing_appender::non_blocking(std::io::stderr()),
            "file" => {
                let log_file = config.log_file.as_ref()
                    .context("log_file must be specified when output is 'file'")?;

                let directory = match log_file.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => std::path::PathBuf::from("."),
                };
                std::fs::create_dir_all(&directory)
                    .context("Failed to create log directory")?;

                let filename = log_file.file_name()
                    .and_then(|name| name.to_str())
                    .context("Log file must have a UTF-8 filename")?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::NEVER)
                    .filename_prefix(filename)
                    .build(&directory)
                    .context("Failed to create log file")?;

                tracing_appender::non_blocking(appender)
            }
            _ => {
                anyhow::bail!("Invalid output configuration: {}", config.output);
            }
        };

        let fmt_layer = match config.format.as_str() {
            "json" => {
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_current_span(true)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .boxed()
            }
            "text" => {
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.output == "stderr")
                    .with_target(true)
                    .boxed()
            }
            _ => {
                anyhow::bail!("Invalid format configuration: {}", config.format);
            }
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to initialize tracing subscriber")?;

        tracing::debug!(
            level = %config.level,
            format = %config.format,
            output = %config.output,
            "Logging system initialized"
        );

        Ok(Logger { _guard: guard })
    }
}

/// Parse log level string to tracing Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {}", level),
    }
}
