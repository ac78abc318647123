//! Logging initialization for the demo binary.
//!
//! The TUI owns the terminal, so logs always go to a timestamped file under
//! the given directory; stderr would be swallowed by the alternate screen.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Guard that must be kept alive for the duration of the program.
    /// When dropped, ensures all buffered logs are flushed.
    pub _guard: WorkerGuard,

    /// Path to the log file
    pub log_file_path: PathBuf,
}

/// Initialize file logging. `debug_override` (from `--debug`) wins over the
/// default `info` level; `RUST_LOG` wins over both.
pub fn init_logging(log_dir: &Path, debug_override: bool) -> Result<LoggingHandle> {
    let default_level = if debug_override { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
    );

    std::fs::create_dir_all(log_dir)?;

    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let log_filename = format!("stepflow-{timestamp}.log");
    let log_file_path = log_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(log_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false) // No ANSI codes in log files
                .with_writer(non_blocking),
        )
        .init();

    Ok(LoggingHandle {
        _guard: guard,
        log_file_path,
    })
}
