//! Console + per-run file logging.
//!
//! Every run writes `meraki_deployment_YYYYMMDD_HHMMSS.log` into the log
//! directory alongside the console output on stderr. The returned guard
//! must outlive the run so buffered file lines are flushed.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

/// File name prefix shared by all run logs.
pub const LOG_FILE_PREFIX: &str = "meraki_deployment";

/// Name of the log file for a run started at `started`.
pub fn log_file_name(started: chrono::DateTime<chrono::Local>) -> String {
    format!("{LOG_FILE_PREFIX}_{}", started.format("%Y%m%d_%H%M%S"))
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Returns the file writer's guard and the
/// path of this run's log file.
pub fn init(verbosity: u8, log_dir: &Path) -> Result<(WorkerGuard, PathBuf), CliError> {
    let log_error = |source: Box<dyn std::error::Error + Send + Sync>| CliError::LogFile {
        dir: log_dir.display().to_string(),
        source,
    };

    std::fs::create_dir_all(log_dir).map_err(|e| log_error(e.into()))?;

    let stem = log_file_name(chrono::Local::now());
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&stem)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| log_error(e.into()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok((guard, log_dir.join(format!("{stem}.log"))))
}
