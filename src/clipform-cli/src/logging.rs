//! File logging.
//!
//! The form owns the terminal, so logs only ever go to a file.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::args::{Cli, LogLevel};

pub const DEBUG_LOG_FILE: &str = "clipform-debug.log";

/// Flushes buffered log lines when dropped. Keep it alive until exit.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
    pub path: PathBuf,
}

/// Where and how verbosely to log, or `None` for no logging.
pub fn log_target(cli: &Cli) -> Result<Option<(PathBuf, LogLevel)>> {
    if cli.debug {
        let path = std::env::current_dir()
            .context("cannot determine working directory")?
            .join(DEBUG_LOG_FILE);
        return Ok(Some((path, LogLevel::Trace)));
    }
    Ok(cli
        .log_file
        .clone()
        .map(|path| (path, cli.effective_log_level())))
}

/// Install the global subscriber for `cli`.
pub fn init(cli: &Cli) -> Result<Option<LogGuard>> {
    let Some((path, level)) = log_target(cli)? else {
        return Ok(None);
    };
    init_file_logging(&path, level).map(Some)
}

fn init_file_logging(path: &Path, level: LogLevel) -> Result<LogGuard> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(level == LogLevel::Trace)
        .with_line_number(level == LogLevel::Trace);

    let filter = format!(
        "warn,clipform_cli={0},clipform_tui={0},clipform_tui_components={0},clipform_fields={0}",
        level.as_filter_str()
    );

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), level = level.as_filter_str(), "logging started");
    Ok(LogGuard {
        _guard: guard,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_flags_means_no_logging() {
        let cli = Cli::try_parse_from(["clipform"]).unwrap();
        assert!(log_target(&cli).unwrap().is_none());
    }

    #[test]
    fn test_debug_logs_to_working_directory() {
        let cli = Cli::try_parse_from(["clipform", "--debug", "--log-file", "/tmp/other.log"]).unwrap();
        let (path, level) = log_target(&cli).unwrap().unwrap();
        assert_eq!(path, std::env::current_dir().unwrap().join(DEBUG_LOG_FILE));
        assert_eq!(level, LogLevel::Trace);
    }

    #[test]
    fn test_log_file_uses_log_level() {
        let cli = Cli::try_parse_from([
            "clipform",
            "--log-file",
            "/tmp/clipform.log",
            "--log-level",
            "warn",
        ])
        .unwrap();
        let (path, _) = log_target(&cli).unwrap().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/clipform.log"));
    }
}
