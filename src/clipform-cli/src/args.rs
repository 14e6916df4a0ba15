//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clipform_fields::DEFAULT_FILE_NAME;
use clipform_tui::source::SourceStrategy;

pub const DEFAULT_TITLE: &str = "Clipform - Job Application Helper";

/// Fill in a form from a JSON file and copy any field to the clipboard.
#[derive(Debug, Parser)]
#[command(name = "clipform", version, about)]
pub struct Cli {
    /// Field document to open. Overrides --source and --file-name.
    pub path: Option<PathBuf>,

    /// Where to look for the field document when no path is given
    #[arg(long, value_enum, default_value_t = SourceStrategy::ExeDir, env = "CLIPFORM_SOURCE")]
    pub source: SourceStrategy,

    /// File name looked up by --source
    #[arg(long, default_value = DEFAULT_FILE_NAME, env = "CLIPFORM_FILE")]
    pub file_name: String,

    /// Window title shown in the header
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Height of the form panel in rows, border included
    #[arg(long, default_value_t = 30, env = "CLIPFORM_HEIGHT",
          value_parser = clap::value_parser!(u16).range(4..))]
    pub height: u16,

    /// Do not capture the mouse (keeps the terminal's own text selection)
    #[arg(long)]
    pub no_mouse: bool,

    /// Write trace-level logs to ./clipform-debug.log
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level for --log-file
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

/// Log level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

impl Cli {
    /// `--log-level`, unless `CLIPFORM_LOG_LEVEL` names a valid level.
    pub fn effective_log_level(&self) -> LogLevel {
        std::env::var("CLIPFORM_LOG_LEVEL")
            .ok()
            .and_then(|level| LogLevel::from_str_loose(&level))
            .unwrap_or(self.log_level)
    }
}
