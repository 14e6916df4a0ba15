//! Finding the JSON document to build the form from.
//!
//! A [`SourceResolver`] names the default location. [`resolve`] tries it
//! and, if it does not yield fields, warns and asks the user once through a
//! [`Prompter`]. Cancelling or picking a bad file is fatal.
//!
//! ```text
//! TryDefault --ok--> Ready
//!     |
//!  missing/invalid
//!     v
//! PromptUser --picked + ok--> Ready
//!     |            |
//!  cancelled    invalid
//!     v            v
//!   Fatal        Fatal
//! ```

use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use clipform_fields::{FieldCollection, LoadError};
use clipform_tui_components::modal::MessageLevel;
use thiserror::Error;

/// Title of the file picker.
pub const PICKER_TITLE: &str = "Select a JSON file";

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The default location could not be computed.
    #[error("cannot determine the default data location: {reason}")]
    Location { reason: String },

    #[error("no JSON file selected")]
    UserCancelled,

    #[error("{source}")]
    SourceInvalid {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// A dialog could not be shown or read.
    #[error("user interaction failed: {0}")]
    Interaction(#[from] io::Error),
}

impl ResolveError {
    /// Outcomes after which the process exits with a failure status.
    pub fn is_fatal_user_outcome(&self) -> bool {
        matches!(
            self,
            ResolveError::UserCancelled | ResolveError::SourceInvalid { .. }
        )
    }
}

/// Names the file tried before asking the user.
pub trait SourceResolver {
    /// Human-readable description for logs.
    fn describe(&self) -> String;

    fn default_location(&self) -> Result<PathBuf, ResolveError>;
}

/// `<directory of the running executable>/<file_name>`.
#[derive(Debug, Clone)]
pub struct ExeDirResolver {
    pub file_name: String,
}

impl SourceResolver for ExeDirResolver {
    fn describe(&self) -> String {
        format!("{} next to the executable", self.file_name)
    }

    fn default_location(&self) -> Result<PathBuf, ResolveError> {
        let exe = std::env::current_exe().map_err(|e| ResolveError::Location {
            reason: e.to_string(),
        })?;
        let dir = exe.parent().ok_or_else(|| ResolveError::Location {
            reason: format!("{} has no parent directory", exe.display()),
        })?;
        Ok(dir.join(&self.file_name))
    }
}

/// `<current directory>/<file_name>`.
#[derive(Debug, Clone)]
pub struct WorkingDirResolver {
    pub file_name: String,
}

impl SourceResolver for WorkingDirResolver {
    fn describe(&self) -> String {
        format!("{} in the working directory", self.file_name)
    }

    fn default_location(&self) -> Result<PathBuf, ResolveError> {
        let cwd = std::env::current_dir().map_err(|e| ResolveError::Location {
            reason: e.to_string(),
        })?;
        Ok(cwd.join(&self.file_name))
    }
}

/// A path given on the command line.
#[derive(Debug, Clone)]
pub struct ExplicitPathResolver {
    pub path: PathBuf,
}

impl SourceResolver for ExplicitPathResolver {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn default_location(&self) -> Result<PathBuf, ResolveError> {
        Ok(self.path.clone())
    }
}

/// Where to look when no path is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceStrategy {
    /// Next to the executable
    #[default]
    ExeDir,
    /// In the current working directory
    Cwd,
}

/// An explicit path wins over the strategy.
pub fn build_resolver(
    strategy: SourceStrategy,
    file_name: &str,
    explicit: Option<PathBuf>,
) -> Box<dyn SourceResolver> {
    if let Some(path) = explicit {
        return Box::new(ExplicitPathResolver { path });
    }
    let file_name = file_name.to_string();
    match strategy {
        SourceStrategy::ExeDir => Box::new(ExeDirResolver { file_name }),
        SourceStrategy::Cwd => Box::new(WorkingDirResolver { file_name }),
    }
}

/// Blocking interaction with the user.
pub trait Prompter {
    /// Show a message and wait until it is acknowledged.
    fn notify(&mut self, level: MessageLevel, title: &str, message: &str) -> io::Result<()>;

    /// Let the user choose a JSON file. `None` when cancelled.
    fn pick_json_file(&mut self, start_dir: &Path) -> io::Result<Option<PathBuf>>;
}

/// The document that was loaded and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    pub fields: FieldCollection,
}

/// Try the default location, then fall back to asking the user once.
///
/// A default location that cannot be computed is treated like a missing
/// file: the user is asked to pick one.
pub fn resolve(
    resolver: &dyn SourceResolver,
    prompter: &mut dyn Prompter,
) -> Result<Resolved, ResolveError> {
    let default = match resolver.default_location() {
        Ok(default) => default,
        Err(err) => {
            tracing::warn!(source = %resolver.describe(), error = %err, "no default data location");
            prompter.notify(
                MessageLevel::Warning,
                "File Not Found",
                "No JSON file found in the folder. Please select a JSON file.",
            )?;
            return pick_and_load(prompter, &picker_start_dir(None));
        }
    };
    tracing::info!(source = %resolver.describe(), path = %default.display(), "trying default data file");

    match clipform_fields::load(&default) {
        Ok(fields) => {
            return Ok(Resolved {
                path: default,
                fields,
            });
        }
        Err(err) if err.is_missing() => {
            tracing::warn!(path = %default.display(), "default data file not found");
            prompter.notify(
                MessageLevel::Warning,
                "File Not Found",
                "No JSON file found in the folder. Please select a JSON file.",
            )?;
        }
        Err(err) => {
            tracing::warn!(error = %err, "default data file unusable");
            prompter.notify(
                MessageLevel::Warning,
                "Invalid JSON file",
                &format!("{err}\n\nPlease select a JSON file."),
            )?;
        }
    }

    pick_and_load(prompter, &picker_start_dir(Some(&default)))
}

/// Ask for a file once and load it. Cancelling or a bad pick is final.
fn pick_and_load(prompter: &mut dyn Prompter, start_dir: &Path) -> Result<Resolved, ResolveError> {
    let Some(path) = prompter.pick_json_file(start_dir)? else {
        tracing::error!("file selection cancelled");
        prompter.notify(
            MessageLevel::Error,
            "Error",
            "No JSON file selected. Exiting application.",
        )?;
        return Err(ResolveError::UserCancelled);
    };

    match clipform_fields::load(&path) {
        Ok(fields) => {
            tracing::info!(path = %path.display(), "using selected data file");
            Ok(Resolved { path, fields })
        }
        Err(source) => {
            tracing::error!(path = %path.display(), error = %source, "selected data file unusable");
            prompter.notify(
                MessageLevel::Error,
                "Error",
                &format!("Invalid JSON file. Exiting application.\n\n{source}"),
            )?;
            Err(ResolveError::SourceInvalid { path, source })
        }
    }
}

/// The default file's directory if it exists, else the working directory,
/// else the home directory.
fn picker_start_dir(default: Option<&Path>) -> PathBuf {
    default
        .and_then(Path::parent)
        .filter(|dir| dir.is_dir())
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
