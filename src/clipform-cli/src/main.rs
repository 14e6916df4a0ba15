//! Clipform - fill in a form from a JSON file and copy fields to the clipboard.

use std::process::ExitCode;

use clap::Parser;
use clipform_cli::args::Cli;
use clipform_cli::logging;
use clipform_tui::ResolveError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_guard = match logging::init(&cli) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("clipform: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    if let (true, Some(guard)) = (cli.debug, &log_guard) {
        eprintln!("Debug mode enabled: logging to {}", guard.path.display());
    }

    // `run` drops the terminal before returning, so stderr is usable here.
    match clipform_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ResolveError>() {
                Some(resolve_err) if resolve_err.is_fatal_user_outcome() => {
                    tracing::info!(reason = %resolve_err, "exiting without a form");
                    eprintln!("clipform: {resolve_err}. Exiting application.");
                }
                _ => {
                    tracing::error!(error = %format!("{err:#}"), "clipform failed");
                    eprintln!("clipform: {err:#}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
