//! Clipform command-line entry point.
//!
//! - `args` - argument parsing
//! - `logging` - file logging bootstrap
//! - [`run`] - resolve the field document, show the form, wait for quit

pub mod args;
pub mod logging;

use anyhow::{Context, Result};
use clipform_tui::event_loop;
use clipform_tui::{
    AppContext, ClipboardSink, CrosstermEvents, FormLayout, FormTerminal, FormView,
    SystemClipboard, TerminalOptions, TerminalPrompter, build_resolver, resolve,
};

use crate::args::Cli;

/// Form layout for the given arguments.
pub fn form_layout(cli: &Cli) -> FormLayout {
    FormLayout {
        form_height: cli.height,
        ..FormLayout::default()
    }
}

/// Run the whole session. The terminal is restored before this returns.
pub fn run(cli: &Cli) -> Result<()> {
    let resolver = build_resolver(cli.source, &cli.file_name, cli.path.clone());

    let options = TerminalOptions::new()
        .mouse_capture(!cli.no_mouse)
        .title(cli.title.clone());
    let mut terminal = FormTerminal::with_options(options)?;
    let mut events = CrosstermEvents;

    let resolved = {
        let mut prompter = TerminalPrompter::new(terminal.inner_mut(), &mut events, &cli.title);
        resolve(resolver.as_ref(), &mut prompter)?
    };

    if !SystemClipboard::is_available() {
        tracing::warn!("system clipboard unavailable, copies will fail");
    }
    let clipboard: Box<dyn ClipboardSink> = Box::new(SystemClipboard::new());

    let form = FormView::build(&resolved.fields, &form_layout(cli));
    let mut ctx = AppContext::new(&cli.title, resolved.path, form, clipboard);

    event_loop::run(terminal.inner_mut(), &mut events, &mut ctx).context("event loop failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_height_flag_sets_form_height() {
        let cli = Cli::try_parse_from(["clipform", "--height", "18"]).unwrap();
        let layout = form_layout(&cli);
        assert_eq!(layout.form_height, 18);
        assert_eq!(layout.multiline_height, FormLayout::default().multiline_height);
    }
}
