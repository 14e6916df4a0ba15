//! Directory browser that only offers files with one extension.
//!
//! Directories are listed first, then matching files, both sorted
//! case-insensitively. Typing filters the listing by name.

use crate::component::{Component, ComponentResult};
use crate::modal::Modal;
use crate::scroll::{ScrollState, Scrollable, render_scrollbar};
use crate::style::{ACCENT, SURFACE_0, SURFACE_1, TEXT, TEXT_DIM, TEXT_MUTED, ERROR};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::io;
use std::path::{Path, PathBuf};

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEntry {
    /// `..`
    Parent(PathBuf),
    Directory { name: String, path: PathBuf },
    File { name: String, path: PathBuf },
}

impl PickerEntry {
    pub fn label(&self) -> String {
        match self {
            PickerEntry::Parent(_) => "../".to_string(),
            PickerEntry::Directory { name, .. } => format!("{name}/"),
            PickerEntry::File { name, .. } => name.clone(),
        }
    }

    fn name(&self) -> &str {
        match self {
            PickerEntry::Parent(_) => "..",
            PickerEntry::Directory { name, .. } | PickerEntry::File { name, .. } => name,
        }
    }
}

/// Listing state of a [`FilePicker`].
#[derive(Debug, Clone)]
pub struct FilePickerState {
    dir: PathBuf,
    extension: String,
    entries: Vec<PickerEntry>,
    filter: String,
    /// Indices into `entries` that match `filter`.
    filtered: Vec<usize>,
    selected: usize,
    scroll: ScrollState,
    error: Option<String>,
}

impl FilePickerState {
    /// Open `dir`, offering files ending in `.{extension}`.
    pub fn open(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let mut state = Self {
            dir: dir.into(),
            extension: extension.into(),
            entries: Vec::new(),
            filter: String::new(),
            filtered: Vec::new(),
            selected: 0,
            scroll: ScrollState::new(0, 10),
            error: None,
        };
        state.reload();
        state
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Entries matching the current filter.
    pub fn visible_entries(&self) -> impl Iterator<Item = &PickerEntry> {
        self.filtered.iter().map(|&i| &self.entries[i])
    }

    pub fn selected(&self) -> Option<&PickerEntry> {
        self.filtered.get(self.selected).map(|&i| &self.entries[i])
    }

    /// Last error from reading the directory, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.filtered.len() {
            self.selected += 1;
            self.scroll.ensure_visible(self.selected);
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroll.ensure_visible(self.selected);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll.ensure_visible(0);
    }

    pub fn select_last(&mut self) {
        self.selected = self.filtered.len().saturating_sub(1);
        self.scroll.ensure_visible(self.selected);
    }

    pub fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.apply_filter();
    }

    /// Remove the last filter character. Returns false when already empty.
    pub fn pop_filter(&mut self) -> bool {
        let popped = self.filter.pop().is_some();
        if popped {
            self.apply_filter();
        }
        popped
    }

    /// Switch to `dir` and list it.
    pub fn change_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dir = dir.into();
        self.filter.clear();
        self.reload();
    }

    pub fn go_up(&mut self) {
        if let Some(parent) = self.dir.parent() {
            let parent = parent.to_path_buf();
            self.change_dir(parent);
        }
    }

    /// Re-read the current directory.
    pub fn reload(&mut self) {
        match read_listing(&self.dir, &self.extension) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), error = %e, "cannot list directory");
                self.entries = self
                    .dir
                    .parent()
                    .map(|p| vec![PickerEntry::Parent(p.to_path_buf())])
                    .unwrap_or_default();
                self.error = Some(e.to_string());
            }
        }
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            // `..` only while unfiltered, so Enter after typing picks a match.
            .filter(|(_, e)| match e {
                PickerEntry::Parent(_) => needle.is_empty(),
                _ => e.name().to_lowercase().contains(&needle),
            })
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
        self.scroll.set_total(self.filtered.len());
        self.scroll.scroll_to_top();
    }
}

fn read_listing(dir: &Path, extension: &str) -> io::Result<Vec<PickerEntry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            dirs.push(PickerEntry::Directory { name, path });
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            files.push(PickerEntry::File { name, path });
        }
    }

    let by_name = |a: &PickerEntry, b: &PickerEntry| a.name().to_lowercase().cmp(&b.name().to_lowercase());
    dirs.sort_by(by_name);
    files.sort_by(by_name);

    let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
    if let Some(parent) = dir.parent() {
        entries.push(PickerEntry::Parent(parent.to_path_buf()));
    }
    entries.extend(dirs);
    entries.extend(files);
    Ok(entries)
}

/// Modal file chooser. Completes with the chosen file's path.
#[derive(Debug, Clone)]
pub struct FilePicker {
    pub state: FilePickerState,
    title: String,
}

impl FilePicker {
    pub fn new(title: impl Into<String>, start_dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            state: FilePickerState::open(start_dir, extension),
            title: title.into(),
        }
    }

    fn modal(&self) -> Modal<'_> {
        Modal::new(&self.title)
            .width_percent(70)
            .height(20)
            .key_hints(self.key_hints())
    }

    fn activate(&mut self) -> ComponentResult<PathBuf> {
        match self.state.selected().cloned() {
            Some(PickerEntry::Parent(path)) | Some(PickerEntry::Directory { path, .. }) => {
                self.state.change_dir(path);
                ComponentResult::Handled
            }
            Some(PickerEntry::File { path, .. }) => ComponentResult::Done(path),
            None => ComponentResult::Handled,
        }
    }

    fn render_row(&self, entry: &PickerEntry, selected: bool, area: Rect, buf: &mut Buffer) {
        let (bg, fg) = if selected {
            (ACCENT, SURFACE_0)
        } else {
            match entry {
                PickerEntry::File { .. } => (SURFACE_0, TEXT),
                _ => (SURFACE_0, TEXT_DIM),
            }
        };
        buf.set_style(area, Style::default().bg(bg));
        let prefix = if selected { "> " } else { "  " };
        buf.set_stringn(
            area.x,
            area.y,
            format!("{prefix}{}", entry.label()),
            area.width as usize,
            Style::default().fg(fg).bg(bg),
        );
    }
}

impl Scrollable for FilePicker {
    fn scroll_state(&self) -> &ScrollState {
        &self.state.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.state.scroll
    }
}

impl Component for FilePicker {
    type Output = PathBuf;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let modal = self.modal();
        let inner = modal.inner(area);
        modal.render(area, buf);
        if inner.height < 3 || inner.width < 4 {
            return;
        }

        // Row 0: directory, row 1: filter, rest: listing.
        buf.set_stringn(
            inner.x,
            inner.y,
            self.state.dir.display().to_string(),
            inner.width as usize,
            Style::default().fg(TEXT_DIM).bg(SURFACE_0),
        );

        let filter_row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        buf.set_style(filter_row, Style::default().bg(SURFACE_1));
        let (text, style) = if self.state.filter.is_empty() {
            ("type to filter...", Style::default().fg(TEXT_MUTED).bg(SURFACE_1))
        } else {
            (self.state.filter.as_str(), Style::default().fg(TEXT).bg(SURFACE_1))
        };
        buf.set_stringn(filter_row.x + 1, filter_row.y, "/", 1, Style::default().fg(ACCENT).bg(SURFACE_1));
        buf.set_stringn(filter_row.x + 3, filter_row.y, text, inner.width.saturating_sub(3) as usize, style);

        let list = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
        if let Some(error) = &self.state.error {
            buf.set_stringn(list.x, list.bottom() - 1, error, list.width as usize, Style::default().fg(ERROR).bg(SURFACE_0));
        }

        // The list height is only known here; render with a local copy.
        let mut scroll = self.state.scroll.clone();
        scroll.set_visible(list.height as usize);
        scroll.ensure_visible(self.state.selected);

        let rows_area = Rect::new(list.x, list.y, list.width.saturating_sub(1), list.height);
        for (row, idx) in scroll.visible_range().enumerate() {
            let entry = &self.state.entries[self.state.filtered[idx]];
            let row_area = Rect::new(rows_area.x, rows_area.y + row as u16, rows_area.width, 1);
            self.render_row(entry, idx == self.state.selected, row_area, buf);
        }

        let bar = Rect::new(list.right().saturating_sub(1), list.y, 1, list.height);
        render_scrollbar(bar, buf, &scroll);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => ComponentResult::Cancelled,
            KeyCode::Char('c') if ctrl => ComponentResult::Cancelled,
            KeyCode::Enter => self.activate(),
            KeyCode::Up => {
                self.state.select_prev();
                ComponentResult::Handled
            }
            KeyCode::Down => {
                self.state.select_next();
                ComponentResult::Handled
            }
            KeyCode::Home => {
                self.state.select_first();
                ComponentResult::Handled
            }
            KeyCode::End => {
                self.state.select_last();
                ComponentResult::Handled
            }
            KeyCode::PageUp => {
                for _ in 0..10 {
                    self.state.select_prev();
                }
                ComponentResult::Handled
            }
            KeyCode::PageDown => {
                for _ in 0..10 {
                    self.state.select_next();
                }
                ComponentResult::Handled
            }
            KeyCode::Backspace => {
                if !self.state.pop_filter() {
                    self.state.go_up();
                }
                ComponentResult::Handled
            }
            KeyCode::Char(c) if !ctrl => {
                self.state.push_filter(c);
                ComponentResult::Handled
            }
            _ => ComponentResult::NotHandled,
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Enter", "Open"), ("Bksp", "Up"), ("Esc", "Cancel")]
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.state.push_filter(c);
        }
        true
    }
}
