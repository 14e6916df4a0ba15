//! The form: one label per field, one input row per recognized field.
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │ Name                                     ▲
//! │ Alice                [ Copy ]            │
//! │                                          │
//! │ Cover Letter                             │
//! │ Dear Sir,            [ Copy ]            │
//! │ ...                                      ▼
//! ╰──────────────────────────────────────────╯
//! ```
//!
//! Live text is kept in a table of [`InputControl`]s. Rows and copy buttons
//! refer to it by [`ControlId`], and the text to copy is looked up when the
//! button fires.

use clipform_fields::{FieldCollection, FieldKind, FieldSpec};
use clipform_tui_components::borders::RoundedBorder;
use clipform_tui_components::button::CopyButton;
use clipform_tui_components::component::{Component, ComponentResult};
use clipform_tui_components::focus::{FocusDirection, FocusManager};
use clipform_tui_components::input::LineInput;
use clipform_tui_components::scroll::{ScrollState, Scrollable, render_scrollbar};
use clipform_tui_components::style::Theme;
use clipform_tui_components::text_area::MultiLineInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::zones::ClickZoneRegistry;

/// Columns between an input and its copy button.
const BUTTON_GAP: u16 = 2;
/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: usize = 3;

/// Sizes of the form and its controls, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    /// Visible rows of a multi-line field.
    pub multiline_height: u16,
    /// Wrap width of a multi-line field.
    pub multiline_width: u16,
    /// Minimum width of a single-line field.
    pub single_line_min_width: u16,
    /// Height of the form panel including its border.
    pub form_height: u16,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            multiline_height: 5,
            multiline_width: 40,
            single_line_min_width: 20,
            form_height: 30,
        }
    }
}

/// Index into the form's table of live controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub usize);

/// Something that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Input(ControlId),
    Copy(ControlId),
}

impl FocusTarget {
    pub fn control(self) -> ControlId {
        match self {
            FocusTarget::Input(id) | FocusTarget::Copy(id) => id,
        }
    }

    /// Position in tab order: input 0, copy 0, input 1, copy 1, ...
    fn index(self) -> usize {
        match self {
            FocusTarget::Input(ControlId(i)) => i * 2,
            FocusTarget::Copy(ControlId(i)) => i * 2 + 1,
        }
    }

    fn from_index(index: usize) -> Self {
        let id = ControlId(index / 2);
        if index % 2 == 0 {
            FocusTarget::Input(id)
        } else {
            FocusTarget::Copy(id)
        }
    }
}

/// One field of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub field: FieldSpec,
    /// `None` for fields whose kind gets no input.
    pub control: Option<ControlId>,
}

/// A live, editable input.
#[derive(Debug, Clone)]
pub enum InputControl {
    SingleLine(LineInput),
    MultiLine(MultiLineInput),
}

impl InputControl {
    /// The control for `field`, pre-filled with its default value.
    pub fn for_field(field: &FieldSpec, layout: &FormLayout) -> Option<Self> {
        match field.kind {
            FieldKind::SingleLine => Some(InputControl::SingleLine(
                LineInput::new(field.default_value.as_str())
                    .with_min_width(layout.single_line_min_width),
            )),
            FieldKind::MultiLine => Some(InputControl::MultiLine(MultiLineInput::new(
                &field.default_value,
                layout.multiline_width,
                layout.multiline_height,
            ))),
            FieldKind::Unrecognized(_) => None,
        }
    }

    /// What the control currently displays.
    pub fn current_text(&self) -> String {
        match self {
            InputControl::SingleLine(input) => input.value().to_string(),
            InputControl::MultiLine(area) => area.value(),
        }
    }

    /// The text a copy action places on the clipboard: single-line content
    /// verbatim, multi-line content with surrounding whitespace trimmed.
    pub fn copy_text(&self) -> String {
        match self {
            InputControl::SingleLine(input) => input.value().to_string(),
            InputControl::MultiLine(area) => area.value().trim().to_string(),
        }
    }

    pub fn is_multi_line(&self) -> bool {
        matches!(self, InputControl::MultiLine(_))
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            InputControl::SingleLine(input) => input.key_hints(),
            InputControl::MultiLine(area) => area.key_hints(),
        }
    }

    fn natural_size(&self) -> (u16, u16) {
        match self {
            InputControl::SingleLine(input) => input.natural_size(),
            InputControl::MultiLine(area) => area.natural_size(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<()> {
        match self {
            InputControl::SingleLine(input) => input.handle_key(key).map(|_| ()),
            InputControl::MultiLine(area) => area.handle_key(key),
        }
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        match self {
            InputControl::SingleLine(input) => input.handle_paste(text),
            InputControl::MultiLine(area) => area.handle_paste(text),
        }
    }

    fn set_focus(&mut self, focused: bool) {
        match self {
            InputControl::SingleLine(input) => input.set_focus(focused),
            InputControl::MultiLine(area) => area.set_focus(focused),
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        match self {
            InputControl::SingleLine(input) => input.render(area, buf),
            InputControl::MultiLine(text) => text.render(area, buf),
        }
    }
}

/// Vertical placement of a row, in content rows.
#[derive(Debug, Clone, Copy)]
struct RowExtent {
    label_y: usize,
    control_y: usize,
    control_height: u16,
}

/// The scrollable form of all fields.
#[derive(Debug, Clone)]
pub struct FormView {
    rows: Vec<FormRow>,
    controls: Vec<InputControl>,
    /// Row index of each control.
    control_rows: Vec<usize>,
    extents: Vec<RowExtent>,
    layout: FormLayout,
    /// Width shared by every input so the copy buttons line up.
    column_width: u16,
    focus: FocusManager,
    scroll: ScrollState,
    zones: ClickZoneRegistry,
}

impl FormView {
    /// Lay out `fields` in document order. Focus starts on the first input.
    pub fn build(fields: &FieldCollection, layout: &FormLayout) -> Self {
        let mut rows = Vec::with_capacity(fields.len());
        let mut controls = Vec::new();
        let mut control_rows = Vec::new();
        let mut extents = Vec::with_capacity(fields.len());
        let mut y = 0;

        for (row_index, field) in fields.iter().enumerate() {
            let control = InputControl::for_field(field, layout);
            let label_y = y;
            y += 1;

            let (id, control_height) = match control {
                Some(control) => {
                    let height = control.natural_size().1;
                    let id = ControlId(controls.len());
                    controls.push(control);
                    control_rows.push(row_index);
                    (Some(id), height)
                }
                None => {
                    tracing::debug!(field = %field.name, code = field.kind.code(), "label only");
                    (None, 0)
                }
            };

            extents.push(RowExtent {
                label_y,
                control_y: y,
                control_height,
            });
            // blank line between fields
            y += control_height as usize + 1;
            rows.push(FormRow {
                field: field.clone(),
                control: id,
            });
        }

        let column_width = controls
            .iter()
            .map(|c| c.natural_size().0)
            .max()
            .unwrap_or(0);
        let visible = layout.form_height.saturating_sub(2) as usize;

        let mut view = Self {
            focus: FocusManager::new(controls.len() * 2),
            rows,
            controls,
            control_rows,
            extents,
            layout: *layout,
            column_width,
            scroll: ScrollState::new(y.saturating_sub(1), visible.max(1)),
            zones: ClickZoneRegistry::new(),
        };
        view.sync_focus();
        tracing::debug!(
            rows = view.rows.len(),
            controls = view.controls.len(),
            "form built"
        );
        view
    }

    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    /// Number of input rows (one per recognized field).
    pub fn input_row_count(&self) -> usize {
        self.controls.len()
    }

    pub fn control(&self, id: ControlId) -> Option<&InputControl> {
        self.controls.get(id.0)
    }

    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut InputControl> {
        self.controls.get_mut(id.0)
    }

    /// The control of the field called `name`.
    pub fn control_for(&self, name: &str) -> Option<ControlId> {
        self.rows
            .iter()
            .find(|r| r.field.name == name)
            .and_then(|r| r.control)
    }

    /// Name of the field a control belongs to.
    pub fn field_name(&self, id: ControlId) -> Option<&str> {
        let row = *self.control_rows.get(id.0)?;
        Some(self.rows[row].field.name.as_str())
    }

    /// Text to copy for a control, read from its live content.
    pub fn copy_text(&self, id: ControlId) -> Option<String> {
        self.control(id).map(InputControl::copy_text)
    }

    /// Focused element, `None` when the form has no inputs.
    pub fn focused(&self) -> Option<FocusTarget> {
        (self.focus.count() > 0).then(|| FocusTarget::from_index(self.focus.current()))
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus.set(target.index());
        self.sync_focus();
        self.ensure_focus_visible();
    }

    pub fn move_focus(&mut self, direction: FocusDirection) {
        self.focus.move_focus(direction);
        self.sync_focus();
        self.ensure_focus_visible();
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Zones registered by the last render.
    pub fn zones(&self) -> &ClickZoneRegistry {
        &self.zones
    }

    /// Width the panel needs to show every row without clipping, border
    /// and scrollbar included.
    pub fn natural_width(&self) -> u16 {
        let labels = self
            .rows
            .iter()
            .map(|row| label_text(&row.field).width() + hint_text(&row.field).width())
            .map(|w| u16::try_from(w).unwrap_or(u16::MAX))
            .max()
            .unwrap_or(0);
        let inputs = if self.controls.is_empty() {
            0
        } else {
            self.column_width + BUTTON_GAP + CopyButton::new().width()
        };
        // border (2) + left padding (1) + scrollbar (1)
        labels.max(inputs).saturating_add(4)
    }

    /// Content rows of all fields.
    pub fn content_height(&self) -> usize {
        self.scroll.total()
    }

    /// Handle a key. `Done(id)` asks the caller to copy control `id`.
    pub fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<ControlId> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::PageUp => {
                self.page_up();
                return ComponentResult::Handled;
            }
            KeyCode::PageDown => {
                self.page_down();
                return ComponentResult::Handled;
            }
            _ => {}
        }

        let Some(target) = self.focused() else {
            return match key.code {
                KeyCode::Up => {
                    Scrollable::scroll_up(self);
                    ComponentResult::Handled
                }
                KeyCode::Down => {
                    Scrollable::scroll_down(self);
                    ComponentResult::Handled
                }
                _ => ComponentResult::NotHandled,
            };
        };

        if let Some(direction) = FocusDirection::from_key(&key) {
            self.move_focus(direction);
            return ComponentResult::Handled;
        }
        if ctrl && key.code == KeyCode::Char('y') {
            return ComponentResult::Done(target.control());
        }

        match target {
            FocusTarget::Input(id) => match self.controls[id.0].handle_key(key) {
                ComponentResult::Handled => {
                    self.ensure_focus_visible();
                    ComponentResult::Handled
                }
                // Enter in a single-line input
                ComponentResult::Done(()) => {
                    self.move_focus(FocusDirection::Forward);
                    ComponentResult::Handled
                }
                ComponentResult::NotHandled | ComponentResult::Cancelled => {
                    self.arrow_focus(key.code)
                }
            },
            FocusTarget::Copy(id) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => ComponentResult::Done(id),
                KeyCode::Left => {
                    self.move_focus(FocusDirection::Backward);
                    ComponentResult::Handled
                }
                KeyCode::Right => {
                    self.move_focus(FocusDirection::Forward);
                    ComponentResult::Handled
                }
                code => self.arrow_focus(code),
            },
        }
    }

    fn arrow_focus(&mut self, code: KeyCode) -> ComponentResult<ControlId> {
        match code {
            KeyCode::Up => self.move_focus(FocusDirection::Backward),
            KeyCode::Down => self.move_focus(FocusDirection::Forward),
            _ => return ComponentResult::NotHandled,
        }
        ComponentResult::Handled
    }

    /// Handle a mouse event against the zones of the last render.
    /// `Done(id)` asks the caller to copy control `id`.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> ComponentResult<ControlId> {
        match event.kind {
            MouseEventKind::ScrollUp => {
                self.scroll.scroll_up(WHEEL_STEP);
                ComponentResult::Handled
            }
            MouseEventKind::ScrollDown => {
                self.scroll.scroll_down(WHEEL_STEP);
                ComponentResult::Handled
            }
            MouseEventKind::Down(MouseButton::Left) => {
                match self.zones.find(event.column, event.row) {
                    Some(target @ FocusTarget::Copy(id)) => {
                        self.focus.set(target.index());
                        self.sync_focus();
                        ComponentResult::Done(id)
                    }
                    Some(target @ FocusTarget::Input(_)) => {
                        self.focus.set(target.index());
                        self.sync_focus();
                        ComponentResult::Handled
                    }
                    None => ComponentResult::NotHandled,
                }
            }
            _ => ComponentResult::NotHandled,
        }
    }

    /// Paste into the focused input. Returns false when no input has focus.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        match self.focused() {
            Some(FocusTarget::Input(id)) => {
                let handled = self.controls[id.0].handle_paste(text);
                self.ensure_focus_visible();
                handled
            }
            _ => false,
        }
    }

    /// Hints for the focused element.
    pub fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.focused() {
            Some(FocusTarget::Input(id)) => {
                let mut hints = vec![("Tab", "Next"), ("Ctrl+Y", "Copy")];
                hints.extend(self.controls[id.0].key_hints());
                hints
            }
            Some(FocusTarget::Copy(_)) => vec![("Enter", "Copy"), ("Tab", "Next")],
            None => vec![("PgUp/PgDn", "Scroll")],
        }
    }

    fn sync_focus(&mut self) {
        let focused = self.focused();
        for (i, control) in self.controls.iter_mut().enumerate() {
            control.set_focus(focused == Some(FocusTarget::Input(ControlId(i))));
        }
    }

    /// Scroll so the focused row's label and control are on screen.
    fn ensure_focus_visible(&mut self) {
        let Some(target) = self.focused() else {
            return;
        };
        let row = self.control_rows[target.control().0];
        let extent = self.extents[row];
        let span = extent.control_y + extent.control_height as usize - extent.label_y;
        self.scroll.ensure_span_visible(extent.label_y, span);
    }

    /// Draw the form into `area` and record click zones.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.zones.clear();

        let border = RoundedBorder::new().focused(self.focused().is_some());
        let inner = border.inner(area);
        border.render(area, buf);
        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let viewport = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
        let scrollbar = Rect::new(inner.right() - 1, inner.y, 1, inner.height);

        self.scroll.set_visible(viewport.height as usize);
        let offset = self.scroll.offset() as isize;

        let button_width = CopyButton::new().width();
        let column = self
            .column_width
            .min(viewport.width.saturating_sub(BUTTON_GAP + button_width))
            .max(1);
        let focused = self.focused();
        let focused_row = focused.map(|t| self.control_rows[t.control().0]);

        for (row_index, row) in self.rows.iter().enumerate() {
            let extent = self.extents[row_index];

            let label_top = extent.label_y as isize - offset;
            if (0..viewport.height as isize).contains(&label_top) {
                let y = viewport.y + label_top as u16;
                let style = if focused_row == Some(row_index) {
                    Theme::label_focused()
                } else {
                    Theme::label()
                };
                let (end, _) = buf.set_stringn(
                    viewport.x,
                    y,
                    label_text(&row.field),
                    viewport.width as usize,
                    style,
                );
                let hint = hint_text(&row.field);
                if !hint.is_empty() {
                    let room = viewport.right().saturating_sub(end) as usize;
                    buf.set_stringn(end, y, hint, room, Theme::muted());
                }
            }

            let Some(id) = row.control else { continue };
            let control = &self.controls[id.0];
            let top = extent.control_y as isize - offset;
            let width = if control.is_multi_line() {
                self.layout.multiline_width.min(column)
            } else {
                column
            };

            let height = extent.control_height;
            let input_rect = draw_clipped(buf, viewport, viewport.x, width, top, height, |area, buf| {
                control.render(area, buf)
            });
            if let Some(rect) = input_rect {
                self.zones.register(FocusTarget::Input(id), rect);
            }

            let button_x = viewport.x + column + BUTTON_GAP;
            let button_focused = focused == Some(FocusTarget::Copy(id));
            let button_rect = draw_clipped(buf, viewport, button_x, button_width, top, 1, |area, buf| {
                CopyButton::new().focused(button_focused).render(area, buf)
            });
            if let Some(rect) = button_rect {
                self.zones.register(FocusTarget::Copy(id), rect);
            }
        }

        render_scrollbar(scrollbar, buf, &self.scroll);
    }
}

impl Scrollable for FormView {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

fn label_text(field: &FieldSpec) -> &str {
    &field.name
}

fn hint_text(field: &FieldSpec) -> String {
    match field.kind {
        FieldKind::Unrecognized(code) => format!("  (unsupported field type {code})"),
        _ => String::new(),
    }
}

/// Draw something `height` rows tall whose top sits `top` rows below the
/// top of `viewport` (negative when scrolled past). Only rows inside the
/// viewport reach `buf`. Returns the visible rectangle.
fn draw_clipped<F>(
    buf: &mut Buffer,
    viewport: Rect,
    x: u16,
    width: u16,
    top: isize,
    height: u16,
    draw: F,
) -> Option<Rect>
where
    F: FnOnce(Rect, &mut Buffer),
{
    let width = width.min(viewport.right().saturating_sub(x));
    if width == 0 || height == 0 {
        return None;
    }
    let first = top.max(0);
    let last = (top + height as isize).min(viewport.height as isize);
    if first >= last {
        return None;
    }
    let visible = Rect::new(x, viewport.y + first as u16, width, (last - first) as u16);

    if top >= 0 && visible.height == height {
        draw(visible, buf);
        return Some(visible);
    }

    let mut scratch = Buffer::empty(Rect::new(0, 0, width, height));
    draw(scratch.area, &mut scratch);
    let skip = (first - top) as u16;
    for dy in 0..visible.height {
        for dx in 0..width {
            if let Some(cell) = buf.cell_mut((x + dx, visible.y + dy)) {
                *cell = scratch[(dx, skip + dy)].clone();
            }
        }
    }
    Some(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn sample() -> FieldCollection {
        FieldCollection::from_fields([
            FieldSpec::single_line("Name", "Alice"),
            FieldSpec::new("Legacy", FieldKind::Unrecognized(3), "ignored"),
            FieldSpec::multi_line("Cover Letter", "  Dear Sir,\nRegards  \n"),
        ])
    }

    fn render(view: &mut FormView, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buf
    }

    fn screen(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_build_creates_controls_for_recognized_fields() {
        let view = FormView::build(&sample(), &FormLayout::default());
        assert_eq!(view.rows().len(), 3);
        assert_eq!(view.input_row_count(), 2);
        assert_eq!(view.rows()[1].control, None);
        assert_eq!(view.control_for("Cover Letter"), Some(ControlId(1)));
        assert_eq!(view.field_name(ControlId(1)), Some("Cover Letter"));
    }

    #[test]
    fn test_controls_start_with_defaults() {
        let view = FormView::build(&sample(), &FormLayout::default());
        let name = view.control(ControlId(0)).unwrap();
        assert_eq!(name.current_text(), "Alice");
        let letter = view.control(ControlId(1)).unwrap();
        assert_eq!(letter.current_text(), "  Dear Sir,\nRegards  \n");
    }

    #[test]
    fn test_copy_text_trims_only_multi_line() {
        let fields = FieldCollection::from_fields([
            FieldSpec::single_line("Padded", "  x  "),
            FieldSpec::multi_line("Letter", "\n  body  \n"),
        ]);
        let view = FormView::build(&fields, &FormLayout::default());
        assert_eq!(view.copy_text(ControlId(0)).as_deref(), Some("  x  "));
        assert_eq!(view.copy_text(ControlId(1)).as_deref(), Some("body"));
    }

    #[test]
    fn test_tab_order_alternates_input_and_copy() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        assert_eq!(view.focused(), Some(FocusTarget::Input(ControlId(0))));

        let mut seen = Vec::new();
        for _ in 0..4 {
            view.handle_key(key(KeyCode::Tab));
            seen.push(view.focused().unwrap());
        }
        assert_eq!(
            seen,
            vec![
                FocusTarget::Copy(ControlId(0)),
                FocusTarget::Input(ControlId(1)),
                FocusTarget::Copy(ControlId(1)),
                FocusTarget::Input(ControlId(0)),
            ]
        );

        view.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(view.focused(), Some(FocusTarget::Copy(ControlId(1))));
    }

    #[test]
    fn test_edit_then_copy_button_reads_live_text() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        view.handle_key(ctrl('u'));
        for c in "Bob".chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
        view.handle_key(key(KeyCode::Tab));

        let result = view.handle_key(key(KeyCode::Enter));
        assert_eq!(result, ComponentResult::Done(ControlId(0)));
        assert_eq!(view.copy_text(ControlId(0)).as_deref(), Some("Bob"));
    }

    #[test]
    fn test_ctrl_y_copies_from_input() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        view.set_focus(FocusTarget::Input(ControlId(1)));
        assert_eq!(view.handle_key(ctrl('y')), ComponentResult::Done(ControlId(1)));
    }

    #[test]
    fn test_enter_in_single_line_moves_to_its_button() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        assert_eq!(view.handle_key(key(KeyCode::Enter)), ComponentResult::Handled);
        assert_eq!(view.focused(), Some(FocusTarget::Copy(ControlId(0))));
    }

    #[test]
    fn test_enter_in_text_area_inserts_newline() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        view.set_focus(FocusTarget::Input(ControlId(1)));
        view.handle_key(key(KeyCode::Enter));
        assert_eq!(view.focused(), Some(FocusTarget::Input(ControlId(1))));
        assert!(view.control(ControlId(1)).unwrap().current_text().starts_with('\n'));
    }

    #[test]
    fn test_arrow_keys_leave_inputs() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.focused(), Some(FocusTarget::Copy(ControlId(0))));
        view.handle_key(key(KeyCode::Down));
        assert_eq!(view.focused(), Some(FocusTarget::Input(ControlId(1))));
        // cursor is on the first line of the text area
        view.handle_key(key(KeyCode::Up));
        assert_eq!(view.focused(), Some(FocusTarget::Copy(ControlId(0))));
    }

    #[test]
    fn test_paste_goes_to_focused_input() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        view.handle_key(key(KeyCode::End));
        assert!(view.handle_paste(" Smith"));
        assert_eq!(view.copy_text(ControlId(0)).as_deref(), Some("Alice Smith"));

        view.handle_key(key(KeyCode::Tab));
        assert!(!view.handle_paste("ignored"));
    }

    #[test]
    fn test_render_shows_labels_inputs_and_buttons() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        let buf = render(&mut view, 60, 20);
        let lines = screen(&buf);

        assert!(lines[1].contains("Name"));
        assert!(lines[2].contains("Alice"));
        assert!(lines[2].contains("[ Copy ]"));
        assert!(lines[4].contains("Legacy  (unsupported field type 3)"));
        assert!(lines[6].contains("Cover Letter"));

        let buttons = lines.iter().filter(|l| l.contains("[ Copy ]")).count();
        assert_eq!(buttons, view.input_row_count());
    }

    #[test]
    fn test_render_registers_click_zones() {
        let mut view = FormView::build(&sample(), &FormLayout::default());
        render(&mut view, 60, 20);

        let button = view.zones().rect_of(FocusTarget::Copy(ControlId(0))).unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: button.x + 1,
            row: button.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(view.handle_mouse(click), ComponentResult::Done(ControlId(0)));
        assert_eq!(view.focused(), Some(FocusTarget::Copy(ControlId(0))));

        let input = view.zones().rect_of(FocusTarget::Input(ControlId(1))).unwrap();
        assert_eq!(input.height, 5);
    }

    #[test]
    fn test_scrolls_to_focused_row() {
        let fields = FieldCollection::from_fields(
            (0..10).map(|i| FieldSpec::single_line(format!("Field {i}"), "v")),
        );
        let layout = FormLayout {
            form_height: 10,
            ..FormLayout::default()
        };
        let mut view = FormView::build(&fields, &layout);
        assert_eq!(view.content_height(), 29);
        render(&mut view, 40, 10);
        assert_eq!(view.scroll().offset(), 0);

        view.set_focus(FocusTarget::Input(ControlId(9)));
        // label of field 9 at row 27, input at 28
        assert!(view.scroll().is_visible(27));
        assert!(view.scroll().is_visible(28));

        let buf = render(&mut view, 40, 10);
        let lines = screen(&buf);
        assert!(lines.iter().any(|l| l.contains("Field 9")));
        assert!(!lines.iter().any(|l| l.contains("Field 0")));
    }

    #[test]
    fn test_partially_visible_text_area_is_clipped() {
        let fields = FieldCollection::from_fields([
            FieldSpec::multi_line("Letter", "one\ntwo\nthree\nfour\nfive"),
            FieldSpec::single_line("After", "x"),
        ]);
        let layout = FormLayout {
            form_height: 6,
            ..FormLayout::default()
        };
        let mut view = FormView::build(&fields, &layout);
        render(&mut view, 60, 6);
        view.scroll_down();
        view.scroll_down();
        let buf = render(&mut view, 60, 6);
        let lines = screen(&buf);

        // offset 2: rows 2..6 of content -> "two".."five"
        assert!(lines[1].contains("two"));
        assert!(lines[4].contains("five"));
        let zone = view.zones().rect_of(FocusTarget::Input(ControlId(0))).unwrap();
        assert_eq!(zone.height, 4);
    }

    #[test]
    fn test_natural_width_covers_widest_row() {
        let fields = FieldCollection::from_fields([
            FieldSpec::single_line("Name", "Alice"),
            FieldSpec::multi_line("Letter", ""),
        ]);
        let view = FormView::build(&fields, &FormLayout::default());
        // text area 40 + gap 2 + button 8 + chrome 4
        assert_eq!(view.natural_width(), 54);
    }

    #[test]
    fn test_natural_width_saturates_for_huge_labels() {
        let fields = FieldCollection::from_fields([FieldSpec::single_line("L".repeat(70_000), "")]);
        let view = FormView::build(&fields, &FormLayout::default());
        assert_eq!(view.natural_width(), u16::MAX);
    }

    #[test]
    fn test_form_without_inputs_scrolls_with_arrows() {
        let fields = FieldCollection::from_fields(
            (0..20).map(|i| FieldSpec::new(format!("F{i}"), FieldKind::Unrecognized(9), "")),
        );
        let layout = FormLayout {
            form_height: 8,
            ..FormLayout::default()
        };
        let mut view = FormView::build(&fields, &layout);
        assert_eq!(view.focused(), None);
        assert_eq!(view.handle_key(key(KeyCode::Down)), ComponentResult::Handled);
        assert_eq!(view.scroll().offset(), 1);
        assert_eq!(view.handle_key(key(KeyCode::Enter)), ComponentResult::NotHandled);
    }
}
