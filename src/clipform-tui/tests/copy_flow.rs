//! End-to-end: field document in, clipboard contents out.

use std::cell::RefCell;
use std::rc::Rc;

use clipform_fields::parse_str;
use clipform_tui::event_loop;
use clipform_tui::{
    AppContext, FocusTarget, FormLayout, FormView, MemoryClipboard, ScriptedEvents,
};
use crossterm::event::{Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

const DOCUMENT: &str = r#"{
    "Name": {"type": 1, "value": "Alice"},
    "Cover Letter": {"type": 2, "value": "  Dear Sir,\n  "},
    "Photo": {"type": 3, "value": "ignored"}
}"#;

struct Harness {
    terminal: Terminal<TestBackend>,
    ctx: AppContext,
    clipboard: Rc<RefCell<MemoryClipboard>>,
}

impl Harness {
    fn new(json: &str) -> Self {
        let fields = parse_str(json, "data.json").unwrap();
        let clipboard = Rc::new(RefCell::new(MemoryClipboard::new()));
        let ctx = AppContext::new(
            "Clipform",
            "data.json",
            FormView::build(&fields, &FormLayout::default()),
            Box::new(clipboard.clone()),
        );
        Self {
            terminal: Terminal::new(TestBackend::new(80, 30)).unwrap(),
            ctx,
            clipboard,
        }
    }

    fn run(&mut self, events: &mut ScriptedEvents) {
        events.ctrl('q');
        event_loop::run(&mut self.terminal, events, &mut self.ctx).unwrap();
    }

    fn copied(&self) -> Option<String> {
        self.clipboard.borrow().contents().map(str::to_string)
    }

    fn screen(&self) -> Vec<String> {
        let buf = self.terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }
}

#[test]
fn edited_single_line_value_is_copied() {
    let mut harness = Harness::new(DOCUMENT);
    let mut events = ScriptedEvents::default();
    events.ctrl('u').text("Bob").ctrl('y');
    harness.run(&mut events);

    assert_eq!(harness.copied().as_deref(), Some("Bob"));
}

#[test]
fn default_value_is_copied_untouched() {
    let mut harness = Harness::new(DOCUMENT);
    let mut events = ScriptedEvents::default();
    // Name input -> Name copy button
    events.key(KeyCode::Tab).key(KeyCode::Enter);
    harness.run(&mut events);

    assert_eq!(harness.copied().as_deref(), Some("Alice"));
}

#[test]
fn multi_line_value_is_trimmed() {
    let mut harness = Harness::new(DOCUMENT);
    let mut events = ScriptedEvents::default();
    // Name input, Name copy, Cover Letter input, Cover Letter copy
    events
        .key(KeyCode::Tab)
        .key(KeyCode::Tab)
        .key(KeyCode::Tab)
        .key(KeyCode::Char(' '));
    harness.run(&mut events);

    assert_eq!(harness.copied().as_deref(), Some("Dear Sir,"));
}

#[test]
fn unsupported_field_shows_label_only() {
    let mut harness = Harness::new(DOCUMENT);
    harness.run(&mut ScriptedEvents::default());

    let screen = harness.screen();
    let photo = screen
        .iter()
        .position(|line| line.contains("Photo"))
        .expect("Photo label rendered");
    assert!(!screen[photo].contains("Copy"));
    assert!(!screen[photo + 1].contains("Copy"));

    let buttons = screen.iter().filter(|line| line.contains("[ Copy ]")).count();
    assert_eq!(buttons, harness.ctx.form.input_row_count());
    assert_eq!(harness.ctx.form.input_row_count(), 2);
    assert_eq!(harness.ctx.form.rows().len(), 3);
}

#[test]
fn clicking_copy_button_copies() {
    let mut harness = Harness::new(DOCUMENT);
    let id = harness.ctx.form.control_for("Name").unwrap();

    let area = Rect::new(0, 0, 80, 30);
    let mut buf = Buffer::empty(area);
    harness.ctx.render(area, &mut buf);
    let button = harness
        .ctx
        .form
        .zones()
        .rect_of(FocusTarget::Copy(id))
        .unwrap();

    let mut events = ScriptedEvents::default();
    events.push(Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: button.x + 1,
        row: button.y,
        modifiers: KeyModifiers::NONE,
    }));
    harness.run(&mut events);

    assert_eq!(harness.copied().as_deref(), Some("Alice"));
    assert_eq!(harness.ctx.form.focused(), Some(FocusTarget::Copy(id)));
}

#[test]
fn empty_document_still_runs() {
    let mut harness = Harness::new("{}");
    harness.run(&mut ScriptedEvents::default());

    assert_eq!(harness.ctx.form.input_row_count(), 0);
    assert_eq!(harness.copied(), None);
}
