//! The editor session: one buffer being edited, with its history, scroll
//! state and pointer interaction.
//!
//! The shell feeds one [`FrameInput`] per frame to
//! [`EditorSession::process_frame`] and then calls [`EditorSession::render`].

use kort_buffer::{
    index_to_line_col, line_count, move_caret, Direction, TextBuffer, TextMeasure, UndoHistory,
    DEFAULT_CAPACITY, DEFAULT_UNDO_DEPTH,
};
use kort_clipboard::ClipboardProvider;

use crate::geometry::Rect;
use crate::hit_test::{hit_test, TextLayout};
use crate::keyboard::EditorCommand;
use crate::metrics::EditorMetrics;
use crate::pointer::{PointerEvent, PointerKind};
use crate::render::{
    render_numbered, render_scrollbar, render_wrapped, Canvas, EditorView, Paint,
};
use crate::scroll::ScrollController;

/// Behaviour switches taken from the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Maximum characters in the buffer
    pub capacity: usize,
    /// Snapshots kept per history stack
    pub undo_depth: usize,
    /// Frames the wheel keeps the viewport (0 = until keyboard navigation)
    pub manual_scroll_frames: u32,
    /// Line-numbered layout with caret; otherwise plain word wrap
    pub line_numbers: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            undo_depth: DEFAULT_UNDO_DEPTH,
            manual_scroll_frames: 0,
            line_numbers: true,
        }
    }
}

/// Everything that happened to the editor during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub pointer: Vec<PointerEvent>,
    pub commands: Vec<EditorCommand>,
}

impl FrameInput {
    pub fn is_empty(&self) -> bool {
        self.pointer.is_empty() && self.commands.is_empty()
    }
}

/// Result of processing a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub text_changed: bool,
    pub caret_moved: bool,
    pub needs_redraw: bool,
}

#[derive(Debug)]
pub struct EditorSession {
    buffer: TextBuffer,
    history: UndoHistory,
    scroll: ScrollController,
    metrics: EditorMetrics,
    options: EditorOptions,
    /// Text the session was opened with
    original: String,
    /// Frames processed so far
    frame: u64,
    /// Frame at which the caret blink phase last restarted
    blink_epoch: u64,
    /// Anchor of a mouse selection in progress
    mouse_anchor: Option<usize>,
    /// Follow the caret on the next frame even without input
    follow_pending: bool,
}

impl EditorSession {
    /// Start an empty session
    pub fn new(options: EditorOptions, metrics: EditorMetrics) -> Self {
        Self::open("", options, metrics)
    }

    /// Start a session on existing text; the caret lands at its end.
    pub fn open(text: &str, options: EditorOptions, mut metrics: EditorMetrics) -> Self {
        if !options.line_numbers {
            metrics.gutter_width = 0.0;
        }
        let buffer = TextBuffer::from_text(text, options.capacity);
        let original = buffer.text().to_string();
        Self {
            buffer,
            history: UndoHistory::with_depth(options.undo_depth),
            scroll: ScrollController::new(),
            metrics,
            options,
            original,
            frame: 0,
            blink_epoch: 0,
            mouse_anchor: None,
            follow_pending: true,
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Text differs from what the session was opened with
    pub fn is_dirty(&self) -> bool {
        self.buffer.text() != self.original
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    pub fn metrics(&self) -> &EditorMetrics {
        &self.metrics
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Caret blink phase: visible for `blink_frames`, hidden for as many
    pub fn caret_visible(&self) -> bool {
        let blink = u64::from(self.metrics.blink_frames.max(1));
        ((self.frame - self.blink_epoch) / blink) % 2 == 0
    }

    /// Run one frame: scroll timer, pointer, keyboard, content size, follow.
    pub fn process_frame(
        &mut self,
        input: &FrameInput,
        viewport: Rect,
        clipboard: &mut dyn ClipboardProvider,
        measure: &dyn TextMeasure,
    ) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        self.scroll.tick();

        for event in &input.pointer {
            self.handle_pointer(event, viewport, measure, &mut outcome);
        }

        let mut typing_recorded = false;
        for command in &input.commands {
            self.apply_command(*command, clipboard, &mut typing_recorded, &mut outcome);
        }

        self.update_content_size(viewport, measure);

        if outcome.text_changed || outcome.caret_moved {
            self.blink_epoch = self.frame;
            outcome.needs_redraw = true;
        }
        if outcome.text_changed || outcome.caret_moved || self.follow_pending {
            self.follow_pending = false;
            self.follow_caret();
        }

        self.frame += 1;
        outcome
    }

    /// Draw the editor into `viewport`.
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        measure: &dyn TextMeasure,
        viewport: Rect,
        focused: bool,
    ) {
        if self.options.line_numbers {
            let view = EditorView {
                text: self.buffer.text(),
                cursor: self.buffer.cursor(),
                selection: self.buffer.selection_range(),
                scroll_y: self.scroll.offset(),
                show_caret: focused && self.caret_visible(),
            };
            render_numbered(canvas, measure, &self.metrics, viewport, &view);
        } else {
            canvas.fill_rect(viewport, Paint::Background);
            render_wrapped(
                canvas,
                measure,
                self.wrap_area(viewport),
                self.buffer.text(),
                self.scroll.offset(),
                self.metrics.line_height,
                self.metrics.tab_width,
            );
        }
        render_scrollbar(
            canvas,
            &self.scroll,
            self.metrics.scrollbar_track(&viewport),
            self.metrics.min_thumb,
        );
    }

    fn wrap_area(&self, viewport: Rect) -> Rect {
        let left = self.metrics.text_left(&viewport);
        Rect::new(
            left,
            viewport.y,
            self.metrics.text_width(&viewport),
            viewport.height,
        )
    }

    fn text_layout(&self, viewport: Rect) -> TextLayout {
        TextLayout {
            viewport,
            text_left: self.metrics.text_left(&viewport),
            line_height: self.metrics.line_height,
        }
    }

    fn hit(&self, viewport: Rect, measure: &dyn TextMeasure, x: f32, y: f32) -> usize {
        hit_test(
            self.buffer.text(),
            &self.text_layout(viewport),
            measure,
            x,
            y,
            self.scroll.offset(),
        )
    }

    fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        viewport: Rect,
        measure: &dyn TextMeasure,
        outcome: &mut FrameOutcome,
    ) {
        let track = self.metrics.scrollbar_track(&viewport);
        let min_thumb = self.metrics.min_thumb;

        match event.kind {
            PointerKind::Wheel(notches) => {
                if viewport.contains(event.x, event.y) {
                    self.scroll.wheel(
                        notches,
                        self.metrics.wheel_step,
                        self.options.manual_scroll_frames,
                    );
                    outcome.needs_redraw = true;
                }
            }
            PointerKind::Press => {
                if track.contains(event.x, event.y)
                    && self.scroll.begin_drag(&track, min_thumb, event.y)
                {
                    outcome.needs_redraw = true;
                    return;
                }
                if !self.options.line_numbers || !viewport.contains(event.x, event.y) {
                    return;
                }

                let index = self.hit(viewport, measure, event.x, event.y);
                if event.shift {
                    let anchor = self
                        .buffer
                        .selection()
                        .map(|sel| sel.anchor)
                        .unwrap_or(self.buffer.cursor());
                    self.buffer.set_selection(anchor, index);
                    self.mouse_anchor = Some(anchor);
                } else {
                    self.buffer.clear_selection();
                    self.buffer.set_cursor(index);
                    self.mouse_anchor = Some(index);
                }
                outcome.caret_moved = true;
            }
            PointerKind::Drag => {
                if self.scroll.is_dragging() {
                    self.scroll.drag_to(&track, min_thumb, event.y);
                    outcome.needs_redraw = true;
                } else if let Some(anchor) = self.mouse_anchor {
                    let index = self.hit(viewport, measure, event.x, event.y);
                    self.buffer.set_selection(anchor, index);
                    outcome.caret_moved = true;
                }
            }
            PointerKind::Release => {
                self.scroll.end_drag();
                self.mouse_anchor = None;
            }
        }
    }

    fn apply_command(
        &mut self,
        command: EditorCommand,
        clipboard: &mut dyn ClipboardProvider,
        typing_recorded: &mut bool,
        outcome: &mut FrameOutcome,
    ) {
        match command {
            EditorCommand::Move(motion) | EditorCommand::Select(motion) => {
                move_caret(
                    &mut self.buffer,
                    motion,
                    matches!(command, EditorCommand::Select(_)),
                );
                self.scroll.resume_follow();
                outcome.caret_moved = true;
            }
            EditorCommand::InsertChar(ch) => {
                self.type_edit(|buffer| buffer.insert_char(ch), typing_recorded, outcome)
            }
            EditorCommand::InsertNewline => {
                self.type_edit(|buffer| buffer.insert_char('\n'), typing_recorded, outcome)
            }
            EditorCommand::Backspace => self.type_edit(
                |buffer| buffer.delete_at_cursor(Direction::Backward),
                typing_recorded,
                outcome,
            ),
            EditorCommand::Delete => self.type_edit(
                |buffer| buffer.delete_at_cursor(Direction::Forward),
                typing_recorded,
                outcome,
            ),
            EditorCommand::SelectAll => {
                self.buffer.select_all();
                outcome.caret_moved = true;
            }
            EditorCommand::Copy => {
                if let Some(text) = self.buffer.selected_text() {
                    if let Err(e) = clipboard.set_text(text) {
                        log::warn!("Copy failed: {}", e);
                    }
                }
            }
            EditorCommand::Cut => {
                let Some(text) = self.buffer.selected_text().map(str::to_string) else {
                    return;
                };
                if let Err(e) = clipboard.set_text(&text) {
                    log::warn!("Cut failed, text kept: {}", e);
                    return;
                }
                let before = self.buffer.text().to_string();
                if self.buffer.delete_selection() {
                    self.history.push_snapshot(before);
                    self.after_discrete_edit(typing_recorded, outcome);
                }
            }
            EditorCommand::Paste => {
                let Some(text) = clipboard.get_text() else {
                    return;
                };
                let before = self.buffer.text().to_string();
                if self.buffer.insert_text(&text) {
                    self.history.push_snapshot(before);
                    self.after_discrete_edit(typing_recorded, outcome);
                } else {
                    log::debug!("Paste of {} chars rejected", text.len());
                }
            }
            EditorCommand::Undo => {
                if self.history.undo(&mut self.buffer) {
                    self.after_discrete_edit(typing_recorded, outcome);
                }
            }
            EditorCommand::Redo => {
                if self.history.redo(&mut self.buffer) {
                    self.after_discrete_edit(typing_recorded, outcome);
                }
            }
            EditorCommand::None => {}
        }
    }

    /// Typing, Enter and deletions share one undo snapshot per frame.
    fn type_edit(
        &mut self,
        edit: impl FnOnce(&mut TextBuffer) -> bool,
        typing_recorded: &mut bool,
        outcome: &mut FrameOutcome,
    ) {
        let before = (!*typing_recorded).then(|| self.buffer.text().to_string());
        if !edit(&mut self.buffer) {
            return;
        }
        if let Some(before) = before {
            self.history.push_snapshot(before);
            *typing_recorded = true;
        }
        self.scroll.resume_follow();
        outcome.text_changed = true;
    }

    fn after_discrete_edit(&mut self, typing_recorded: &mut bool, outcome: &mut FrameOutcome) {
        *typing_recorded = false;
        self.scroll.resume_follow();
        outcome.text_changed = true;
    }

    fn update_content_size(&mut self, viewport: Rect, measure: &dyn TextMeasure) {
        let line_height = self.metrics.line_height;
        if self.options.line_numbers {
            let lines = line_count(self.buffer.text());
            self.scroll.set_content(lines, line_height, viewport.height);
        } else {
            let height = kort_buffer::wrap_words(
                self.buffer.text(),
                self.metrics.text_width(&viewport),
                self.metrics.tab_width,
                measure,
            )
            .height(line_height);
            self.scroll.set_content_height(height, viewport.height);
        }
    }

    fn follow_caret(&mut self) {
        // Wrapped layout has no caret line to follow
        if !self.options.line_numbers {
            return;
        }
        let (line, _) = index_to_line_col(self.buffer.text(), self.buffer.cursor());
        self.scroll.follow_caret(
            line,
            self.metrics.line_height,
            self.metrics.top_margin,
            self.metrics.bottom_margin,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingCanvas;
    use crate::scroll::ScrollMode;
    use kort_buffer::{CellMeasure, Motion};
    use kort_clipboard::MemoryClipboard;

    /// Clipboard that refuses every write
    struct FailingClipboard;

    impl ClipboardProvider for FailingClipboard {
        fn get_text(&mut self) -> Option<String> {
            None
        }

        fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
            anyhow::bail!("clipboard offline")
        }
    }

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 40.0, 10.0);

    struct Harness {
        session: EditorSession,
        clipboard: MemoryClipboard,
    }

    impl Harness {
        fn new(text: &str) -> Self {
            Self::with_options(text, EditorOptions::default())
        }

        fn with_options(text: &str, options: EditorOptions) -> Self {
            Self {
                session: EditorSession::open(text, options, EditorMetrics::terminal()),
                clipboard: MemoryClipboard::new(),
            }
        }

        fn frame(&mut self, commands: &[EditorCommand], pointer: &[PointerEvent]) -> FrameOutcome {
            let input = FrameInput {
                pointer: pointer.to_vec(),
                commands: commands.to_vec(),
            };
            self.session
                .process_frame(&input, VIEWPORT, &mut self.clipboard, &CellMeasure)
        }

        fn keys(&mut self, commands: &[EditorCommand]) -> FrameOutcome {
            self.frame(commands, &[])
        }

        fn type_str(&mut self, text: &str) {
            for ch in text.chars() {
                self.keys(&[EditorCommand::InsertChar(ch)]);
            }
        }
    }

    fn numbered_lines(count: usize) -> String {
        vec!["x"; count].join("\n")
    }

    #[test]
    fn test_typing_then_backspace() {
        let mut h = Harness::new("");
        h.type_str("ls -la");
        for _ in 0..3 {
            h.keys(&[EditorCommand::Backspace]);
        }
        assert_eq!(h.session.text(), "ls ");
        assert_eq!(h.session.buffer().cursor(), 3);
    }

    #[test]
    fn test_select_all_then_cut() {
        let text = "echo 0123456789 done";
        assert_eq!(text.len(), 20);
        let mut h = Harness::new(text);

        h.keys(&[EditorCommand::SelectAll]);
        assert_eq!(h.session.buffer().selection_range(), Some(0..20));

        h.keys(&[EditorCommand::Cut]);
        assert_eq!(h.session.text(), "");
        assert_eq!(h.clipboard.text(), Some(text));

        h.keys(&[EditorCommand::Undo]);
        assert_eq!(h.session.text(), text);
    }

    #[test]
    fn test_copy_and_cut_without_selection_do_nothing() {
        let mut h = Harness::new("echo hi");
        let outcome = h.keys(&[EditorCommand::Copy, EditorCommand::Cut]);
        assert!(!outcome.text_changed);
        assert_eq!(h.clipboard.text(), None);
        assert!(!h.session.history().can_undo());
    }

    #[test]
    fn test_failed_clipboard_write_keeps_text() {
        let mut session =
            EditorSession::open("rm -rf build", EditorOptions::default(), EditorMetrics::terminal());
        let input = FrameInput {
            pointer: vec![],
            commands: vec![EditorCommand::SelectAll, EditorCommand::Cut],
        };
        session.process_frame(&input, VIEWPORT, &mut FailingClipboard, &CellMeasure);
        assert_eq!(session.text(), "rm -rf build");
    }

    #[test]
    fn test_paste_past_capacity_inserts_nothing() {
        let options = EditorOptions {
            capacity: 10,
            ..EditorOptions::default()
        };
        let mut h = Harness::with_options("echo ", options);
        h.clipboard = MemoryClipboard::with_text("hello world");

        let outcome = h.keys(&[EditorCommand::Paste]);
        assert!(!outcome.text_changed);
        assert_eq!(h.session.text(), "echo ");
        assert!(!h.session.history().can_undo());

        h.clipboard = MemoryClipboard::with_text("hi\r\n");
        h.keys(&[EditorCommand::Paste]);
        assert_eq!(h.session.text(), "echo hi\n");
    }

    #[test]
    fn test_paste_with_empty_clipboard_is_noop() {
        let mut h = Harness::new("ls");
        assert!(!h.keys(&[EditorCommand::Paste]).text_changed);
    }

    #[test]
    fn test_typing_in_one_frame_is_one_undo_step() {
        let mut h = Harness::new("");
        h.keys(&[
            EditorCommand::InsertChar('l'),
            EditorCommand::InsertChar('s'),
            EditorCommand::InsertNewline,
        ]);
        assert_eq!(h.session.history().undo_len(), 1);

        h.keys(&[EditorCommand::InsertChar('p')]);
        h.keys(&[EditorCommand::InsertChar('w')]);
        assert_eq!(h.session.history().undo_len(), 3);

        h.keys(&[EditorCommand::Undo]);
        assert_eq!(h.session.text(), "ls\np");
        h.keys(&[EditorCommand::Undo, EditorCommand::Undo]);
        assert_eq!(h.session.text(), "");
        h.keys(&[EditorCommand::Redo]);
        assert_eq!(h.session.text(), "ls\n");
    }

    #[test]
    fn test_noop_edits_record_nothing() {
        let mut h = Harness::new("");
        h.keys(&[EditorCommand::Backspace, EditorCommand::Delete]);
        assert!(!h.session.history().can_undo());
    }

    #[test]
    fn test_paste_is_recorded_separately_from_typing() {
        let mut h = Harness::new("");
        h.clipboard = MemoryClipboard::with_text("pwd");
        h.keys(&[
            EditorCommand::InsertChar('a'),
            EditorCommand::Paste,
            EditorCommand::InsertChar('b'),
        ]);
        assert_eq!(h.session.text(), "apwdb");
        assert_eq!(h.session.history().undo_len(), 3);
    }

    #[test]
    fn test_dirty_flag_tracks_original_text() {
        let mut h = Harness::new("echo hi");
        assert!(!h.session.is_dirty());
        h.type_str("!");
        assert!(h.session.is_dirty());
        h.keys(&[EditorCommand::Backspace]);
        assert!(!h.session.is_dirty());
    }

    #[test]
    fn test_shift_motion_selects() {
        let mut h = Harness::new("echo hi");
        h.keys(&[
            EditorCommand::Move(Motion::LineStart),
            EditorCommand::Select(Motion::Right),
            EditorCommand::Select(Motion::Right),
        ]);
        assert_eq!(h.session.buffer().selected_text(), Some("ec"));

        h.keys(&[EditorCommand::InsertChar('E')]);
        assert_eq!(h.session.text(), "Eho hi");
    }

    #[test]
    fn test_open_follows_caret_at_end() {
        let mut h = Harness::new(&numbered_lines(100));
        h.keys(&[]);
        assert_eq!(h.session.scroll().offset(), 90.0);
    }

    #[test]
    fn test_wheel_keeps_user_offset_until_arrow_key() {
        let mut h = Harness::new(&numbered_lines(100));
        let mut to_line_50 = vec![EditorCommand::Move(Motion::DocumentStart)];
        to_line_50.extend(std::iter::repeat(EditorCommand::Move(Motion::Down)).take(50));
        h.keys(&to_line_50);
        assert_eq!(h.session.scroll().offset(), 41.0);

        let wheel = vec![PointerEvent::new(PointerKind::Wheel(-1.0), 5.0, 5.0); 10];
        h.frame(&[], &wheel);
        assert_eq!(h.session.scroll().offset(), 71.0);
        assert_eq!(h.session.scroll().mode(), ScrollMode::ManualIndefinite);

        // Nothing happens: the viewport stays where the user left it
        h.keys(&[]);
        h.keys(&[]);
        assert_eq!(h.session.scroll().offset(), 71.0);

        // Arrow key: back to following, re-centered on the caret line
        h.keys(&[EditorCommand::Move(Motion::Right)]);
        assert_eq!(h.session.scroll().mode(), ScrollMode::Auto);
        assert_eq!(h.session.scroll().offset(), 45.5);
    }

    #[test]
    fn test_wheel_outside_viewport_is_ignored() {
        let mut h = Harness::new(&numbered_lines(100));
        h.keys(&[]);
        h.frame(&[], &[PointerEvent::new(PointerKind::Wheel(1.0), 50.0, 5.0)]);
        assert_eq!(h.session.scroll().offset(), 90.0);
        assert_eq!(h.session.scroll().mode(), ScrollMode::Auto);
    }

    #[test]
    fn test_timed_manual_scroll_returns_to_auto() {
        let options = EditorOptions {
            manual_scroll_frames: 3,
            ..EditorOptions::default()
        };
        let mut h = Harness::with_options(&numbered_lines(100), options);
        h.keys(&[]);
        h.frame(&[], &[PointerEvent::new(PointerKind::Wheel(1.0), 5.0, 5.0)]);
        assert_eq!(h.session.scroll().mode(), ScrollMode::ManualUntil(3));
        for _ in 0..3 {
            h.keys(&[]);
        }
        assert_eq!(h.session.scroll().mode(), ScrollMode::Auto);
    }

    #[test]
    fn test_click_places_caret() {
        let mut h = Harness::new("echo hi\necho bye");
        // Text starts at column 6 (gutter 5 + padding 1)
        let outcome = h.frame(&[], &[PointerEvent::new(PointerKind::Press, 8.0, 1.0)]);
        assert!(outcome.caret_moved);
        assert_eq!(h.session.buffer().cursor(), 10);
        assert!(!h.session.buffer().has_selection());
    }

    #[test]
    fn test_drag_and_shift_click_select() {
        let mut h = Harness::new("echo hi\necho bye");
        h.frame(
            &[],
            &[
                PointerEvent::new(PointerKind::Press, 6.0, 0.0),
                PointerEvent::new(PointerKind::Drag, 10.0, 0.0),
                PointerEvent::new(PointerKind::Release, 10.0, 0.0),
            ],
        );
        assert_eq!(h.session.buffer().selected_text(), Some("echo"));

        let mut shift_click = PointerEvent::new(PointerKind::Press, 9.0, 1.0);
        shift_click.shift = true;
        h.frame(&[], &[shift_click]);
        assert_eq!(h.session.buffer().selection_range(), Some(0..11));

        // Dragging after release does not select
        h.frame(&[], &[PointerEvent::new(PointerKind::Release, 9.0, 1.0)]);
        h.frame(&[], &[PointerEvent::new(PointerKind::Drag, 6.0, 0.0)]);
        assert_eq!(h.session.buffer().selection_range(), Some(0..11));
    }

    #[test]
    fn test_scrollbar_drag_scrolls_without_moving_caret() {
        let mut h = Harness::new(&numbered_lines(100));
        h.keys(&[EditorCommand::Move(Motion::DocumentStart)]);
        let cursor = h.session.buffer().cursor();

        // Track is the last column; the thumb (1 row) sits at the top
        h.frame(
            &[],
            &[
                PointerEvent::new(PointerKind::Press, 39.0, 0.0),
                PointerEvent::new(PointerKind::Drag, 39.0, 4.5),
            ],
        );
        assert_eq!(h.session.scroll().offset(), 45.0);
        assert_eq!(h.session.buffer().cursor(), cursor);

        h.frame(&[], &[PointerEvent::new(PointerKind::Release, 39.0, 4.5)]);
        assert!(!h.session.scroll().is_dragging());
        assert_eq!(h.session.scroll().offset(), 45.0);
    }

    #[test]
    fn test_caret_blink_restarts_on_edit() {
        let mut h = Harness::new("");
        for _ in 0..20 {
            h.keys(&[]);
        }
        assert!(!h.session.caret_visible());

        h.keys(&[EditorCommand::InsertChar('a')]);
        assert!(h.session.caret_visible());
    }

    #[test]
    fn test_render_draws_caret_only_when_focused() {
        let mut h = Harness::new("ls");
        h.keys(&[]);

        let mut canvas = RecordingCanvas::new();
        h.session.render(&mut canvas, &CellMeasure, VIEWPORT, true);
        assert_eq!(canvas.fills(Paint::Caret).len(), 1);
        assert_eq!(canvas.texts(Paint::Text)[0].2, "ls");

        let mut canvas = RecordingCanvas::new();
        h.session.render(&mut canvas, &CellMeasure, VIEWPORT, false);
        assert!(canvas.fills(Paint::Caret).is_empty());
    }

    #[test]
    fn test_plain_layout_wraps_without_caret() {
        let options = EditorOptions {
            line_numbers: false,
            ..EditorOptions::default()
        };
        let mut h = Harness::with_options("echo hello world", options);
        h.keys(&[]);

        let narrow = Rect::new(0.0, 0.0, 12.0, 10.0);
        let mut canvas = RecordingCanvas::new();
        h.session.render(&mut canvas, &CellMeasure, narrow, true);

        let words: Vec<_> = canvas.texts(Paint::Text);
        assert_eq!(words[0], (1.0, 0.0, "echo"));
        assert_eq!(words[2].1, 1.0);
        assert!(canvas.fills(Paint::Caret).is_empty());
        assert!(canvas.texts(Paint::LineNumber).is_empty());
    }
}
