use std::cmp::{max, min};
use std::ops::Range;

/// Default maximum number of characters a command buffer can hold.
pub const DEFAULT_CAPACITY: usize = 2000;

/// Direction for single-character deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Backspace - remove the character before the cursor
    Backward,
    /// Delete - remove the character under the cursor
    Forward,
}

/// Text selection
///
/// Directionless: `anchor` may be greater than `active`. Use [`Selection::range`]
/// for the normalized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start point of selection (anchor) - doesn't move while extending
    pub anchor: usize,
    /// Active point (moves with cursor)
    pub active: usize,
}

impl Selection {
    /// Create a new selection
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Start of selection (minimum position)
    pub fn start(&self) -> usize {
        min(self.anchor, self.active)
    }

    /// End of selection (maximum position, exclusive)
    pub fn end(&self) -> usize {
        max(self.anchor, self.active)
    }

    /// Normalized `[start, end)` range
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

/// Check whether a character may be stored in the buffer.
///
/// Printable ASCII plus newline and tab.
pub fn is_accepted_char(ch: char) -> bool {
    matches!(ch, ' '..='~' | '\n' | '\t')
}

/// Drop every character the buffer does not accept (including `\r`).
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&ch| is_accepted_char(ch)).collect()
}

/// Capacity-bounded command buffer with cursor and selection.
///
/// The content is always ASCII, so byte indices and character indices are the
/// same thing.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    content: String,
    capacity: usize,
    cursor: usize,
    selection: Option<Selection>,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new(capacity: usize) -> Self {
        Self {
            content: String::with_capacity(capacity),
            capacity,
            cursor: 0,
            selection: None,
        }
    }

    /// Create buffer pre-populated with text.
    ///
    /// The text is sanitized and truncated to `capacity`; the cursor is placed
    /// at the end.
    pub fn from_text(text: &str, capacity: usize) -> Self {
        let mut content = sanitize(text);
        content.truncate(capacity);
        let cursor = content.len();
        Self {
            content,
            capacity,
            cursor,
            selection: None,
        }
    }

    /// Full buffer text
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Number of characters in the buffer
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Maximum number of characters
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Characters that can still be inserted
    pub fn remaining(&self) -> usize {
        self.capacity - self.content.len()
    }

    /// Current insertion point
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the insertion point. Does not touch the selection.
    pub fn set_cursor(&mut self, index: usize) {
        self.assert_index(index);
        self.cursor = index;
    }

    /// Active selection, if any
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Normalized range of the active selection
    pub fn selection_range(&self) -> Option<Range<usize>> {
        self.selection.map(|sel| sel.range())
    }

    /// Whether a non-empty selection exists
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// Select `anchor..active` and move the cursor to `active`.
    ///
    /// An empty span (`anchor == active`) clears the selection.
    pub fn set_selection(&mut self, anchor: usize, active: usize) {
        self.assert_index(anchor);
        self.assert_index(active);
        self.selection = if anchor != active {
            Some(Selection::new(anchor, active))
        } else {
            None
        };
        self.cursor = active;
    }

    /// Drop the selection, keeping the cursor where it is
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Select the whole buffer, cursor at the end
    pub fn select_all(&mut self) {
        self.set_selection(0, self.len());
    }

    /// Text covered by the selection
    pub fn selected_text(&self) -> Option<&str> {
        self.selection_range().map(|range| &self.content[range])
    }

    /// Insert text at the cursor, replacing the selection if there is one.
    ///
    /// Characters outside the accepted set are dropped first. When the result
    /// would exceed the capacity nothing changes and `false` is returned.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let text = sanitize(text);
        if text.is_empty() {
            return false;
        }

        let selected = self.selection.map(|sel| sel.len()).unwrap_or(0);
        if self.len() - selected + text.len() > self.capacity {
            return false;
        }

        self.delete_selection();
        self.content.insert_str(self.cursor, &text);
        self.cursor += text.len();
        true
    }

    /// Insert a single character (see [`TextBuffer::insert_text`])
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut tmp = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut tmp))
    }

    /// Remove the selected span; the cursor lands on its start.
    ///
    /// Returns `false` when there was nothing selected.
    pub fn delete_selection(&mut self) -> bool {
        let Some(selection) = self.selection.take() else {
            return false;
        };
        let range = selection.range();
        self.content.replace_range(range.clone(), "");
        self.cursor = range.start;
        true
    }

    /// Backspace / Delete behaviour.
    ///
    /// With a selection this is [`TextBuffer::delete_selection`]. Returns
    /// whether anything was removed.
    pub fn delete_at_cursor(&mut self, direction: Direction) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }

        match direction {
            Direction::Backward if self.cursor > 0 => {
                self.cursor -= 1;
                self.content.remove(self.cursor);
                true
            }
            Direction::Forward if self.cursor < self.len() => {
                self.content.remove(self.cursor);
                true
            }
            _ => false,
        }
    }

    /// Replace the whole content (undo/redo restore).
    ///
    /// Cursor moves to the end, selection is cleared.
    pub fn replace_all(&mut self, text: &str) {
        self.content = sanitize(text);
        self.content.truncate(self.capacity);
        self.cursor = self.content.len();
        self.selection = None;
    }

    fn assert_index(&self, index: usize) {
        assert!(
            index <= self.content.len(),
            "buffer index {} out of range 0..={}",
            index,
            self.content.len()
        );
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
