//! Caret navigation over buffer text.
//!
//! Line and column are never stored; they are derived from the cursor index by
//! scanning for `\n` boundaries.

use std::ops::Range;

use super::TextBuffer;

/// Column sentinel meaning "end of the line".
pub const END_OF_LINE: usize = usize::MAX;

/// Keyboard caret motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    /// Home
    LineStart,
    /// End
    LineEnd,
    /// Ctrl+Home
    DocumentStart,
    /// Ctrl+End
    DocumentEnd,
}

/// Convert a buffer index into `(line, column)`.
pub fn index_to_line_col(text: &str, index: usize) -> (usize, usize) {
    let index = index.min(text.len());
    let before = &text.as_bytes()[..index];
    let line = before.iter().filter(|&&b| b == b'\n').count();
    let col = match before.iter().rposition(|&b| b == b'\n') {
        Some(newline) => index - newline - 1,
        None => index,
    };
    (line, col)
}

/// Convert `(line, column)` into a buffer index.
///
/// A column past the end of the line resolves to the line end; a line past the
/// last line resolves to the end of the text.
pub fn line_col_to_index(text: &str, line: usize, col: usize) -> usize {
    if line >= line_count(text) {
        return text.len();
    }
    let span = line_span(text, line);
    span.start + col.min(span.len())
}

/// Number of lines (an empty text has one line).
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Index range of `line`, excluding its newline.
///
/// Lines past the end yield an empty range at the end of the text.
pub fn line_span(text: &str, line: usize) -> Range<usize> {
    let mut start = 0;
    for _ in 0..line {
        match text[start..].find('\n') {
            Some(offset) => start += offset + 1,
            None => return text.len()..text.len(),
        }
    }
    let end = text[start..]
        .find('\n')
        .map(|offset| start + offset)
        .unwrap_or(text.len());
    start..end
}

/// Index range of the line containing `index`, excluding its newline.
pub fn line_bounds_at(text: &str, index: usize) -> Range<usize> {
    let index = index.min(text.len());
    let start = text[..index].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[index..]
        .find('\n')
        .map(|offset| index + offset)
        .unwrap_or(text.len());
    start..end
}

/// Apply a keyboard motion to the buffer's cursor.
///
/// With `extend` the selection grows from an anchor fixed at the first
/// extension. Without it, Left/Right collapse an existing selection onto its
/// near edge instead of moving, and every other motion drops the selection.
pub fn move_caret(buffer: &mut TextBuffer, motion: Motion, extend: bool) {
    let origin = buffer.cursor();

    if !extend {
        if let Some(range) = buffer.selection_range() {
            buffer.clear_selection();
            match motion {
                Motion::Left => {
                    buffer.set_cursor(range.start);
                    return;
                }
                Motion::Right => {
                    buffer.set_cursor(range.end);
                    return;
                }
                _ => {}
            }
        }
    }

    let target = motion_target(buffer.text(), origin, motion);

    if extend {
        let anchor = buffer.selection().map(|sel| sel.anchor).unwrap_or(origin);
        buffer.set_selection(anchor, target);
    } else {
        buffer.set_cursor(target);
    }
}

fn motion_target(text: &str, cursor: usize, motion: Motion) -> usize {
    match motion {
        Motion::Left => cursor.saturating_sub(1),
        Motion::Right => (cursor + 1).min(text.len()),
        Motion::Up => {
            let (line, col) = index_to_line_col(text, cursor);
            if line == 0 {
                0
            } else {
                line_col_to_index(text, line - 1, col)
            }
        }
        Motion::Down => {
            let (line, col) = index_to_line_col(text, cursor);
            line_col_to_index(text, line + 1, col)
        }
        Motion::LineStart => line_bounds_at(text, cursor).start,
        Motion::LineEnd => {
            let (line, _) = index_to_line_col(text, cursor);
            line_col_to_index(text, line, END_OF_LINE)
        }
        Motion::DocumentStart => 0,
        Motion::DocumentEnd => text.len(),
    }
}
