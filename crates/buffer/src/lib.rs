//! Text buffer for the kort script editor.
//!
//! Provides the capacity-bounded command buffer with its cursor and selection
//! model, snapshot-based undo/redo history, caret navigation math, text
//! measurement and word-wrap layout.

mod cursor;
mod history;
mod measure;
mod text;
mod wrap;

pub use cursor::{
    index_to_line_col, line_bounds_at, line_col_to_index, line_count, line_span, move_caret,
    Motion, END_OF_LINE,
};
pub use history::{UndoHistory, DEFAULT_UNDO_DEPTH};
pub use measure::{CellMeasure, FixedAdvance, TextMeasure};
pub use text::{is_accepted_char, sanitize, Direction, Selection, TextBuffer, DEFAULT_CAPACITY};
pub use wrap::{wrap_words, WrappedText, WrappedWord};
