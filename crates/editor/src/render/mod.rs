//! Editor drawing.
//!
//! Renderers draw through the [`Canvas`] trait with semantic [`Paint`] roles;
//! the backend decides what a role looks like. [`TerminalCanvas`] draws into a
//! ratatui buffer.

mod lines;
mod scrollbar;
mod terminal;
mod wrapped;

#[cfg(test)]
pub(crate) mod recording;

pub use lines::{render_numbered, EditorView};
pub use scrollbar::render_scrollbar;
pub use terminal::TerminalCanvas;
pub use wrapped::render_wrapped;

use crate::geometry::Rect;

/// Semantic role of a drawing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Editor background
    Background,
    /// Line number column background
    Gutter,
    LineNumber,
    Text,
    /// Selection band behind selected text
    Selection,
    Caret,
    ScrollbarTrack,
    ScrollbarThumb,
}

/// Drawing surface.
///
/// Clips nest: a pushed clip is intersected with the current one, and nothing
/// outside the effective clip may be touched.
pub trait Canvas {
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    fn fill_rect(&mut self, rect: Rect, paint: Paint);
    /// Draw a single line of text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: f32, y: f32, text: &str, paint: Paint);
}
