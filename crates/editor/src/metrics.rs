//! Editor layout metrics.

use crate::geometry::Rect;

/// Sizes and timings that drive layout, scrolling and the caret blink.
///
/// All lengths are in the same units as the viewport rectangle and the
/// [`TextMeasure`](kort_buffer::TextMeasure) implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorMetrics {
    /// Height of one text line
    pub line_height: f32,
    /// Width of the line number gutter (0 hides it)
    pub gutter_width: f32,
    /// Gap between the gutter and the text
    pub text_padding: f32,
    /// Width of the caret bar
    pub caret_width: f32,
    /// Space kept above the caret when following it
    pub top_margin: f32,
    /// Space kept below the caret when following it
    pub bottom_margin: f32,
    /// Offset change per wheel notch
    pub wheel_step: f32,
    /// Width of the scrollbar track at the right edge
    pub scrollbar_width: f32,
    /// Minimum scrollbar thumb height
    pub min_thumb: f32,
    /// Frames per caret blink phase
    pub blink_frames: u32,
    /// Tab width in spaces
    pub tab_width: usize,
}

impl EditorMetrics {
    /// Metrics for a character-cell terminal (1 unit = 1 cell).
    pub fn terminal() -> Self {
        Self {
            line_height: 1.0,
            gutter_width: 5.0,
            text_padding: 1.0,
            caret_width: 1.0,
            top_margin: 0.0,
            bottom_margin: 0.0,
            wheel_step: 3.0,
            scrollbar_width: 1.0,
            min_thumb: 1.0,
            blink_frames: 20,
            tab_width: 4,
        }
    }

    /// Left edge of the text column inside `viewport`
    pub fn text_left(&self, viewport: &Rect) -> f32 {
        viewport.x + self.gutter_width + self.text_padding
    }

    /// Width available to text inside `viewport`
    pub fn text_width(&self, viewport: &Rect) -> f32 {
        (viewport.right() - self.scrollbar_width - self.text_left(viewport)).max(0.0)
    }

    /// Scrollbar track inside `viewport`
    pub fn scrollbar_track(&self, viewport: &Rect) -> Rect {
        Rect::new(
            viewport.right() - self.scrollbar_width,
            viewport.y,
            self.scrollbar_width,
            viewport.height,
        )
    }

    /// Gutter column inside `viewport`
    pub fn gutter(&self, viewport: &Rect) -> Rect {
        Rect::new(viewport.x, viewport.y, self.gutter_width, viewport.height)
    }
}

impl Default for EditorMetrics {
    fn default() -> Self {
        Self::terminal()
    }
}
