//! Line-numbered rendering.
//!
//! Lines are split at `\n` only; anything wider than the viewport is clipped.

use std::ops::Range;

use kort_buffer::TextMeasure;

use super::{Canvas, Paint};
use crate::geometry::Rect;
use crate::metrics::EditorMetrics;

/// Snapshot of what the line renderer needs from the session
#[derive(Debug, Clone)]
pub struct EditorView<'a> {
    pub text: &'a str,
    pub cursor: usize,
    /// Normalized selection range
    pub selection: Option<Range<usize>>,
    pub scroll_y: f32,
    /// Whether the caret is drawn this frame (focus and blink phase)
    pub show_caret: bool,
}

/// Draw the text with a line number gutter, selection bands and the caret.
pub fn render_numbered(
    canvas: &mut dyn Canvas,
    measure: &dyn TextMeasure,
    metrics: &EditorMetrics,
    viewport: Rect,
    view: &EditorView,
) {
    let lh = metrics.line_height;
    let text_left = metrics.text_left(&viewport);
    let space_width = measure.measure_width(" ");

    canvas.fill_rect(viewport, Paint::Background);
    canvas.push_clip(viewport);
    if metrics.gutter_width > 0.0 {
        canvas.fill_rect(metrics.gutter(&viewport), Paint::Gutter);
    }

    let first_visible = (view.scroll_y / lh).floor().max(0.0) as usize;
    let visible_count = (viewport.height / lh).ceil() as usize + 1;

    let mut start = 0;
    for (line, line_text) in view.text.split('\n').enumerate() {
        if line >= first_visible + visible_count {
            break;
        }
        let end = start + line_text.len();

        if line >= first_visible {
            let y = viewport.y + line as f32 * lh - view.scroll_y;

            if metrics.gutter_width > 0.0 {
                let number = (line + 1).to_string();
                let x = viewport.x + metrics.gutter_width
                    - metrics.text_padding
                    - measure.measure_width(&number);
                canvas.draw_text(x, y, &number, Paint::LineNumber);
            }

            if let Some(selection) = &view.selection {
                // A selected newline shows as one extra space
                let has_newline = end < view.text.len();
                let line_stop = if has_newline { end + 1 } else { end };
                let sel_start = selection.start.max(start);
                let sel_end = selection.end.min(line_stop);
                if sel_start < sel_end {
                    let before = measure.measure_width(&view.text[start..sel_start]);
                    let mut width = measure.measure_width(&view.text[sel_start..sel_end.min(end)]);
                    if sel_end > end {
                        width += space_width;
                    }
                    canvas.fill_rect(
                        Rect::new(text_left + before, y, width, lh),
                        Paint::Selection,
                    );
                }
            }

            canvas.draw_text(text_left, y, line_text, Paint::Text);

            if view.show_caret && (start..=end).contains(&view.cursor) {
                let x = text_left + measure.measure_width(&view.text[start..view.cursor]);
                canvas.fill_rect(Rect::new(x, y, metrics.caret_width, lh), Paint::Caret);
            }
        }

        start = end + 1;
    }

    canvas.pop_clip();
}
