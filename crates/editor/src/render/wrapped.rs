//! Plain word-wrapped rendering (no gutter, caret or selection).

use kort_buffer::{wrap_words, TextMeasure};

use super::{Canvas, Paint};
use crate::geometry::Rect;

/// Draw `text` word-wrapped to the width of `area`, scrolled by `scroll_y`.
///
/// Returns the height of the whole laid out text.
pub fn render_wrapped(
    canvas: &mut dyn Canvas,
    measure: &dyn TextMeasure,
    area: Rect,
    text: &str,
    scroll_y: f32,
    line_height: f32,
    tab_width: usize,
) -> f32 {
    let wrapped = wrap_words(text, area.width, tab_width, measure);

    canvas.push_clip(area);
    for word in &wrapped.words {
        let y = area.y + word.line as f32 * line_height - scroll_y;
        if y + line_height <= area.y || y >= area.bottom() {
            continue;
        }
        canvas.draw_text(area.x + word.x, y, &text[word.range.clone()], Paint::Text);
    }
    canvas.pop_clip();

    wrapped.height(line_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingCanvas;
    use kort_buffer::FixedAdvance;

    #[test]
    fn test_words_wrap_inside_area() {
        let mut canvas = RecordingCanvas::new();
        let height = render_wrapped(
            &mut canvas,
            &FixedAdvance(1.0),
            Rect::new(2.0, 1.0, 12.0, 10.0),
            "echo hello world",
            0.0,
            1.0,
            4,
        );

        assert_eq!(height, 2.0);
        assert_eq!(
            canvas.texts(Paint::Text),
            vec![
                (2.0, 1.0, "echo"),
                (7.0, 1.0, "hello"),
                (2.0, 2.0, "world"),
            ]
        );
    }

    #[test]
    fn test_scrolled_out_words_are_skipped() {
        let mut canvas = RecordingCanvas::new();
        let height = render_wrapped(
            &mut canvas,
            &FixedAdvance(1.0),
            Rect::new(0.0, 0.0, 20.0, 1.0),
            "one\ntwo\nthree",
            1.0,
            1.0,
            4,
        );

        assert_eq!(height, 3.0);
        let words: Vec<_> = canvas.texts(Paint::Text).into_iter().map(|t| t.2).collect();
        assert_eq!(words, vec!["two"]);
    }
}
