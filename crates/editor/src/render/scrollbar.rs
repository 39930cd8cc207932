use super::{Canvas, Paint};
use crate::geometry::Rect;
use crate::scroll::ScrollController;

/// Draw the scrollbar track and thumb, only when the content scrolls.
pub fn render_scrollbar(
    canvas: &mut dyn Canvas,
    scroll: &ScrollController,
    track: Rect,
    min_thumb: f32,
) {
    if let Some(thumb) = scroll.thumb(&track, min_thumb) {
        canvas.fill_rect(track, Paint::ScrollbarTrack);
        canvas.fill_rect(thumb, Paint::ScrollbarThumb);
    }
}
