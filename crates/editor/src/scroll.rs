//! Vertical scrolling for the editor viewport.
//!
//! The viewport follows the caret automatically until the user scrolls it by
//! hand (mouse wheel or scrollbar drag). Manual scrolling lasts until keyboard
//! navigation resumes following, or, when configured, for a fixed number of
//! frames.

use crate::geometry::Rect;

/// Who owns the scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// The viewport follows the caret
    #[default]
    Auto,
    /// The user scrolled; follow resumes after this many frames
    ManualUntil(u32),
    /// The user scrolled; follow resumes on keyboard navigation
    ManualIndefinite,
}

/// Active scrollbar thumb drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarDrag {
    /// Distance from the top of the thumb to the pointer when the drag began
    pub grab_offset: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollController {
    offset_y: f32,
    max_scroll_y: f32,
    content_height: f32,
    viewport_height: f32,
    mode: ScrollMode,
    drag: Option<ScrollbarDrag>,
    /// Set when following resumes; the next follow pass re-centers an off-screen caret
    recenter_pending: bool,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset_y
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll_y
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn is_scrollable(&self) -> bool {
        self.max_scroll_y > 0.0
    }

    pub fn drag(&self) -> Option<ScrollbarDrag> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Update the content size for `total_lines` lines of `line_height`.
    pub fn set_content(&mut self, total_lines: usize, line_height: f32, viewport_height: f32) {
        self.set_content_height(total_lines as f32 * line_height, viewport_height);
    }

    /// Update the content size and re-clamp the offset.
    pub fn set_content_height(&mut self, content_height: f32, viewport_height: f32) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.max_scroll_y = (content_height - viewport_height).max(0.0);
        self.clamp();
    }

    /// Move the offset by `delta`, clamped. Does not change the mode.
    pub fn scroll_by(&mut self, delta: f32) {
        self.offset_y += delta;
        self.clamp();
    }

    /// Apply a mouse wheel movement (positive `notches` scroll up).
    ///
    /// `manual_frames == 0` keeps manual mode until keyboard navigation.
    pub fn wheel(&mut self, notches: f32, step: f32, manual_frames: u32) {
        self.scroll_by(-notches * step);
        self.mode = if manual_frames > 0 {
            ScrollMode::ManualUntil(manual_frames)
        } else {
            ScrollMode::ManualIndefinite
        };
    }

    /// Advance the manual-scroll countdown by one frame.
    pub fn tick(&mut self) {
        if let ScrollMode::ManualUntil(frames) = self.mode {
            self.mode = match frames.saturating_sub(1) {
                0 => ScrollMode::Auto,
                left => ScrollMode::ManualUntil(left),
            };
        }
    }

    /// Hand the offset back to the caret.
    pub fn resume_follow(&mut self) {
        if self.mode != ScrollMode::Auto {
            self.recenter_pending = true;
        }
        self.mode = ScrollMode::Auto;
    }

    /// Keep the caret line inside the viewport (no-op while scrolled by hand).
    pub fn follow_caret(
        &mut self,
        caret_line: usize,
        line_height: f32,
        top_margin: f32,
        bottom_margin: f32,
    ) {
        if self.mode != ScrollMode::Auto {
            return;
        }
        let caret_y = caret_line as f32 * line_height;

        if std::mem::take(&mut self.recenter_pending) {
            let off_screen = caret_y < self.offset_y
                || caret_y + line_height > self.offset_y + self.viewport_height;
            if off_screen {
                self.offset_y = caret_y - (self.viewport_height - line_height) / 2.0;
                self.clamp();
                return;
            }
        }

        if caret_y < self.offset_y + top_margin {
            self.offset_y = (caret_y - top_margin).max(0.0);
        } else if caret_y + line_height > self.offset_y + self.viewport_height - bottom_margin {
            self.offset_y = caret_y + line_height - self.viewport_height + bottom_margin;
        }
        self.clamp();
    }

    /// Scrollbar thumb inside `track`, `None` when nothing scrolls.
    pub fn thumb(&self, track: &Rect, min_thumb: f32) -> Option<Rect> {
        if !self.is_scrollable() || self.content_height <= 0.0 {
            return None;
        }
        let height = (self.viewport_height / self.content_height * track.height)
            .max(min_thumb)
            .min(track.height);
        let top = track.y + self.offset_y / self.max_scroll_y * (track.height - height);
        Some(Rect::new(track.x, top, track.width, height))
    }

    /// Start a thumb drag at `mouse_y`.
    ///
    /// Pressing outside the thumb centers it on the pointer first. Returns
    /// `false` when there is no scrollbar.
    pub fn begin_drag(&mut self, track: &Rect, min_thumb: f32, mouse_y: f32) -> bool {
        let Some(thumb) = self.thumb(track, min_thumb) else {
            return false;
        };
        let grab_offset = if mouse_y >= thumb.y && mouse_y < thumb.bottom() {
            mouse_y - thumb.y
        } else {
            thumb.height / 2.0
        };
        self.drag = Some(ScrollbarDrag { grab_offset });
        self.mode = ScrollMode::ManualIndefinite;
        self.drag_to(track, min_thumb, mouse_y);
        true
    }

    /// Map the pointer position linearly onto the offset during a drag.
    pub fn drag_to(&mut self, track: &Rect, min_thumb: f32, mouse_y: f32) {
        let (Some(drag), Some(thumb)) = (self.drag, self.thumb(track, min_thumb)) else {
            return;
        };
        let travel = track.height - thumb.height;
        if travel <= 0.0 {
            return;
        }
        let ratio = (mouse_y - drag.grab_offset - track.y) / travel;
        self.offset_y = ratio * self.max_scroll_y;
        self.clamp();
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    fn clamp(&mut self) {
        self.offset_y = self.offset_y.clamp(0.0, self.max_scroll_y);
    }
}
