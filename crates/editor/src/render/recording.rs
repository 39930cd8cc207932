//! Canvas test double that records every operation.

use super::{Canvas, Paint};
use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    PushClip(Rect),
    PopClip,
    Fill(Rect, Paint),
    Text(f32, f32, String, Paint),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text drawn with `paint`, in drawing order
    pub fn texts(&self, paint: Paint) -> Vec<(f32, f32, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(x, y, text, p) if *p == paint => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Rectangles filled with `paint`, in drawing order
    pub fn fills(&self, paint: Paint) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(rect, p) if *p == paint => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(Op::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(Op::PopClip);
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.ops.push(Op::Fill(rect, paint));
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, paint: Paint) {
        self.ops.push(Op::Text(x, y, text.to_string(), paint));
    }
}
