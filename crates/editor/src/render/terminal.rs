//! Canvas backed by a ratatui buffer.
//!
//! Coordinates are cells. A fractional coordinate maps to the first cell at or
//! after it, the same rounding the hit test uses, so partially scrolled lines
//! land where clicks expect them.

use ratatui::buffer::{Buffer, Cell};
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthChar;

use kort_theme::Theme;

use super::{Canvas, Paint};
use crate::geometry::Rect;

/// Tolerance for float noise when snapping to cells
const CELL_EPSILON: f32 = 1e-3;

pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    theme: &'a Theme,
    clips: Vec<Rect>,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, theme: &'a Theme) -> Self {
        Self {
            buf,
            theme,
            clips: Vec::new(),
        }
    }

    fn clip(&self) -> Rect {
        self.clips
            .last()
            .copied()
            .unwrap_or_else(|| Rect::from(self.buf.area))
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.buf.cell_mut((x, y))
    }

    fn paint_cell(&mut self, x: i32, y: i32, paint: Paint) {
        let theme = *self.theme;
        let Some(cell) = self.cell_mut(x, y) else {
            return;
        };
        match paint {
            Paint::Background => {
                cell.set_bg(theme.bg);
            }
            Paint::Gutter | Paint::ScrollbarTrack => {
                cell.set_bg(theme.accented_bg);
            }
            Paint::Selection => {
                cell.set_bg(theme.selected_bg).set_fg(theme.selected_fg);
            }
            Paint::ScrollbarThumb => {
                cell.set_bg(theme.disabled);
            }
            Paint::Caret => invert_cell_colors(cell, &theme),
            Paint::LineNumber | Paint::Text => {
                cell.set_fg(text_color(paint, &theme));
            }
        }
    }
}

/// First cell at or after `coord`
fn to_cell(coord: f32) -> i32 {
    (coord - CELL_EPSILON).ceil() as i32
}

fn text_color(paint: Paint, theme: &Theme) -> Color {
    match paint {
        Paint::LineNumber => theme.disabled,
        _ => theme.fg,
    }
}

/// Swap foreground and background, using theme colors for `Reset`.
fn invert_cell_colors(cell: &mut Cell, theme: &Theme) {
    let fg = match cell.fg {
        Color::Reset => theme.fg,
        color => color,
    };
    let bg = match cell.bg {
        Color::Reset => theme.bg,
        color => color,
    };
    cell.set_style(Style::default().bg(fg).fg(bg).add_modifier(Modifier::BOLD));
}

impl Canvas for TerminalCanvas<'_> {
    fn push_clip(&mut self, rect: Rect) {
        let clip = self.clip().intersection(&rect);
        self.clips.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        let area = rect.intersection(&self.clip());
        if area.is_empty() {
            return;
        }
        for y in to_cell(area.y)..to_cell(area.bottom()) {
            for x in to_cell(area.x)..to_cell(area.right()) {
                self.paint_cell(x, y, paint);
            }
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, paint: Paint) {
        let clip = self.clip();
        let row = to_cell(y);
        if row < to_cell(clip.y) || row >= to_cell(clip.bottom()) {
            return;
        }
        let (min_col, max_col) = (to_cell(clip.x), to_cell(clip.right()));
        let color = text_color(paint, self.theme);

        let mut col = to_cell(x);
        for ch in text.chars() {
            let ch = if ch == '\t' { ' ' } else { ch };
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            if col >= max_col {
                break;
            }
            if col >= min_col && col + width <= max_col {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.set_char(ch).set_fg(color);
                }
            }
            col += width;
        }
    }
}
