//! Scrollable script list: one row per script with edit and delete buttons.

use std::ops::Range;

use ratatui::layout::Rect;

use crate::layout::hit;

pub const EDIT_LABEL: &str = "[E]";
pub const DELETE_LABEL: &str = "[X]";

/// What a click on a list row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Run,
    Edit,
    Delete,
}

/// Clickable regions of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAreas {
    pub name: Rect,
    pub edit: Rect,
    pub delete: Rect,
}

impl RowAreas {
    /// Regions of the row at screen line `y` inside the list rows `inner`
    pub fn new(inner: Rect, y: u16) -> Self {
        let button = EDIT_LABEL.len() as u16;
        let delete_x = inner.right().saturating_sub(button + 1).max(inner.x);
        let edit_x = delete_x.saturating_sub(button + 1).max(inner.x);
        Self {
            name: Rect::new(inner.x, y, edit_x.saturating_sub(inner.x + 1), 1),
            edit: Rect::new(edit_x, y, button, 1).intersection(inner),
            delete: Rect::new(delete_x, y, button, 1).intersection(inner),
        }
    }
}

/// Row offset and selection of the script list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollableList {
    offset: usize,
    max_offset: usize,
    selected: Option<usize>,
}

impl ScrollableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Update for `count` rows shown `visible` at a time.
    ///
    /// Clamps the offset and the selection to the new content.
    pub fn set_content(&mut self, count: usize, visible: usize) {
        self.max_offset = count.saturating_sub(visible);
        self.offset = self.offset.min(self.max_offset);
        self.selected = match (count, self.selected) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(index)) => Some(index.min(count - 1)),
        };
    }

    /// Scroll by `delta` rows (negative scrolls up)
    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self
            .offset
            .saturating_add_signed(delta)
            .min(self.max_offset);
    }

    /// Select row `index` and scroll it into view.
    pub fn select(&mut self, index: usize, count: usize, visible: usize) {
        if count == 0 {
            self.selected = None;
            return;
        }
        let index = index.min(count - 1);
        self.selected = Some(index);
        if index < self.offset {
            self.offset = index;
        } else if visible > 0 && index >= self.offset + visible {
            self.offset = index + 1 - visible;
        }
        self.offset = self.offset.min(self.max_offset);
    }

    /// Move the selection by `delta` rows
    pub fn move_selection(&mut self, delta: isize, count: usize, visible: usize) {
        let current = self.selected.unwrap_or(0);
        self.select(current.saturating_add_signed(delta), count, visible);
    }

    /// Indices of the rows currently on screen
    pub fn visible_range(&self, count: usize, visible: usize) -> Range<usize> {
        let start = self.offset.min(count);
        start..(start + visible).min(count)
    }

    /// Row under screen line `y`, if any
    pub fn row_at(&self, inner: Rect, count: usize, y: u16) -> Option<usize> {
        if y < inner.y || y >= inner.bottom() {
            return None;
        }
        let index = self.offset + usize::from(y - inner.y);
        (index < count).then_some(index)
    }

    /// Row and action under the cell `(x, y)`
    pub fn hit(&self, inner: Rect, count: usize, x: u16, y: u16) -> Option<(usize, RowAction)> {
        let index = self.row_at(inner, count, y)?;
        let areas = RowAreas::new(inner, y);
        if hit(areas.delete, x, y) {
            Some((index, RowAction::Delete))
        } else if hit(areas.edit, x, y) {
            Some((index, RowAction::Edit))
        } else if hit(areas.name, x, y) {
            Some((index, RowAction::Run))
        } else {
            None
        }
    }
}
