//! Screen geometry shared by input handling and rendering.
//!
//! Both sides compute the same layout from the terminal size, so a click is
//! always tested against the rectangle that was drawn.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

pub const ADD_LABEL: &str = "[+] Add Script";
pub const FOLDER_LABEL: &str = "[#] Open Folder";
pub const TOOLBAR_SEPARATOR: &str = " | ";

pub const SAVE_LABEL: &str = "[ Save ]";
pub const CANCEL_LABEL: &str = "[ Cancel ]";

const MODAL_MAX_WIDTH: u16 = 80;
const MODAL_MAX_HEIGHT: u16 = 26;

/// Script list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub toolbar: Rect,
    pub add_button: Rect,
    pub folder_button: Rect,
    /// List container including its border
    pub list: Rect,
    /// Rows of the list
    pub list_inner: Rect,
    /// Preview container including its border
    pub preview: Rect,
    pub preview_inner: Rect,
    pub status: Rect,
}

impl MainLayout {
    pub fn new(area: Rect) -> Self {
        let [toolbar, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [list, preview] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(body);

        let add_button = label_area(toolbar, toolbar.x + 1, ADD_LABEL);
        let folder_button = label_area(
            toolbar,
            add_button.right() + TOOLBAR_SEPARATOR.len() as u16,
            FOLDER_LABEL,
        );

        Self {
            toolbar,
            add_button,
            folder_button,
            list,
            list_inner: list.inner(Margin::new(1, 1)),
            preview,
            preview_inner: preview.inner(Margin::new(1, 1)),
            status,
        }
    }
}

/// Script modal, centered above the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub frame: Rect,
    pub filename_label: Rect,
    /// Filename field including its border
    pub filename_box: Rect,
    pub filename_input: Rect,
    pub editor_label: Rect,
    /// Editor including its border
    pub editor_box: Rect,
    /// Area handed to the editor session
    pub editor_viewport: Rect,
    pub help: Rect,
    pub save_button: Rect,
    pub cancel_button: Rect,
}

impl ModalLayout {
    pub fn new(area: Rect) -> Self {
        let frame = centered_rect(
            MODAL_MAX_WIDTH.min(area.width.saturating_sub(2)),
            MODAL_MAX_HEIGHT.min(area.height),
            area,
        );
        let inner = frame.inner(Margin::new(2, 1));
        let [filename_label, filename_box, editor_label, editor_box, help, buttons] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .areas(inner);

        let cancel_button = label_area(
            buttons,
            buttons
                .right()
                .saturating_sub(CANCEL_LABEL.len() as u16),
            CANCEL_LABEL,
        );
        let save_button = label_area(
            buttons,
            cancel_button
                .x
                .saturating_sub(SAVE_LABEL.len() as u16 + 2),
            SAVE_LABEL,
        );

        Self {
            frame,
            filename_label,
            filename_box,
            filename_input: filename_box.inner(Margin::new(1, 1)),
            editor_label,
            editor_box,
            editor_viewport: editor_box.inner(Margin::new(1, 1)),
            help,
            save_button,
            cancel_button,
        }
    }
}

/// Rectangle of `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Whether the cell at `(x, y)` lies in `rect`
pub fn hit(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}

/// Area of a one-line label starting at column `x`, clipped to `row`
fn label_area(row: Rect, x: u16, label: &str) -> Rect {
    Rect::new(x.min(row.right()), row.y, label.len() as u16, 1).intersection(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_regions() {
        let layout = MainLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.toolbar, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.status, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.list, Rect::new(0, 1, 60, 28));
        assert_eq!(layout.list_inner, Rect::new(1, 2, 58, 26));
        assert_eq!(layout.preview.x, 60);

        assert_eq!(layout.add_button, Rect::new(1, 0, 14, 1));
        assert_eq!(layout.folder_button.x, 18);
        assert!(hit(layout.folder_button, 20, 0));
        assert!(!hit(layout.folder_button, 20, 1));
    }

    #[test]
    fn test_modal_layout_fits_and_centers() {
        let area = Rect::new(0, 0, 120, 39);
        let layout = ModalLayout::new(area);
        assert_eq!(layout.frame, Rect::new(20, 6, 80, 26));
        assert_eq!(layout.filename_input.height, 1);
        assert_eq!(layout.editor_viewport.x, layout.editor_box.x + 1);
        assert!(layout.editor_viewport.height >= 1);

        assert_eq!(layout.cancel_button.right(), layout.frame.right() - 2);
        assert!(layout.save_button.right() < layout.cancel_button.x);
        assert_eq!(layout.save_button.y, layout.cancel_button.y);
    }

    #[test]
    fn test_tiny_screen_does_not_overflow() {
        let area = Rect::new(0, 0, 10, 4);
        let layout = ModalLayout::new(area);
        assert!(layout.frame.width <= area.width);
        assert!(layout.frame.height <= area.height);

        let main = MainLayout::new(Rect::new(0, 0, 5, 2));
        assert!(main.folder_button.right() <= main.toolbar.right());
    }

    #[test]
    fn test_centered_rect() {
        assert_eq!(
            centered_rect(10, 4, Rect::new(0, 0, 30, 10)),
            Rect::new(10, 3, 10, 4)
        );
        assert_eq!(
            centered_rect(50, 40, Rect::new(2, 2, 30, 10)),
            Rect::new(2, 2, 30, 10)
        );
    }
}
