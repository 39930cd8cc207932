//! Script list screen: toolbar, list and preview.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use kort_buffer::CellMeasure;
use kort_editor::render::render_wrapped;
use kort_editor::TerminalCanvas;

use crate::file_list::{RowAreas, DELETE_LABEL, EDIT_LABEL};
use crate::layout::{hit, MainLayout, ADD_LABEL, FOLDER_LABEL, TOOLBAR_SEPARATOR};
use crate::state::AppState;

const EMPTY_HINT: &str = "No scripts yet. Press [a] to add one.";

pub fn render(buf: &mut Buffer, state: &AppState) {
    let layout = state.main_layout();
    render_toolbar(buf, state, &layout);
    render_list(buf, state, &layout);
    render_preview(buf, state, &layout);
}

fn hovered(state: &AppState, area: Rect) -> bool {
    state.mouse.is_some_and(|(x, y)| hit(area, x, y))
}

fn render_toolbar(buf: &mut Buffer, state: &AppState, layout: &MainLayout) {
    let theme = state.theme;
    let button = |area: Rect, fg| {
        let style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
        if hovered(state, area) {
            style.bg(theme.accented_bg)
        } else {
            style
        }
    };

    buf.set_stringn(
        layout.add_button.x,
        layout.add_button.y,
        ADD_LABEL,
        usize::from(layout.add_button.width),
        button(layout.add_button, theme.accented_fg),
    );
    let separator_x = layout.add_button.right();
    if separator_x < layout.toolbar.right() {
        buf.set_stringn(
            separator_x,
            layout.toolbar.y,
            TOOLBAR_SEPARATOR,
            usize::from(layout.toolbar.right() - separator_x),
            Style::default().fg(theme.disabled),
        );
    }
    buf.set_stringn(
        layout.folder_button.x,
        layout.folder_button.y,
        FOLDER_LABEL,
        usize::from(layout.folder_button.width),
        button(layout.folder_button, theme.fg),
    );
}

fn render_list(buf: &mut Buffer, state: &AppState, layout: &MainLayout) {
    let theme = state.theme;
    Block::default()
        .title(Span::styled(
            format!(" {} ", state.scripts_dir.display()),
            Style::default().fg(theme.disabled),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selected_bg))
        .style(Style::default().bg(theme.bg))
        .render(layout.list, buf);

    let inner = layout.list_inner;
    if state.scripts.is_empty() {
        buf.set_stringn(
            inner.x,
            inner.y,
            EMPTY_HINT,
            usize::from(inner.width),
            Style::default().fg(theme.disabled),
        );
        return;
    }

    let count = state.scripts.len();
    let visible = usize::from(inner.height);
    for (row, index) in state.list.visible_range(count, visible).enumerate() {
        let script = &state.scripts[index];
        let y = inner.y + row as u16;
        let areas = RowAreas::new(inner, y);
        let row_area = Rect::new(inner.x, y, inner.width, 1);

        let row_bg = if state.list.selected() == Some(index) {
            Some(theme.selected_bg)
        } else if hovered(state, areas.name) {
            Some(theme.accented_bg)
        } else {
            None
        };
        if let Some(bg) = row_bg {
            buf.set_style(row_area, Style::default().bg(bg));
        }

        let (icon_color, text_color) = if script.is_executing() {
            (theme.success, theme.success)
        } else {
            (theme.accented_fg, theme.fg)
        };
        let name_width = usize::from(areas.name.width);
        buf.set_stringn(areas.name.x, y, "■ ", name_width, Style::default().fg(icon_color));
        if name_width > 2 {
            buf.set_stringn(
                areas.name.x + 2,
                y,
                &script.display_name,
                name_width - 2,
                Style::default().fg(text_color),
            );
        }

        let edit_bg = if hovered(state, areas.edit) {
            theme.warning
        } else {
            theme.accented_fg
        };
        let delete_bg = if hovered(state, areas.delete) {
            theme.error
        } else {
            theme.disabled
        };
        let button_style = Style::default().fg(theme.bg).add_modifier(Modifier::BOLD);
        buf.set_stringn(
            areas.edit.x,
            y,
            EDIT_LABEL,
            usize::from(areas.edit.width),
            button_style.bg(edit_bg),
        );
        buf.set_stringn(
            areas.delete.x,
            y,
            DELETE_LABEL,
            usize::from(areas.delete.width),
            button_style.bg(delete_bg),
        );
    }

    if let Some((start, len)) =
        scrollbar_thumb(inner.height, count, state.list.offset(), state.list.max_offset())
    {
        let x = layout.list.right().saturating_sub(1);
        for y in inner.y + start..inner.y + start + len {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char('█').set_fg(theme.disabled);
            }
        }
    }
}

/// Thumb of the list scrollbar as (first row, rows) relative to the track.
fn scrollbar_thumb(
    track: u16,
    count: usize,
    offset: usize,
    max_offset: usize,
) -> Option<(u16, u16)> {
    if max_offset == 0 || count == 0 || track == 0 {
        return None;
    }
    let track_len = usize::from(track);
    let len = (track_len * track_len / count).clamp(1, track_len);
    let start = offset.min(max_offset) * (track_len - len) / max_offset;
    Some((start as u16, len as u16))
}

fn render_preview(buf: &mut Buffer, state: &AppState, layout: &MainLayout) {
    let theme = state.theme;
    let title = state
        .selected_script()
        .map(|script| format!(" {} ", script.file_name()))
        .unwrap_or_else(|| " Preview ".to_string());
    Block::default()
        .title(Span::styled(title, Style::default().fg(theme.accented_fg)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selected_bg))
        .style(Style::default().bg(theme.bg))
        .render(layout.preview, buf);

    let Some(preview) = &state.preview else {
        return;
    };
    let area = layout.preview_inner.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let mut canvas = TerminalCanvas::new(buf, theme);
    render_wrapped(
        &mut canvas,
        &CellMeasure,
        area.into(),
        &preview.body,
        0.0,
        1.0,
        state.config.editor.tab_width,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{render_to_buffer, row_text};
    use kort_config::Config;
    use kort_theme::Theme;
    use std::fs;
    use tempfile::TempDir;

    fn state_with(dir: &TempDir, names: &[&str]) -> AppState {
        let scripts = dir.path().join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        for name in names {
            fs::write(scripts.join(name), "#!/bin/bash\necho hello world\n").unwrap();
        }
        let mut config = Config::default();
        config.scripts.directory = Some(scripts.display().to_string());
        let mut state = AppState::new(config, Theme::get_by_name("default"));
        state.resize(60, 8);
        state
    }

    #[test]
    fn test_scrollbar_thumb() {
        assert_eq!(scrollbar_thumb(10, 5, 0, 0), None);
        assert_eq!(scrollbar_thumb(10, 20, 0, 10), Some((0, 5)));
        assert_eq!(scrollbar_thumb(10, 20, 10, 10), Some((5, 5)));
        assert_eq!(scrollbar_thumb(4, 400, 198, 396), Some((1, 1)));
    }

    #[test]
    fn test_toolbar_and_rows() {
        let dir = TempDir::new().unwrap();
        let state = state_with(&dir, &["backup.sh", "deploy.sh"]);
        let buf = render_to_buffer(&state);

        let toolbar = row_text(&buf, 0);
        assert!(toolbar.starts_with(" [+] Add Script | [#] Open Folder"));

        // List rows start inside the border on line 2
        let first = row_text(&buf, 2);
        assert!(first.contains("■ backup"));
        assert!(first.contains("[E] [X]"));
        assert!(row_text(&buf, 3).contains("■ deploy"));
    }

    #[test]
    fn test_empty_list_hint() {
        let dir = TempDir::new().unwrap();
        let state = state_with(&dir, &[]);
        let buf = render_to_buffer(&state);
        assert!(row_text(&buf, 2).contains("No scripts yet."));
    }

    #[test]
    fn test_preview_shows_wrapped_body() {
        let dir = TempDir::new().unwrap();
        let state = state_with(&dir, &["greet.sh"]);
        let buf = render_to_buffer(&state);
        let layout = state.main_layout();

        let top = row_text(&buf, layout.preview_inner.y);
        assert!(top.contains("echo hello"));
        assert!(row_text(&buf, layout.preview.y).contains("greet.sh"));
    }
}
