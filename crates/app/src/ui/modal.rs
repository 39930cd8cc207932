//! Script modal rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};

use kort_buffer::CellMeasure;
use kort_editor::TerminalCanvas;
use kort_theme::Theme;

use crate::layout::{hit, CANCEL_LABEL, SAVE_LABEL};
use crate::modal::{ModalFocus, ScriptModal};
use crate::state::AppState;

const HELP_LINES: [&str; 2] = [
    "Tab: switch | Enter: new line | Ctrl+Z: undo | Ctrl+Y: redo",
    "Ctrl+C/V/X: copy/paste/cut | Ctrl+S: save | Esc: cancel",
];

pub fn render(buf: &mut Buffer, state: &AppState, modal: &ScriptModal) {
    let theme = state.theme;
    let layout = state.modal_layout();
    if layout.frame.is_empty() {
        return;
    }

    Clear.render(layout.frame, buf);
    Block::default()
        .title(Span::styled(
            format!(" {} ", modal.title()),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.disabled))
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .render(layout.frame, buf);

    let label_style = Style::default().fg(theme.accented_fg);
    set_line(buf, layout.filename_label, "Filename:", label_style);
    set_line(
        buf,
        layout.editor_label,
        "Command (Enter for new line):",
        label_style,
    );

    let filename_focused = modal.focus == ModalFocus::Filename;
    field_block(theme, filename_focused).render(layout.filename_box, buf);
    render_filename(buf, theme, layout.filename_input, modal);

    let editor_focused = modal.focus == ModalFocus::Editor;
    field_block(theme, editor_focused).render(layout.editor_box, buf);
    let viewport = layout.editor_viewport.intersection(buf.area);
    if !viewport.is_empty() {
        let mut canvas = TerminalCanvas::new(buf, theme);
        modal
            .editor
            .render(&mut canvas, &CellMeasure, viewport.into(), editor_focused);
    }

    let help_style = Style::default().fg(theme.disabled);
    for (row, line) in HELP_LINES.iter().enumerate() {
        if (row as u16) < layout.help.height {
            let area = Rect {
                y: layout.help.y + row as u16,
                height: 1,
                ..layout.help
            };
            set_line(buf, area, line, help_style);
        }
    }

    let button = |area: Rect, bg| {
        let style = Style::default().fg(theme.bg).bg(bg);
        if state.mouse.is_some_and(|(x, y)| hit(area, x, y)) {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        }
    };
    set_line(
        buf,
        layout.save_button,
        SAVE_LABEL,
        button(layout.save_button, theme.success),
    );
    set_line(
        buf,
        layout.cancel_button,
        CANCEL_LABEL,
        button(layout.cancel_button, theme.error),
    );
}

fn field_block(theme: &Theme, focused: bool) -> Block<'static> {
    let border = if focused {
        theme.accented_fg
    } else {
        theme.disabled
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.selected_bg))
}

/// Filename text, showing its tail when it is wider than the field, and the
/// `_` caret after it.
fn render_filename(buf: &mut Buffer, theme: &Theme, area: Rect, modal: &ScriptModal) {
    if area.is_empty() {
        return;
    }
    let text = modal.filename.text();
    let room = usize::from(area.width).saturating_sub(1);
    let visible = &text[text.len().saturating_sub(room)..];
    buf.set_stringn(
        area.x,
        area.y,
        visible,
        usize::from(area.width),
        Style::default().fg(theme.selected_fg),
    );
    if modal.filename_caret_visible() {
        let x = area.x + visible.len() as u16;
        if x < area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char('_').set_fg(theme.selected_fg);
            }
        }
    }
}

fn set_line(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    buf.set_stringn(area.x, area.y, text, usize::from(area.width), style);
}
