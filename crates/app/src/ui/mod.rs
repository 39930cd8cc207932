//! Screen rendering.

mod main_screen;
mod modal;
mod status_bar;

use ratatui::{
    buffer::Buffer,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::state::AppState;

/// Draw the whole screen for `state`
pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let buf = frame.buffer_mut();
    render_into(buf, state);
}

fn render_into(buf: &mut Buffer, state: &AppState) {
    let theme = state.theme;
    Block::default()
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .render(state.screen.intersection(buf.area), buf);

    main_screen::render(buf, state);
    if let Some(script_modal) = &state.modal {
        modal::render(buf, state, script_modal);
    }
    status_bar::render(buf, state);
}

#[cfg(test)]
pub(crate) fn row_text(buf: &Buffer, y: u16) -> String {
    (buf.area.x..buf.area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect()
}

#[cfg(test)]
pub(crate) fn render_to_buffer(state: &AppState) -> Buffer {
    let mut buf = Buffer::empty(state.screen);
    render_into(&mut buf, state);
    buf
}
