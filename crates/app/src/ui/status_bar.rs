//! Status line at the bottom of the screen.

use ratatui::{
    buffer::Buffer,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::state::AppState;

pub fn render(buf: &mut Buffer, state: &AppState) {
    let area = state.main_layout().status.intersection(buf.area);
    if area.is_empty() {
        return;
    }
    let theme = state.theme;

    let mut spans = vec![Span::styled(
        format!(" {}", state.summary()),
        Style::default().fg(theme.disabled),
    )];
    if let Some(status) = &state.status {
        let color = if status.is_error {
            theme.error
        } else {
            theme.success
        };
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(status.text.clone(), Style::default().fg(color)));
    }

    Line::from(spans)
        .style(Style::default().bg(theme.accented_bg))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use crate::state::AppState;
    use crate::ui::{render_to_buffer, row_text};
    use kort_config::Config;
    use kort_theme::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_summary_and_message() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.scripts.directory = Some(dir.path().display().to_string());
        let mut state = AppState::new(config, Theme::get_by_name("default"));
        state.resize(80, 10);

        let line = row_text(&render_to_buffer(&state), 9);
        assert!(line.starts_with(&format!(" {}", state.summary())));

        state.set_error("Filename is empty");
        let line = row_text(&render_to_buffer(&state), 9);
        assert!(line.contains("| Scripts: 0 |"));
        assert!(line.contains("  Filename is empty"));
    }
}
