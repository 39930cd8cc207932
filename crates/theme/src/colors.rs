//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
///
/// Ten colors cover the whole interface:
/// - `bg`, `fg`: window background and main text
/// - `accented_bg`, `accented_fg`: list hover band, headings and the caret
/// - `selected_bg`, `selected_fg`: text selection, focused field
/// - `disabled`: line numbers, borders, status text
/// - `success`, `warning`, `error`: launch highlight, edit button, delete button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    pub bg: Color,
    pub fg: Color,

    pub accented_bg: Color,
    pub accented_fg: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,

    pub disabled: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get_by_name("default")
    }
}
