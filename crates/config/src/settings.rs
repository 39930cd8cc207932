//! Configuration structures for kort settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Script editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Script storage settings
    #[serde(default)]
    pub scripts: ScriptsSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

/// Script editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Maximum characters in a script body
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Snapshots kept for undo (and for redo)
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,

    /// Frames per caret blink phase
    #[serde(default = "default_blink_frames")]
    pub blink_frames: u32,

    /// Lines scrolled per mouse wheel notch
    #[serde(default = "default_wheel_lines")]
    pub wheel_lines: u16,

    /// Render a line number gutter (otherwise word-wrapped plain text)
    #[serde(default = "default_line_numbers")]
    pub line_numbers: bool,

    /// Tab width in spaces
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Frames the viewport stays where the wheel left it (0 = until a key moves the caret)
    #[serde(default)]
    pub manual_scroll_frames: u32,
}

/// Script storage settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptsSettings {
    /// Scripts directory (optional, defaults to `scripts` next to the executable)
    #[serde(default)]
    pub directory: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_max_chars() -> usize {
    defaults::MAX_CHARS
}

fn default_undo_depth() -> usize {
    defaults::UNDO_DEPTH
}

fn default_blink_frames() -> u32 {
    defaults::BLINK_FRAMES
}

fn default_wheel_lines() -> u16 {
    defaults::WHEEL_LINES
}

fn default_line_numbers() -> bool {
    defaults::LINE_NUMBERS
}

fn default_tab_width() -> usize {
    defaults::TAB_WIDTH
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            undo_depth: default_undo_depth(),
            blink_frames: default_blink_frames(),
            wheel_lines: default_wheel_lines(),
            line_numbers: default_line_numbers(),
            tab_width: default_tab_width(),
            manual_scroll_frames: 0,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
