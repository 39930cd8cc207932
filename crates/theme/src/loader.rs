//! Theme loading from TOML files.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::Theme;

/// Color representation in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Color {
        match self {
            TomlColor::Named(name) => name.parse().unwrap_or(Color::White),
            TomlColor::Rgb { rgb } => Color::Rgb(rgb[0], rgb[1], rgb[2]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    bg: TomlColor,
    fg: TomlColor,
    accented_bg: TomlColor,
    accented_fg: TomlColor,
    selected_bg: TomlColor,
    selected_fg: TomlColor,
    disabled: TomlColor,
    success: TomlColor,
    warning: TomlColor,
    error: TomlColor,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: String,
    colors: TomlColors,
}

impl TomlColors {
    fn into_theme(self, name: &'static str) -> Theme {
        Theme {
            name,
            bg: self.bg.to_color(),
            fg: self.fg.to_color(),
            accented_bg: self.accented_bg.to_color(),
            accented_fg: self.accented_fg.to_color(),
            selected_bg: self.selected_bg.to_color(),
            selected_fg: self.selected_fg.to_color(),
            disabled: self.disabled.to_color(),
            success: self.success.to_color(),
            warning: self.warning.to_color(),
            error: self.error.to_color(),
        }
    }
}

/// Load theme from TOML file.
///
/// The theme name read from the file is leaked to get a `'static` string.
pub fn load_theme(path: &Path) -> Result<Theme> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme {}", path.display()))?;
    let toml_theme: TomlTheme = toml::from_str(&content)
        .with_context(|| format!("Invalid theme {}", path.display()))?;

    let name: &'static str = Box::leak(toml_theme.name.into_boxed_str());
    Ok(toml_theme.colors.into_theme(name))
}

/// Load theme from TOML string with a static name.
pub fn load_theme_from_str(content: &str, name: &'static str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    Ok(toml_theme.colors.into_theme(name))
}
