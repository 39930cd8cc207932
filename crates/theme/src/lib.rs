//! Theme system for kort.
//!
//! Two themes are built in (`dracula` and `default`); any other name is looked
//! up as `<themes dir>/<name>.toml`.

mod colors;
mod loader;

pub use colors::Theme;
pub use loader::load_theme;

use ratatui::style::Color;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

// Embed theme files at compile time
const THEME_DEFAULT_TOML: &str = include_str!("../themes/default.toml");
const THEME_DRACULA_TOML: &str = include_str!("../themes/dracula.toml");

static THEME_DEFAULT: OnceLock<Theme> = OnceLock::new();
static THEME_DRACULA: OnceLock<Theme> = OnceLock::new();

// Cache for user-loaded themes
static USER_THEMES: OnceLock<Mutex<HashMap<String, &'static Theme>>> = OnceLock::new();

// Themes directory path (set by app on startup)
static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the themes directory path (call this at app startup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

/// Hardcoded fallback theme in case of parse errors.
fn fallback_theme(name: &'static str) -> Theme {
    Theme {
        name,
        bg: Color::Black,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    }
}

fn load_builtin(content: &str, name: &'static str) -> Theme {
    loader::load_theme_from_str(content, name).unwrap_or_else(|e| {
        log::error!("Failed to parse built-in theme '{}': {}", name, e);
        fallback_theme(name)
    })
}

fn get_default_theme() -> &'static Theme {
    THEME_DEFAULT.get_or_init(|| load_builtin(THEME_DEFAULT_TOML, "default"))
}

fn get_dracula_theme() -> &'static Theme {
    THEME_DRACULA.get_or_init(|| load_builtin(THEME_DRACULA_TOML, "dracula"))
}

/// Try to load user theme from config directory.
fn try_load_user_theme(name: &str) -> Option<&'static Theme> {
    let cache = USER_THEMES.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(theme) = cache.lock().ok()?.get(name) {
        return Some(*theme);
    }

    let theme_path = THEMES_DIR.get()?.join(format!("{}.toml", name));
    if !theme_path.exists() {
        return None;
    }

    let theme = match load_theme(&theme_path) {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("{:#}", e);
            return None;
        }
    };

    // Leak the theme to get 'static reference
    let static_theme: &'static Theme = Box::leak(Box::new(theme));
    if let Ok(mut cache_lock) = cache.lock() {
        cache_lock.insert(name.to_string(), static_theme);
    }

    Some(static_theme)
}

impl Theme {
    /// Get theme by name.
    ///
    /// User themes shadow built-in ones; unknown names get the default theme.
    pub fn get_by_name(name: &str) -> &'static Theme {
        if let Some(theme) = try_load_user_theme(name) {
            return theme;
        }

        match name {
            "dracula" => get_dracula_theme(),
            _ => get_default_theme(),
        }
    }

    /// Names of the built-in themes.
    pub fn all_theme_names() -> &'static [&'static str] {
        &["default", "dracula"]
    }
}
