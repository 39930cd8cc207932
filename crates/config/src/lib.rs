//! Configuration management for kort.
//!
//! This crate provides configuration loading and saving
//! with support for TOML format and XDG directory conventions.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, GeneralSettings, LoggingSettings, ScriptsSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "dracula";
    pub const MAX_CHARS: usize = 2000;
    pub const UNDO_DEPTH: usize = 50;
    pub const BLINK_FRAMES: u32 = 20;
    pub const WHEEL_LINES: u16 = 3;
    pub const LINE_NUMBERS: bool = true;
    pub const TAB_WIDTH: usize = 4;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_FILE_NAME: &str = "kort.log";
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// On first run, creates config file with default values.
    /// Auto-completes missing keys with default values.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_file_path()?)?;
        Self::ensure_themes_dir()?;
        Ok(config)
    }

    /// Load configuration from `path`, creating or normalizing the file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run - create config file with default values
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&original_content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;

        // If content changed, save the updated config
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to themes directory.
    pub fn get_themes_dir() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("themes"))
    }

    /// Resolved log file path: the configured one, else the cache directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Ok(get_cache_dir()?.join(defaults::LOG_FILE_NAME)),
        }
    }

    /// Resolved scripts directory.
    ///
    /// The configured directory, else `scripts` next to the executable, else
    /// `scripts` under the working directory.
    pub fn scripts_dir(&self) -> PathBuf {
        if let Some(dir) = &self.scripts.directory {
            return PathBuf::from(dir);
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default()
            .join(constants::SCRIPTS_DIR_NAME)
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// Ensure themes directory exists.
    fn ensure_themes_dir() -> Result<()> {
        let themes_dir = Self::get_themes_dir()?;
        if !themes_dir.exists() {
            std::fs::create_dir_all(themes_dir)?;
        }
        Ok(())
    }
}
