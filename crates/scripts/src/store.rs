//! Script files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::Platform;

/// A script file in the scripts directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    /// File name up to the first '.'
    pub display_name: String,
    pub path: PathBuf,
    /// Extension from the last '.', with the dot (empty when there is none)
    pub extension: String,
    /// Frames left on the "just launched" highlight
    pub executing_frames: u32,
}

impl ScriptEntry {
    /// Build an entry from a file path (`None` for paths without a UTF-8 file name)
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let display_name = file_name
            .split_once('.')
            .map(|(name, _)| name)
            .unwrap_or(&file_name)
            .to_string();
        let extension = file_name
            .rfind('.')
            .map(|dot| file_name[dot..].to_string())
            .unwrap_or_default();
        Some(Self {
            display_name,
            path,
            extension,
            executing_frames: 0,
        })
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    pub fn is_executing(&self) -> bool {
        self.executing_frames > 0
    }

    /// Start the launch highlight
    pub fn mark_executing(&mut self, frames: u32) {
        self.executing_frames = frames;
    }

    /// Count the launch highlight down by one frame
    pub fn tick(&mut self) {
        self.executing_frames = self.executing_frames.saturating_sub(1);
    }
}

/// Create the scripts directory if it does not exist yet.
pub fn ensure_scripts_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create scripts directory {}", dir.display()))
}

/// Regular files in `dir`, sorted by file name.
///
/// An unreadable directory yields an empty list (the failure is logged).
pub fn list_scripts(dir: &Path) -> Vec<ScriptEntry> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to read scripts directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut scripts: Vec<ScriptEntry> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| ScriptEntry::from_path(entry.path()))
        .collect();
    scripts.sort_by(|a, b| a.file_name().cmp(b.file_name()));
    scripts
}

/// Remove a leading header line and trailing line breaks.
///
/// Text that does not start with the platform header is kept as is.
pub fn strip_header(content: &str, platform: Platform) -> String {
    let body = match content.strip_prefix(platform.header()) {
        Some(rest) => rest.split_once('\n').map(|(_, body)| body).unwrap_or(""),
        None => content,
    };
    body.trim_end_matches(['\n', '\r']).to_string()
}

/// Editable body of a script file, `None` when it cannot be read.
pub fn read_script_body(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(strip_header(
            &String::from_utf8_lossy(&bytes),
            Platform::current(),
        )),
        Err(e) => {
            log::warn!("Failed to read script {}: {}", path.display(), e);
            None
        }
    }
}

/// File name for a script, with the platform extension appended when missing.
pub fn script_file_name(filename: &str, platform: Platform) -> String {
    let name = match platform {
        Platform::Windows => filename.to_ascii_lowercase(),
        Platform::Linux | Platform::MacOs => filename.to_string(),
    };
    let has_extension = platform
        .script_extensions()
        .iter()
        .any(|ext| name.ends_with(ext));
    if has_extension {
        filename.to_string()
    } else {
        format!("{}{}", filename, platform.default_extension())
    }
}

/// Write `body` as a script named `filename` in `dir`.
///
/// Returns the path written. Refuses an empty file name or body.
pub fn write_script(dir: &Path, filename: &str, body: &str) -> Result<PathBuf> {
    let filename = filename.trim();
    if filename.is_empty() {
        bail!("Filename is empty");
    }
    if body.is_empty() {
        bail!("Script is empty");
    }
    if filename.contains(['/', '\\']) {
        bail!("Filename must not contain path separators");
    }

    let platform = Platform::current();
    let path = dir.join(script_file_name(filename, platform));
    let content = format!("{}\n{}\n", platform.header(), body);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write script {}", path.display()))?;
    make_executable(&path)?;

    log::info!("Saved script {}", path.display());
    Ok(path)
}

/// Delete a script file.
pub fn delete_script(path: &Path) -> Result<()> {
    fs::remove_file(path)
        .with_context(|| format!("Failed to delete script {}", path.display()))?;
    log::info!("Deleted script {}", path.display());
    Ok(())
}

#[cfg(unix)]
pub(crate) fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to make {} executable", path.display()))
}

#[cfg(not(unix))]
pub(crate) fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
