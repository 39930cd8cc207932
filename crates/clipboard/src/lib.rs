//! Clipboard operations for kort.
//!
//! The editor talks to the clipboard through [`ClipboardProvider`].
//! [`SystemClipboard`] uses arboard for cross-platform access and, on Linux,
//! supports both CLIPBOARD and PRIMARY selections. [`MemoryClipboard`] keeps
//! text in process and is used when no system clipboard is reachable.

use anyhow::{anyhow, Result};
use arboard::Clipboard;
use std::sync::{Mutex, OnceLock};

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

/// Clipboard collaborator used by the editor.
pub trait ClipboardProvider {
    /// Current clipboard text, `None` if empty or unavailable.
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard text.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Global clipboard instance that persists for the application lifetime.
///
/// `None` when the platform clipboard could not be opened (e.g. no display).
static CLIPBOARD: OnceLock<Option<Mutex<Clipboard>>> = OnceLock::new();

/// Get or initialize the global clipboard instance.
fn get_clipboard() -> Option<&'static Mutex<Clipboard>> {
    CLIPBOARD
        .get_or_init(|| match Clipboard::new() {
            Ok(clipboard) => Some(Mutex::new(clipboard)),
            Err(e) => {
                log::warn!("System clipboard unavailable: {}", e);
                None
            }
        })
        .as_ref()
}

/// Copy text to system clipboard.
///
/// On Linux, copies to BOTH CLIPBOARD and PRIMARY selections.
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(anyhow!("Cannot copy empty text"));
    }

    let mut clipboard = get_clipboard()
        .ok_or_else(|| anyhow!("System clipboard unavailable"))?
        .lock()
        .map_err(|e| anyhow!("Failed to lock clipboard: {}", e))?;

    #[cfg(target_os = "linux")]
    {
        // Copy to CLIPBOARD selection (Ctrl+C/V)
        clipboard
            .set()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text(text.to_string())
            .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))?;

        // Copy to PRIMARY selection (middle-click/Shift+Insert)
        let _ = clipboard
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text.to_string());
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard
            .set_text(text)
            .map_err(|e| anyhow!("Failed to set clipboard text: {}", e))?;
    }

    Ok(())
}

/// Paste text from system clipboard.
///
/// On Linux, tries CLIPBOARD selection first, then falls back to PRIMARY.
/// Returns None if clipboard is empty or inaccessible.
pub fn paste() -> Option<String> {
    let mut clipboard = get_clipboard()?.lock().ok()?;

    #[cfg(target_os = "linux")]
    {
        // Try CLIPBOARD selection first
        if let Ok(text) = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text()
        {
            if !text.is_empty() {
                return Some(text);
            }
        }

        // Fall back to PRIMARY selection
        clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
            .ok()
            .filter(|text| !text.is_empty())
    }

    #[cfg(not(target_os = "linux"))]
    clipboard.get_text().ok().filter(|text| !text.is_empty())
}

/// Clipboard backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Whether the platform clipboard could be opened.
    pub fn is_available() -> bool {
        get_clipboard().is_some()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        paste()
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        copy(text)
    }
}

/// In-process clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard holding `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Peek at the stored text
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone().filter(|text| !text.is_empty())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard used by the application: the system clipboard when available,
/// otherwise an in-process fallback.
#[derive(Debug)]
pub enum AppClipboard {
    System(SystemClipboard),
    Memory(MemoryClipboard),
}

impl AppClipboard {
    /// Pick the best available clipboard
    pub fn detect() -> Self {
        if SystemClipboard::is_available() {
            AppClipboard::System(SystemClipboard)
        } else {
            AppClipboard::Memory(MemoryClipboard::new())
        }
    }
}

impl ClipboardProvider for AppClipboard {
    fn get_text(&mut self) -> Option<String> {
        match self {
            AppClipboard::System(clipboard) => clipboard.get_text(),
            AppClipboard::Memory(clipboard) => clipboard.get_text(),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        match self {
            AppClipboard::System(clipboard) => clipboard.set_text(text),
            AppClipboard::Memory(clipboard) => clipboard.set_text(text),
        }
    }
}
