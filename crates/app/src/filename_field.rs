//! Single-line filename input of the script modal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kort_clipboard::ClipboardProvider;

/// Printable ASCII only (no tabs or line breaks)
fn is_filename_char(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Append-only text field; editing happens at the end of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameField {
    text: String,
    max_chars: usize,
}

impl FilenameField {
    pub fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            max_chars,
        }
    }

    /// Field pre-filled with `text` (filtered and truncated like a paste)
    pub fn with_text(text: &str, max_chars: usize) -> Self {
        let mut field = Self::new(max_chars);
        field.paste(text);
        field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if !is_filename_char(ch) || self.text.len() >= self.max_chars {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Append the accepted characters of `text` until the field is full.
    pub fn paste(&mut self, text: &str) -> bool {
        let room = self.max_chars.saturating_sub(self.text.len());
        let before = self.text.len();
        self.text
            .extend(text.chars().filter(|&ch| is_filename_char(ch)).take(room));
        self.text.len() != before
    }

    /// Put the whole field on the clipboard (no-op when empty)
    pub fn copy(&self, clipboard: &mut dyn ClipboardProvider) -> Result<()> {
        if self.text.is_empty() {
            return Ok(());
        }
        clipboard.set_text(&self.text)
    }

    /// Move the whole field to the clipboard; the text is kept if that fails.
    pub fn cut(&mut self, clipboard: &mut dyn ClipboardProvider) -> Result<bool> {
        if self.text.is_empty() {
            return Ok(false);
        }
        clipboard.set_text(&self.text)?;
        self.text.clear();
        Ok(true)
    }

    /// Apply a key press. Returns `true` when the text changed.
    ///
    /// Ctrl+C and Ctrl+A copy the whole field, Ctrl+X cuts it, Ctrl+V pastes.
    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn ClipboardProvider) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('a') if ctrl => {
                if let Err(e) = self.copy(clipboard) {
                    log::warn!("Filename copy failed: {}", e);
                }
                false
            }
            KeyCode::Char('x') if ctrl => match self.cut(clipboard) {
                Ok(changed) => changed,
                Err(e) => {
                    log::warn!("Filename cut failed, text kept: {}", e);
                    false
                }
            },
            KeyCode::Char('v') if ctrl => match clipboard.get_text() {
                Some(text) => self.paste(&text),
                None => false,
            },
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char(ch)
            }
            KeyCode::Backspace => self.backspace(),
            _ => false,
        }
    }
}
