//! Keyboard command mapping for the editor.
//!
//! Key parsing is kept apart from command execution so bindings can be read
//! and tested in one place.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kort_buffer::Motion;

/// Editor command representing a user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Move the caret, dropping the selection
    Move(Motion),
    /// Move the caret, extending the selection (Shift)
    Select(Motion),

    // Text editing
    InsertChar(char),
    InsertNewline,
    Backspace,
    Delete,

    // Undo/Redo
    Undo,
    Redo,

    SelectAll,

    // Clipboard
    Copy,
    Cut,
    Paste,

    /// Unhandled key
    None,
}

impl EditorCommand {
    /// Parse a KeyEvent into an EditorCommand.
    pub fn from_key_event(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Self::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        if alt {
            return Self::None;
        }

        match key.code {
            KeyCode::Left => Self::motion(Motion::Left, shift, ctrl),
            KeyCode::Right => Self::motion(Motion::Right, shift, ctrl),
            KeyCode::Up => Self::motion(Motion::Up, shift, ctrl),
            KeyCode::Down => Self::motion(Motion::Down, shift, ctrl),
            KeyCode::Home if ctrl => Self::motion(Motion::DocumentStart, shift, false),
            KeyCode::End if ctrl => Self::motion(Motion::DocumentEnd, shift, false),
            KeyCode::Home => Self::motion(Motion::LineStart, shift, false),
            KeyCode::End => Self::motion(Motion::LineEnd, shift, false),

            KeyCode::Enter if !ctrl => Self::InsertNewline,
            KeyCode::Backspace if !ctrl => Self::Backspace,
            KeyCode::Delete if !ctrl => Self::Delete,

            // Ctrl+Shift+Z arrives as 'Z' or 'z' depending on the terminal
            KeyCode::Char('z' | 'Z') if ctrl && shift => Self::Redo,
            KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
                'a' => Self::SelectAll,
                'c' => Self::Copy,
                'x' => Self::Cut,
                'v' => Self::Paste,
                'z' => Self::Undo,
                'y' => Self::Redo,
                _ => Self::None,
            },
            KeyCode::Char(ch) => Self::InsertChar(ch),

            _ => Self::None,
        }
    }

    fn motion(motion: Motion, shift: bool, ctrl: bool) -> Self {
        if ctrl {
            return Self::None;
        }
        if shift {
            Self::Select(motion)
        } else {
            Self::Move(motion)
        }
    }
}
