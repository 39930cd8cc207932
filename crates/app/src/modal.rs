//! Script modal: filename field plus the multi-line editor.

use std::path::PathBuf;

use kort_config::constants::MAX_FILENAME_CHARS;
use kort_editor::{EditorMetrics, EditorOptions, EditorSession};
use kort_scripts::ScriptEntry;

use crate::filename_field::FilenameField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    /// Editing an existing file, replaced on save
    Edit { original: PathBuf },
}

/// Which input receives the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalFocus {
    Filename,
    Editor,
}

#[derive(Debug)]
pub struct ScriptModal {
    pub mode: ModalMode,
    pub filename: FilenameField,
    pub editor: EditorSession,
    pub focus: ModalFocus,
    /// Frames since the modal opened (filename caret blink)
    frame: u64,
    blink_frames: u32,
}

impl ScriptModal {
    /// Empty modal for a new script
    pub fn create(options: EditorOptions, metrics: EditorMetrics) -> Self {
        Self {
            mode: ModalMode::Create,
            filename: FilenameField::new(MAX_FILENAME_CHARS),
            blink_frames: metrics.blink_frames,
            editor: EditorSession::new(options, metrics),
            focus: ModalFocus::Filename,
            frame: 0,
        }
    }

    /// Modal for an existing script with its body already read
    pub fn edit(
        entry: &ScriptEntry,
        body: &str,
        options: EditorOptions,
        metrics: EditorMetrics,
    ) -> Self {
        Self {
            mode: ModalMode::Edit {
                original: entry.path.clone(),
            },
            filename: FilenameField::with_text(&entry.display_name, MAX_FILENAME_CHARS),
            blink_frames: metrics.blink_frames,
            editor: EditorSession::open(body, options, metrics),
            focus: ModalFocus::Filename,
            frame: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Create New Script",
            ModalMode::Edit { .. } => "Edit Script",
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ModalFocus::Filename => ModalFocus::Editor,
            ModalFocus::Editor => ModalFocus::Filename,
        };
        self.frame = 0;
    }

    pub fn set_focus(&mut self, focus: ModalFocus) {
        if self.focus != focus {
            self.toggle_focus();
        }
    }

    pub fn tick(&mut self) {
        self.frame += 1;
    }

    /// Filename caret blink phase
    pub fn filename_caret_visible(&self) -> bool {
        let blink = u64::from(self.blink_frames.max(1));
        self.focus == ModalFocus::Filename && (self.frame / blink) % 2 == 0
    }

    /// Restart the filename caret blink (after typing)
    pub fn reset_blink(&mut self) {
        self.frame = 0;
    }
}
