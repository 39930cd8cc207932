//! Input handling for the script modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

use kort_buffer::CellMeasure;
use kort_editor::{EditorCommand, FrameInput, PointerEvent, PointerKind, Rect};

use super::App;
use crate::event::Event;
use crate::layout::hit;
use crate::modal::{ModalFocus, ModalMode};

/// Modal actions that end the editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ModalAction {
    Save,
    Cancel,
}

impl App {
    /// Route one event to the modal.
    ///
    /// Editor input is collected into `editor_input`. Save and cancel are
    /// returned instead of applied, so the caller can first run the editor
    /// input that arrived before them.
    pub(super) fn handle_modal_event(
        &mut self,
        event: Event,
        editor_input: &mut FrameInput,
    ) -> Option<ModalAction> {
        match event {
            Event::Key(key) => self.handle_modal_key(key, editor_input),
            Event::Mouse(mouse) => {
                self.state.mouse = Some((mouse.column, mouse.row));
                let layout = self.state.modal_layout();
                let (x, y) = (mouse.column, mouse.row);
                let modal = self.state.modal.as_mut()?;

                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    if hit(layout.save_button, x, y) {
                        return Some(ModalAction::Save);
                    }
                    if hit(layout.cancel_button, x, y) {
                        return Some(ModalAction::Cancel);
                    }
                    if hit(layout.filename_box, x, y) {
                        modal.set_focus(ModalFocus::Filename);
                    } else if hit(layout.editor_box, x, y) {
                        modal.set_focus(ModalFocus::Editor);
                    }
                }

                if let Some(pointer) = PointerEvent::from_mouse_event(mouse) {
                    // The wheel only scrolls the editor while it has focus
                    let wheel = matches!(pointer.kind, PointerKind::Wheel(_));
                    if !wheel || modal.focus == ModalFocus::Editor {
                        editor_input.pointer.push(pointer);
                    }
                }
                None
            }
            Event::Resize(..) => None,
        }
    }

    fn handle_modal_key(
        &mut self,
        key: KeyEvent,
        editor_input: &mut FrameInput,
    ) -> Option<ModalAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(ModalAction::Cancel),
            KeyCode::Char('s') if ctrl => return Some(ModalAction::Save),
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(modal) = &mut self.state.modal {
                    modal.toggle_focus();
                }
            }
            _ => {
                let modal = self.state.modal.as_mut()?;
                match modal.focus {
                    ModalFocus::Filename => {
                        if modal.filename.handle_key(key, &mut self.clipboard) {
                            modal.reset_blink();
                        }
                    }
                    ModalFocus::Editor => {
                        let command = EditorCommand::from_key_event(key);
                        if command != EditorCommand::None {
                            editor_input.commands.push(command);
                        }
                    }
                }
            }
        }
        None
    }

    pub(super) fn apply_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::Save => self.save_modal(),
            ModalAction::Cancel => self.close_modal(),
        }
    }

    /// Run the editor's frame with the collected input (every frame while the
    /// modal is open, so blinking and scroll timers advance).
    pub(super) fn run_editor_frame(&mut self, editor_input: &FrameInput) {
        let viewport = Rect::from(self.state.modal_layout().editor_viewport);
        let Some(modal) = &mut self.state.modal else {
            return;
        };

        let outcome =
            modal
                .editor
                .process_frame(editor_input, viewport, &mut self.clipboard, &CellMeasure);
        if outcome.text_changed {
            log::trace!("Editor text now {} chars", modal.editor.len());
        }
        modal.tick();
        // Carets blink, so an open modal is redrawn every frame
        self.state.needs_redraw = true;
    }

    /// Validate and write the script; the modal stays open on failure.
    fn save_modal(&mut self) {
        let Some(modal) = &self.state.modal else {
            return;
        };
        let filename = modal.filename.text().trim().to_string();
        if filename.is_empty() {
            self.state.set_error("Filename is empty");
            return;
        }
        if modal.editor.is_empty() {
            self.state.set_error("Script is empty");
            return;
        }

        let original = match &modal.mode {
            ModalMode::Edit { original } => Some(original.clone()),
            ModalMode::Create => None,
        };
        let path = match kort_scripts::write_script(
            &self.state.scripts_dir,
            &filename,
            modal.editor.text(),
        ) {
            Ok(path) => path,
            Err(e) => {
                log::error!("{:#}", e);
                self.state.set_error(format!("Save failed: {}", e));
                return;
            }
        };

        // A rename leaves the old file behind until the new one is written
        if let Some(original) = original.filter(|original| *original != path) {
            if let Err(e) = kort_scripts::delete_script(&original) {
                log::warn!("{:#}", e);
            }
        }

        self.state.modal = None;
        self.state.reload_scripts();
        if let Some(index) = self.state.scripts.iter().position(|s| s.path == path) {
            self.state.select(index);
        }
        self.state.invalidate_preview();
        self.state.set_info(format!("Saved {}", filename));
    }

    /// Discard the modal and its unsaved text
    fn close_modal(&mut self) {
        if let Some(modal) = self.state.modal.take() {
            if modal.editor.is_dirty() {
                log::debug!("Discarded unsaved script text");
            }
        }
        self.state.needs_redraw = true;
    }
}
