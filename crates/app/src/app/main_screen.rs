//! Input handling for the script list screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use kort_config::constants::EXECUTING_INDICATOR_FRAMES;

use super::App;
use crate::file_list::RowAction;
use crate::layout::hit;
use crate::modal::ScriptModal;

impl App {
    pub(super) fn handle_main_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let page = self.state.visible_rows().max(1) as isize;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.state.should_quit = true,
            KeyCode::Char('c') if ctrl => self.state.should_quit = true,
            KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('+') => {
                self.open_create_modal()
            }
            KeyCode::Char('o') => self.open_folder(),
            KeyCode::Char('r') | KeyCode::F(5) => {
                self.state.reload_scripts();
                self.state.invalidate_preview();
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection(1),
            KeyCode::PageUp => self.state.move_selection(-page),
            KeyCode::PageDown => self.state.move_selection(page),
            KeyCode::Home => self.state.select(0),
            KeyCode::End => self.state.select(usize::MAX),
            KeyCode::Enter => self.with_selected(RowAction::Run),
            KeyCode::Char('e') => self.with_selected(RowAction::Edit),
            KeyCode::Char('d') | KeyCode::Delete => self.with_selected(RowAction::Delete),
            _ => {}
        }
    }

    pub(super) fn handle_main_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        self.state.mouse = Some((x, y));
        let layout = self.state.main_layout();
        let wheel_lines =
            isize::try_from(self.state.config.editor.wheel_lines).unwrap_or(isize::MAX);

        match mouse.kind {
            MouseEventKind::ScrollUp if hit(layout.list, x, y) => {
                self.state.list.scroll_by(-wheel_lines)
            }
            MouseEventKind::ScrollDown if hit(layout.list, x, y) => {
                self.state.list.scroll_by(wheel_lines)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if hit(layout.add_button, x, y) {
                    self.open_create_modal();
                } else if hit(layout.folder_button, x, y) {
                    self.open_folder();
                } else if let Some((index, action)) =
                    self.state
                        .list
                        .hit(layout.list_inner, self.state.scripts.len(), x, y)
                {
                    self.state.select(index);
                    self.perform(index, action);
                }
            }
            _ => {}
        }
    }

    fn with_selected(&mut self, action: RowAction) {
        if let Some(index) = self.state.list.selected() {
            self.perform(index, action);
        }
    }

    fn perform(&mut self, index: usize, action: RowAction) {
        match action {
            RowAction::Run => self.run_script(index),
            RowAction::Edit => self.open_edit_modal(index),
            RowAction::Delete => self.delete_script(index),
        }
    }

    pub(super) fn open_create_modal(&mut self) {
        self.state.modal = Some(ScriptModal::create(
            self.state.editor_options(),
            self.state.editor_metrics(),
        ));
        log::debug!("Opened new script modal");
    }

    /// Open the modal on an existing script; an unreadable file opens empty.
    pub(super) fn open_edit_modal(&mut self, index: usize) {
        let Some(entry) = self.state.scripts.get(index).cloned() else {
            return;
        };
        let body = match kort_scripts::read_script_body(&entry.path) {
            Some(body) => body,
            None => {
                self.state
                    .set_error(format!("Cannot read {}", entry.file_name()));
                String::new()
            }
        };
        let modal = ScriptModal::edit(
            &entry,
            &body,
            self.state.editor_options(),
            self.state.editor_metrics(),
        );

        // `\r` is dropped silently
        let kept = modal.editor.len();
        let dropped = body
            .chars()
            .filter(|&ch| ch != '\r')
            .count()
            .saturating_sub(kept);
        if dropped > 0 {
            log::warn!(
                "{}: {} characters dropped on load",
                entry.path.display(),
                dropped
            );
            self.state.set_error(format!(
                "{}: {} unsupported characters dropped, saving removes them",
                entry.file_name(),
                dropped
            ));
        }

        self.state.modal = Some(modal);
        log::debug!("Editing {}", entry.path.display());
    }

    fn run_script(&mut self, index: usize) {
        let Some(entry) = self.state.scripts.get_mut(index) else {
            return;
        };
        match kort_scripts::run_in_terminal(&entry.path) {
            Ok(child) => {
                entry.mark_executing(EXECUTING_INDICATOR_FRAMES);
                let message = format!("Launched {}", entry.display_name);
                self.state.children.push(child);
                self.state.set_info(message);
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.state.set_error(format!("Launch failed: {}", e));
            }
        }
    }

    fn delete_script(&mut self, index: usize) {
        let Some(entry) = self.state.scripts.get(index).cloned() else {
            return;
        };
        match kort_scripts::delete_script(&entry.path) {
            Ok(()) => self.state.set_info(format!("Deleted {}", entry.file_name())),
            Err(e) => {
                log::error!("{:#}", e);
                self.state.set_error(format!("Delete failed: {}", e));
            }
        }
        self.state.reload_scripts();
    }

    fn open_folder(&mut self) {
        match kort_scripts::open_folder(&self.state.scripts_dir) {
            Ok(child) => self.state.children.push(child),
            Err(e) => {
                log::error!("{:#}", e);
                self.state.set_error(format!("Cannot open folder: {}", e));
            }
        }
    }
}
