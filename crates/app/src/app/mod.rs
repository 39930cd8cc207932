//! Main application module.
//!
//! Contains the App struct and the frame loop.

use std::time::Duration;

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use kort_clipboard::AppClipboard;
use kort_config::constants::FRAME_INTERVAL_MS;
use kort_config::Config;
use kort_editor::FrameInput;
use kort_theme::Theme;

use crate::event::{Event, EventHandler};
use crate::state::AppState;
use crate::ui;

mod main_screen;
mod modal_handler;

/// Main application
pub struct App {
    state: AppState,
    event_handler: EventHandler,
    clipboard: AppClipboard,
}

impl App {
    /// Create a new application
    pub fn new(config: Config, theme: &'static Theme) -> Self {
        let state = AppState::new(config, theme);
        log::info!(
            "Scripts directory: {} ({} scripts)",
            state.scripts_dir.display(),
            state.scripts.len()
        );
        Self {
            state,
            event_handler: EventHandler::new(Duration::from_millis(FRAME_INTERVAL_MS)),
            clipboard: AppClipboard::detect(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.state.resize(size.width, size.height);

        while !self.state.should_quit {
            let events = self.event_handler.next_frame()?;
            self.process_frame(events);

            if self.state.needs_redraw {
                terminal.draw(|frame| ui::render(frame, &self.state))?;
                self.state.needs_redraw = false;
            }
        }

        log::info!("Application closed");
        Ok(())
    }

    /// Apply one frame of input, then advance the frame timers.
    ///
    /// Input takes effect in arrival order and before the frame is drawn.
    fn process_frame(&mut self, events: Vec<Event>) {
        let mut editor_input = FrameInput::default();
        let mut editor_ran = false;

        for event in events {
            self.state.needs_redraw = true;
            match event {
                Event::Resize(width, height) => self.state.resize(width, height),
                event if self.state.modal.is_some() => {
                    if let Some(action) = self.handle_modal_event(event, &mut editor_input) {
                        // Editor input queued earlier in the frame goes first
                        self.run_editor_frame(&std::mem::take(&mut editor_input));
                        editor_ran = true;
                        self.apply_modal_action(action);
                    }
                }
                Event::Key(key) => self.handle_main_key(key),
                Event::Mouse(mouse) => self.handle_main_mouse(mouse),
            }
        }

        if !editor_ran || !editor_input.is_empty() {
            self.run_editor_frame(&editor_input);
        }

        if self.state.tick() {
            self.state.needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use kort_clipboard::MemoryClipboard;
    use kort_scripts::Platform;
    use std::fs;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let mut config = Config::default();
        config.scripts.directory = Some(dir.path().display().to_string());
        let mut app = App {
            state: AppState::new(config, Theme::get_by_name("default")),
            event_handler: EventHandler::new(Duration::from_millis(FRAME_INTERVAL_MS)),
            clipboard: AppClipboard::Memory(MemoryClipboard::new()),
        };
        app.process_frame(vec![Event::Resize(100, 30)]);
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    fn typed(text: &str) -> Vec<Event> {
        text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn wheel(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn script_path(dir: &TempDir, name: &str) -> std::path::PathBuf {
        dir.path()
            .join(format!("{}{}", name, Platform::current().default_extension()))
    }

    #[test]
    fn test_create_and_save_script() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.process_frame(vec![key(KeyCode::Char('a'))]);
        assert!(app.state().modal.is_some());

        app.process_frame(typed("hello"));
        let mut events = vec![key(KeyCode::Tab)];
        events.extend(typed("echo hi"));
        app.process_frame(events);
        app.process_frame(vec![ctrl('s')]);

        assert!(app.state().modal.is_none());
        let path = script_path(&dir, "hello");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{}\necho hi\n", Platform::current().header())
        );
        assert_eq!(app.state().scripts.len(), 1);
        let status = app.state().status.as_ref().unwrap();
        assert_eq!(status.text, "Saved hello");
        assert!(!status.is_error);
    }

    #[test]
    fn test_invalid_save_keeps_modal_open() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('n'))]);

        app.process_frame(vec![ctrl('s')]);
        assert!(app.state().modal.is_some());
        assert_eq!(app.state().status.as_ref().unwrap().text, "Filename is empty");

        app.process_frame(typed("name"));
        app.process_frame(vec![ctrl('s')]);
        assert!(app.state().modal.is_some());
        assert_eq!(app.state().status.as_ref().unwrap().text, "Script is empty");
        assert!(app.state().scripts.is_empty());
    }

    #[test]
    fn test_escape_discards_modal() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('a'))]);
        app.process_frame(typed("draft"));
        app.process_frame(vec![key(KeyCode::Esc)]);

        assert!(app.state().modal.is_none());
        assert!(!app.state().should_quit);
        assert!(app.state().scripts.is_empty());
    }

    #[test]
    fn test_edit_with_rename_replaces_file() {
        let dir = TempDir::new().unwrap();
        let old = script_path(&dir, "old");
        fs::write(&old, format!("{}\nuptime\n", Platform::current().header())).unwrap();
        let mut app = app_in(&dir);

        app.process_frame(vec![key(KeyCode::Char('e'))]);
        let modal = app.state().modal.as_ref().unwrap();
        assert_eq!(modal.filename.text(), "old");
        assert_eq!(modal.editor.text(), "uptime");

        let mut events = vec![key(KeyCode::Backspace); 3];
        events.extend(typed("new"));
        app.process_frame(events);
        app.process_frame(vec![ctrl('s')]);

        assert!(!old.exists());
        assert!(script_path(&dir, "new").exists());
        assert_eq!(app.state().scripts.len(), 1);
        assert_eq!(app.state().preview.as_ref().unwrap().body, "uptime");
    }

    #[test]
    fn test_mouse_buttons() {
        let dir = TempDir::new().unwrap();
        fs::write(script_path(&dir, "gone"), "ls\n").unwrap();
        let mut app = app_in(&dir);

        // [X] on the first row (list rows span columns 1..59)
        app.process_frame(vec![click(56, 2)]);
        assert!(app.state().scripts.is_empty());
        assert!(!script_path(&dir, "gone").exists());

        let add = app.state().main_layout().add_button;
        app.process_frame(vec![click(add.x, add.y)]);
        assert!(app.state().modal.is_some());

        let layout = app.state().modal_layout();
        app.process_frame(vec![click(layout.editor_viewport.x + 8, layout.editor_viewport.y)]);
        assert_eq!(
            app.state().modal.as_ref().unwrap().focus,
            crate::modal::ModalFocus::Editor
        );

        app.process_frame(vec![click(layout.cancel_button.x, layout.cancel_button.y)]);
        assert!(app.state().modal.is_none());
    }

    #[test]
    fn test_type_and_save_in_one_frame() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let mut events = vec![key(KeyCode::Char('a'))];
        events.extend(typed("quick"));
        events.push(key(KeyCode::Tab));
        events.extend(typed("echo hi"));
        events.push(ctrl('s'));
        events.push(key(KeyCode::Char('q')));
        app.process_frame(events);

        assert!(app.state().modal.is_none());
        assert_eq!(
            fs::read_to_string(script_path(&dir, "quick")).unwrap(),
            format!("{}\necho hi\n", Platform::current().header())
        );
        // Keys after the save reach the list screen
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_failed_save_keeps_later_typing() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('a'))]);

        let mut events = typed("f");
        events.push(key(KeyCode::Tab));
        events.push(ctrl('s'));
        events.extend(typed("ls"));
        app.process_frame(events);

        let modal = app.state().modal.as_ref().unwrap();
        assert_eq!(modal.editor.text(), "ls");
        assert_eq!(app.state().status.as_ref().unwrap().text, "Script is empty");
    }

    #[test]
    fn test_cancel_in_one_frame_then_reopen() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('a'))]);

        let mut events = vec![key(KeyCode::Tab)];
        events.extend(typed("rm -rf"));
        events.push(key(KeyCode::Esc));
        events.push(key(KeyCode::Char('n')));
        app.process_frame(events);

        let modal = app.state().modal.as_ref().unwrap();
        assert!(modal.editor.is_empty());
        assert!(modal.filename.is_empty());
        assert!(app.state().scripts.is_empty());
    }

    #[test]
    fn test_tab_switches_target_within_frame() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('a'))]);

        app.process_frame(vec![
            key(KeyCode::Tab),
            key(KeyCode::Char('x')),
            key(KeyCode::BackTab),
            key(KeyCode::Char('y')),
        ]);

        let modal = app.state().modal.as_ref().unwrap();
        assert_eq!(modal.editor.text(), "x");
        assert_eq!(modal.filename.text(), "y");
    }

    #[test]
    fn test_wheel_scrolls_editor_only_when_focused() {
        let dir = TempDir::new().unwrap();
        let body: Vec<String> = (0..60).map(|i| format!("echo {}", i)).collect();
        fs::write(
            script_path(&dir, "long"),
            format!("{}\n{}\n", Platform::current().header(), body.join("\n")),
        )
        .unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('e'))]);
        app.process_frame(Vec::new());

        let offset = |app: &App| app.state().modal.as_ref().unwrap().editor.scroll().offset();
        let followed = offset(&app);
        assert!(followed > 0.0);

        let viewport = app.state().modal_layout().editor_viewport;
        let (x, y) = (viewport.x + 8, viewport.y + 1);
        app.process_frame(vec![wheel(MouseEventKind::ScrollUp, x, y)]);
        assert_eq!(offset(&app), followed);

        app.process_frame(vec![click(x, y), wheel(MouseEventKind::ScrollUp, x, y)]);
        assert!(offset(&app) < followed);
    }

    #[test]
    fn test_list_wheel_scrolls_rows() {
        let dir = TempDir::new().unwrap();
        for i in 0..40 {
            fs::write(script_path(&dir, &format!("s{:02}", i)), "ls\n").unwrap();
        }
        let mut app = app_in(&dir);
        assert_eq!(app.state().list.offset(), 0);

        app.process_frame(vec![wheel(MouseEventKind::ScrollDown, 5, 5)]);
        assert_eq!(app.state().list.offset(), 3);
        app.process_frame(vec![wheel(MouseEventKind::ScrollUp, 5, 5)]);
        assert_eq!(app.state().list.offset(), 0);
    }

    #[test]
    fn test_edit_warns_about_dropped_characters() {
        let dir = TempDir::new().unwrap();
        fs::write(
            script_path(&dir, "greet"),
            format!("{}\necho h\u{e9}llo\n", Platform::current().header()),
        )
        .unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('e'))]);

        assert_eq!(
            app.state().modal.as_ref().unwrap().editor.text(),
            "echo hllo"
        );
        let status = app.state().status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("1 unsupported characters dropped"));
    }

    #[test]
    fn test_quit_key() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.process_frame(vec![key(KeyCode::Char('q'))]);
        assert!(app.state().should_quit);
    }
}
