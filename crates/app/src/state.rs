//! Application state.

use std::path::PathBuf;
use std::process::Child;

use ratatui::layout::Rect;

use kort_config::constants::STATUS_MESSAGE_FRAMES;
use kort_config::Config;
use kort_editor::{EditorMetrics, EditorOptions};
use kort_scripts::{Platform, ScriptEntry};
use kort_theme::Theme;

use crate::file_list::ScrollableList;
use crate::layout::{MainLayout, ModalLayout};
use crate::modal::ScriptModal;

/// Message shown in the status line for a limited number of frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    frames_left: u32,
}

/// Body of the selected script shown next to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub path: PathBuf,
    pub body: String,
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
    /// Current theme
    pub theme: &'static Theme,
    /// Application configuration
    pub config: Config,
    pub platform: Platform,
    pub scripts_dir: PathBuf,
    /// Scripts sorted by file name
    pub scripts: Vec<ScriptEntry>,
    pub list: ScrollableList,
    pub preview: Option<Preview>,
    /// Open create/edit modal
    pub modal: Option<ScriptModal>,
    pub status: Option<StatusMessage>,
    /// Terminal area
    pub screen: Rect,
    /// Last known mouse cell (hover highlight)
    pub mouse: Option<(u16, u16)>,
    /// Launched terminals and file managers not yet reaped
    pub children: Vec<Child>,
}

impl AppState {
    /// Create state for `config`, creating and listing the scripts directory.
    pub fn new(config: Config, theme: &'static Theme) -> Self {
        let scripts_dir = config.scripts_dir();
        let mut state = Self {
            should_quit: false,
            needs_redraw: true,
            theme,
            config,
            platform: Platform::current(),
            scripts_dir,
            scripts: Vec::new(),
            list: ScrollableList::new(),
            preview: None,
            modal: None,
            status: None,
            screen: Rect::default(),
            mouse: None,
            children: Vec::new(),
        };

        if let Err(e) = kort_scripts::ensure_scripts_dir(&state.scripts_dir) {
            log::error!("{:#}", e);
            state.set_error(format!("{:#}", e));
        }
        state.reload_scripts();
        state
    }

    /// Re-read the scripts directory.
    ///
    /// Launch highlights survive for scripts that are still present.
    pub fn reload_scripts(&mut self) {
        let mut scripts = kort_scripts::list_scripts(&self.scripts_dir);
        for script in &mut scripts {
            if let Some(old) = self.scripts.iter().find(|old| old.path == script.path) {
                script.executing_frames = old.executing_frames;
            }
        }
        self.scripts = scripts;
        log::debug!(
            "Listed {} scripts in {}",
            self.scripts.len(),
            self.scripts_dir.display()
        );
        self.sync_list();
        self.needs_redraw = true;
    }

    /// Update terminal dimensions
    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        self.sync_list();
        self.needs_redraw = true;
    }

    pub fn main_layout(&self) -> MainLayout {
        MainLayout::new(self.screen)
    }

    /// Modal geometry (the status line stays visible below the modal)
    pub fn modal_layout(&self) -> ModalLayout {
        let area = Rect {
            height: self.screen.height.saturating_sub(1),
            ..self.screen
        };
        ModalLayout::new(area)
    }

    /// Number of list rows on screen
    pub fn visible_rows(&self) -> usize {
        usize::from(self.main_layout().list_inner.height)
    }

    /// Clamp the list to the current scripts and screen size
    pub fn sync_list(&mut self) {
        let visible = self.visible_rows();
        self.list.set_content(self.scripts.len(), visible);
        self.refresh_preview();
    }

    pub fn select(&mut self, index: usize) {
        let visible = self.visible_rows();
        self.list.select(index, self.scripts.len(), visible);
        self.refresh_preview();
        self.needs_redraw = true;
    }

    pub fn move_selection(&mut self, delta: isize) {
        let visible = self.visible_rows();
        self.list.move_selection(delta, self.scripts.len(), visible);
        self.refresh_preview();
        self.needs_redraw = true;
    }

    pub fn selected_script(&self) -> Option<&ScriptEntry> {
        self.list.selected().and_then(|index| self.scripts.get(index))
    }

    /// Load the body of the selected script unless it is already shown
    pub fn refresh_preview(&mut self) {
        let Some(path) = self.selected_script().map(|entry| entry.path.clone()) else {
            self.preview = None;
            return;
        };
        if self.preview.as_ref().is_some_and(|preview| preview.path == path) {
            return;
        }
        let body = kort_scripts::read_script_body(&path).unwrap_or_default();
        self.preview = Some(Preview { path, body });
    }

    /// Drop the cached preview so the next refresh re-reads the file
    pub fn invalidate_preview(&mut self) {
        self.preview = None;
        self.refresh_preview();
    }

    /// Editor behaviour from the configuration
    pub fn editor_options(&self) -> EditorOptions {
        let editor = &self.config.editor;
        EditorOptions {
            capacity: editor.max_chars,
            undo_depth: editor.undo_depth,
            manual_scroll_frames: editor.manual_scroll_frames,
            line_numbers: editor.line_numbers,
        }
    }

    /// Terminal editor metrics adjusted by the configuration
    pub fn editor_metrics(&self) -> EditorMetrics {
        let editor = &self.config.editor;
        EditorMetrics {
            wheel_step: f32::from(editor.wheel_lines),
            blink_frames: editor.blink_frames,
            tab_width: editor.tab_width,
            ..EditorMetrics::terminal()
        }
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), false);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(text.into(), true);
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage {
            text,
            is_error,
            frames_left: STATUS_MESSAGE_FRAMES,
        });
        self.needs_redraw = true;
    }

    /// Fixed part of the status line
    pub fn summary(&self) -> String {
        format!(
            "{} | Scripts: {} | Format: {}",
            self.platform.name(),
            self.scripts.len(),
            self.platform.default_extension()
        )
    }

    /// Advance frame timers; returns `true` if anything visible changed.
    pub fn tick(&mut self) -> bool {
        if !self.children.is_empty() {
            kort_scripts::reap_finished(&mut self.children);
        }
        let mut changed = false;
        for script in &mut self.scripts {
            if script.is_executing() {
                script.tick();
                changed |= !script.is_executing();
            }
        }
        if let Some(status) = &mut self.status {
            status.frames_left = status.frames_left.saturating_sub(1);
            if status.frames_left == 0 {
                self.status = None;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        let mut config = Config::default();
        config.scripts.directory = Some(dir.path().join("scripts").display().to_string());
        let mut state = AppState::new(config, Theme::get_by_name("default"));
        state.resize(100, 30);
        state
    }

    #[test]
    fn test_new_creates_scripts_dir() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);
        assert!(dir.path().join("scripts").is_dir());
        assert!(state.scripts.is_empty());
        assert_eq!(state.list.selected(), None);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_reload_selects_and_previews() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        let header = state.platform.header();
        fs::write(
            state.scripts_dir.join("b.sh"),
            format!("{}\necho b\n", header),
        )
        .unwrap();
        fs::write(
            state.scripts_dir.join("a.sh"),
            format!("{}\necho a\n", header),
        )
        .unwrap();

        state.reload_scripts();
        assert_eq!(state.scripts.len(), 2);
        assert_eq!(state.selected_script().unwrap().display_name, "a");
        assert_eq!(state.preview.as_ref().unwrap().body, "echo a");

        state.move_selection(1);
        assert_eq!(state.preview.as_ref().unwrap().body, "echo b");
    }

    #[test]
    fn test_reload_keeps_launch_highlight() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        fs::write(state.scripts_dir.join("run.sh"), "ls\n").unwrap();
        state.reload_scripts();
        state.scripts[0].mark_executing(5);

        fs::write(state.scripts_dir.join("other.sh"), "pwd\n").unwrap();
        state.reload_scripts();
        let run = state.scripts.iter().find(|s| s.display_name == "run").unwrap();
        assert_eq!(run.executing_frames, 5);
    }

    #[test]
    fn test_tick_expires_highlight_and_status() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        fs::write(state.scripts_dir.join("run.sh"), "ls\n").unwrap();
        state.reload_scripts();
        state.scripts[0].mark_executing(2);

        assert!(!state.tick());
        assert!(state.tick());
        assert!(!state.scripts[0].is_executing());

        state.set_error("Save failed");
        for _ in 1..STATUS_MESSAGE_FRAMES {
            state.tick();
        }
        assert!(state.status.as_ref().unwrap().is_error);
        assert!(state.tick());
        assert!(state.status.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_tick_reaps_exited_children() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        let child = std::process::Command::new("true").spawn().unwrap();
        state.children.push(child);

        for _ in 0..200 {
            state.tick();
            if state.children.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(state.children.is_empty());
    }

    #[test]
    fn test_summary_line() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        fs::write(state.scripts_dir.join("x.sh"), "ls\n").unwrap();
        state.reload_scripts();
        let platform = Platform::current();
        assert_eq!(
            state.summary(),
            format!(
                "{} | Scripts: 1 | Format: {}",
                platform.name(),
                platform.default_extension()
            )
        );
    }

    #[test]
    fn test_editor_settings_follow_config() {
        let dir = TempDir::new().unwrap();
        let mut state = state_in(&dir);
        state.config.editor.max_chars = 120;
        state.config.editor.wheel_lines = 5;
        state.config.editor.line_numbers = false;

        let options = state.editor_options();
        assert_eq!(options.capacity, 120);
        assert!(!options.line_numbers);
        assert_eq!(state.editor_metrics().wheel_step, 5.0);
        assert_eq!(state.editor_metrics().line_height, 1.0);
    }

    #[test]
    fn test_modal_layout_leaves_status_line() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);
        let layout = state.modal_layout();
        assert!(layout.frame.bottom() <= 29);
    }
}
