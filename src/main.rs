use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::str::FromStr;

use kort_app::App;
use kort_config::constants::MAX_LOG_ENTRIES;
use kort_config::Config;
use kort_logger::LogLevel;
use kort_theme::{set_themes_dir, Theme};

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {:#}. Using defaults.", e);
        Config::default()
    });

    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    match config.log_file_path() {
        Ok(path) => kort_logger::init(path, MAX_LOG_ENTRIES, min_level),
        Err(e) => eprintln!("Warning: Logging disabled: {:#}", e),
    }
    log::info!("kort {} started", env!("CARGO_PKG_VERSION"));

    // Initialize theme system with themes directory from config
    if let Ok(themes_dir) = Config::get_themes_dir() {
        set_themes_dir(themes_dir);
    }
    let theme = Theme::get_by_name(&config.general.theme);

    let mut app = App::new(config, theme);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Print error if there was one
    if let Err(err) = result {
        log::error!("{:#}", err);
        for entry in kort_logger::get_entries()
            .iter()
            .filter(|entry| entry.level >= LogLevel::Warn)
        {
            eprintln!("[{}] {}: {}", entry.timestamp, entry.level.to_str(), entry.message);
        }
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
