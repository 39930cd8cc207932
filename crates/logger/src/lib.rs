//! Logging infrastructure for kort.
//!
//! Entries go to a log file (truncated at startup) and to a bounded in-memory
//! ring. The logger is installed as the backend of the `log` facade, so the
//! other crates log with `log::info!` and friends.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    /// Message level
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Matching filter for the `log` facade
    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    /// Last N entries
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    min_level: LogLevel,
    file_path: PathBuf,
}

impl Logger {
    fn new(file_path: PathBuf, max_entries: usize, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Clear log file on startup
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== kort log start ===");
        }

        Self {
            entries: VecDeque::with_capacity(max_entries.min(256)),
            max_entries,
            min_level,
            file_path,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();

        // Write to file (create if deleted)
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }

        self.entries.push_back(LogEntry {
            timestamp,
            level,
            message,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// `log` facade adapter forwarding records to the global logger
struct FacadeLogger;

static FACADE: FacadeLogger = FacadeLogger;

impl log::Log for FacadeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LOGGER
            .get()
            .and_then(|logger| logger.lock().ok())
            .map(|logger| LogLevel::from(metadata.level()) >= logger.min_level)
            .unwrap_or(false)
    }

    fn log(&self, record: &log::Record) {
        let message = match record.module_path() {
            Some(module) => format!("{} [{}]", record.args(), module),
            None => record.args().to_string(),
        };
        with_logger(|logger| logger.add_entry(record.level().into(), message));
    }

    fn flush(&self) {}
}

fn with_logger(f: impl FnOnce(&mut Logger)) {
    if let Some(Ok(mut logger)) = LOGGER.get().map(|logger| logger.lock()) {
        f(&mut logger);
    }
}

/// Initialize the global logger and install it as the `log` backend.
///
/// Subsequent calls are ignored. Logging before `init` is silently dropped.
///
/// # Arguments
///
/// * `file_path` - Path to the log file
/// * `max_entries` - Maximum number of log entries to keep in memory
/// * `min_level` - Minimum log level to record
pub fn init(file_path: PathBuf, max_entries: usize, min_level: LogLevel) {
    let mut first = false;
    LOGGER.get_or_init(|| {
        first = true;
        Mutex::new(Logger::new(file_path, max_entries, min_level))
    });
    if first && log::set_logger(&FACADE).is_ok() {
        log::set_max_level(min_level.to_level_filter());
    }
}

/// Get all log entries currently stored in memory.
pub fn get_entries() -> Vec<LogEntry> {
    LOGGER
        .get()
        .and_then(|logger| logger.lock().ok())
        .map(|logger| logger.entries.iter().cloned().collect())
        .unwrap_or_default()
}
