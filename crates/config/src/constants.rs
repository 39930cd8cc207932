//! Fixed application limits and timings.
//!
//! Unlike the values in [`crate::defaults`], these are not user-configurable.

/// Entries kept in the in-memory log ring
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Duration of one frame of the application loop
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Maximum characters in a script file name
pub const MAX_FILENAME_CHARS: usize = 50;

/// Frames a launched script stays highlighted in the list
pub const EXECUTING_INDICATOR_FRAMES: u32 = 30;

/// Frames a status line message stays visible
pub const STATUS_MESSAGE_FRAMES: u32 = 180;

/// Directory name used next to the executable when no scripts directory is configured
pub const SCRIPTS_DIR_NAME: &str = "scripts";
