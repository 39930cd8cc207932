//! Application shell for kort.
//!
//! Owns the frame loop: terminal events are drained once per frame, applied
//! to either the script list or the open script modal, and the screen is
//! redrawn from [`AppState`].

mod app;
mod event;
mod file_list;
mod filename_field;
mod layout;
mod modal;
mod state;
mod ui;

pub use app::App;
pub use event::{Event, EventHandler};
pub use state::AppState;
