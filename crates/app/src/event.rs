//! Terminal event polling.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Application event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press or auto-repeat
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
}

impl Event {
    /// Keep the events the application reacts to.
    ///
    /// Key releases (reported under the kitty keyboard protocol), focus changes
    /// and bracketed pastes are dropped.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            _ => None,
        }
    }
}

/// Collects terminal events frame by frame
pub struct EventHandler {
    frame: Duration,
}

impl EventHandler {
    /// Create new event handler with specified frame length
    pub fn new(frame: Duration) -> Self {
        Self { frame }
    }

    /// Wait out one frame and return every event that arrived during it.
    pub fn next_frame(&self) -> Result<Vec<Event>> {
        let deadline = Instant::now() + self.frame;
        let mut events = Vec::new();
        while event::poll(deadline.saturating_duration_since(Instant::now()))? {
            if let Some(event) = Event::from_crossterm(event::read()?) {
                events.push(event);
            }
        }
        Ok(events)
    }
}
