//! Pointer input in layout units.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    Press,
    Drag,
    Release,
    /// Wheel movement in notches, positive away from the user (scroll up)
    Wheel(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    /// Shift held (extends the selection on press)
    pub shift: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            x,
            y,
            shift: false,
        }
    }

    /// Convert a terminal mouse event (left button and wheel only).
    pub fn from_mouse_event(event: MouseEvent) -> Option<Self> {
        let kind = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
            MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
            MouseEventKind::ScrollUp => PointerKind::Wheel(1.0),
            MouseEventKind::ScrollDown => PointerKind::Wheel(-1.0),
            _ => return None,
        };
        Some(Self {
            kind,
            x: event.column as f32,
            y: event.row as f32,
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 4,
            modifiers,
        }
    }

    #[test]
    fn test_mouse_conversion() {
        let press = PointerEvent::from_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Left),
            KeyModifiers::SHIFT,
        ))
        .unwrap();
        assert_eq!(press.kind, PointerKind::Press);
        assert_eq!((press.x, press.y), (12.0, 4.0));
        assert!(press.shift);

        let wheel =
            PointerEvent::from_mouse_event(mouse(MouseEventKind::ScrollDown, KeyModifiers::NONE))
                .unwrap();
        assert_eq!(wheel.kind, PointerKind::Wheel(-1.0));
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        assert!(PointerEvent::from_mouse_event(mouse(
            MouseEventKind::Down(MouseButton::Right),
            KeyModifiers::NONE
        ))
        .is_none());
        assert!(
            PointerEvent::from_mouse_event(mouse(MouseEventKind::Moved, KeyModifiers::NONE))
                .is_none()
        );
    }
}
