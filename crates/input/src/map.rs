//! Event mapping from terminal events to pointer events and commands.

use crate::types::PointerEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Session-level commands bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Restart,
}

/// Map a mouse event to a pointer event (left button only).
///
/// Coordinates are terminal columns and rows. Drags are ignored; the release
/// that ends a drag is what confirms a swap.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    let x = i32::from(mouse.column);
    let y = i32::from(mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Release { x, y }),
        _ => None,
    }
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
