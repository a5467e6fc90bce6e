//! Keyboard and mouse handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Prev,
    Next,
    /// Jump to the review at this zero-based index.
    Dot(usize),
    ToggleLocale,
    Quit,
    None,
}

/// Left-button mouse actions, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press { column: u16, row: u16 },
    Release { column: u16, row: u16 },
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Prev,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Next,
        KeyCode::Char('t') => KeyAction::ToggleLocale,
        KeyCode::Char(c @ '1'..='9') => KeyAction::Dot(c as usize - '1' as usize),
        _ => KeyAction::None,
    }
}

/// Map a mouse event to a pointer action. Only the left button counts.
#[must_use]
pub fn map_mouse(event: MouseEvent) -> Option<PointerAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Press {
            column: event.column,
            row: event.row,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Release {
            column: event.column,
            row: event.row,
        }),
        _ => None,
    }
}
