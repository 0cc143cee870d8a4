//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    Increment,
    Decrement,
    /// A digit or decimal point typed into the focused field.
    Input(char),
    Backspace,
    ToggleMode,
    TogglePercent,
    ToggleLogs,
    Reset,
    ScrollUp,
    ScrollDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c @ ('0'..='9' | '.')) => KeyAction::Input(c),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Char('+') | KeyCode::Right => KeyAction::Increment,
        KeyCode::Char('-') | KeyCode::Left => KeyAction::Decrement,
        KeyCode::Backspace | KeyCode::Delete => KeyAction::Backspace,
        KeyCode::Char('m') => KeyAction::ToggleMode,
        KeyCode::Char('p') => KeyAction::TogglePercent,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::PageUp => KeyAction::ScrollUp,
        KeyCode::PageDown => KeyAction::ScrollDown,
        _ => KeyAction::None,
    }
}
