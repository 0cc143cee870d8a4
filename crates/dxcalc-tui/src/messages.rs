//! TUI message types (Elm Messages).

use crate::form::InputMode;
use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Replace the text of one form field.
    SetField { index: usize, value: String },
    /// Switch between count and rate entry.
    SetMode(InputMode),
    /// Log message.
    Log(String),
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}
