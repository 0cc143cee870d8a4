//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Condition (+) red, `#ef4444`.
pub const CONDITION_POSITIVE: Color = Color::Rgb(0xef, 0x44, 0x44);
/// Condition (-) green, `#22c55e`.
pub const CONDITION_NEGATIVE: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub focus: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            positive: CONDITION_POSITIVE,
            negative: CONDITION_NEGATIVE,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            focus: Color::Yellow,
        }
    }
}

impl ColorTheme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style of the field that has keyboard focus.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.focus)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn positive_style(&self) -> Style {
        Style::default().fg(self.positive)
    }

    #[must_use]
    pub fn negative_style(&self) -> Style {
        Style::default().fg(self.negative)
    }
}
