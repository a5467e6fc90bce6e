//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use vitrine_core::position::Position;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub star: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            star: Color::Yellow,
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
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn star_style(&self) -> Style {
        Style::default().fg(self.star)
    }

    /// Active language button.
    #[must_use]
    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Text style for a card at `position`.
    #[must_use]
    pub fn card_style(&self, position: Position) -> Style {
        match position {
            Position::Center => Style::default().fg(self.text).add_modifier(Modifier::BOLD),
            Position::Left | Position::Right | Position::Hidden => self.muted_style(),
        }
    }

    /// Border style for a card at `position`.
    #[must_use]
    pub fn border_style(&self, position: Position) -> Style {
        match position {
            Position::Center => Style::default().fg(self.primary),
            Position::Left | Position::Right | Position::Hidden => Style::default().fg(self.border),
        }
    }
}
