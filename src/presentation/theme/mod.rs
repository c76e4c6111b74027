//! Theme definitions.

use std::str::FromStr;

use ratatui::style::{Color, Style};
use tracing::warn;

/// Resolved styles shared by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for focused controls and borders.
    pub accent: Color,
    /// Style for error messages.
    pub error_style: Style,
    /// Style for de-emphasized text and disabled controls.
    pub dimmed_style: Style,
    /// Style for regular text.
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(Color::Cyan)
    }
}

impl Theme {
    /// Builds a theme from an accent color name or hex code.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme from a resolved accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            error_style: Style::default().fg(Color::Red),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
        }
    }
}

fn parse_color(s: &str) -> Color {
    Color::from_str(s).unwrap_or_else(|_| {
        warn!(value = %s, "Unrecognized accent color, falling back to cyan");
        Color::Cyan
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        let theme = Theme::new("magenta");
        assert_eq!(theme.accent, Color::Magenta);
    }

    #[test]
    fn test_hex_color() {
        let theme = Theme::new("#ff8700");
        assert_eq!(theme.accent, Color::Rgb(255, 135, 0));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let theme = Theme::new("not-a-color");
        assert_eq!(theme.accent, Color::Cyan);
    }
}
