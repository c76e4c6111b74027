//! Button widgets.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Visual kind of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonKind {
    /// Bordered primary action button.
    Primary,
    /// Inline link-style button.
    Link,
}

/// Activatable control rendered as either a bordered button or a link.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    kind: ButtonKind,
    focused: bool,
    enabled: bool,
    accent: Color,
}

impl Button {
    /// Creates a primary button with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ButtonKind::Primary,
            focused: false,
            enabled: true,
            accent: Color::Cyan,
        }
    }

    /// Renders as an inline link instead of a bordered button.
    #[must_use]
    pub const fn link(mut self) -> Self {
        self.kind = ButtonKind::Link;
        self
    }

    /// Sets accent color.
    #[must_use]
    pub const fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Enables or disables activation styling.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn label_style(&self) -> Style {
        if !self.enabled {
            return Style::default().fg(Color::DarkGray);
        }

        match (self.kind, self.focused) {
            (ButtonKind::Primary, true) => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            (ButtonKind::Primary, false) => Style::default().fg(Color::White),
            (ButtonKind::Link, true) => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::UNDERLINED),
            (ButtonKind::Link, false) => Style::default().fg(self.accent),
        }
    }
}

impl Widget for &Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.kind {
            ButtonKind::Primary => {
                let border_style = if !self.enabled {
                    Style::default().fg(Color::DarkGray)
                } else if self.focused {
                    Style::default().fg(self.accent)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style);
                let inner = block.inner(area);
                block.render(area, buf);

                Paragraph::new(self.label.as_str())
                    .style(self.label_style())
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            ButtonKind::Link => {
                Paragraph::new(self.label.as_str())
                    .style(self.label_style())
                    .render(area, buf);
            }
        }
    }
}
