//! Centering layout shell.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
};

/// Full-area shell that centers a fixed-size content box.
///
/// Purely structural: fills its whole area with a background style and
/// computes a centered rectangle for arbitrary content. Holds no state.
#[derive(Debug, Clone, Copy)]
pub struct CenterLayout {
    background: Style,
    content_width: u16,
    content_height: u16,
}

impl CenterLayout {
    /// Creates a shell for content of the given minimum size.
    #[must_use]
    pub fn new(content_width: u16, content_height: u16) -> Self {
        Self {
            background: Style::default(),
            content_width,
            content_height,
        }
    }

    /// Overrides the background style.
    #[must_use]
    pub const fn style(mut self, background: Style) -> Self {
        self.background = background;
        self
    }

    /// Returns the centered content rectangle within `area`.
    #[must_use]
    pub fn content_area(&self, area: Rect) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(self.content_height),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(self.content_width),
            Constraint::Fill(1),
        ]);
        let [_, content, _] = horizontal.areas(center);

        content
    }
}

impl Widget for &CenterLayout {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(self.background).render(area, buf);
    }
}
