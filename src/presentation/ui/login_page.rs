//! Sign-in page.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::layout::CenterLayout;
use super::login_form::LoginForm;

/// The sign-in page: a centering shell around exactly one form.
///
/// Adds no behavior of its own; rendering the same form twice produces the
/// same buffer.
pub struct LoginPage<'a> {
    form: &'a LoginForm,
    layout: CenterLayout,
}

impl<'a> LoginPage<'a> {
    /// Composes the page around a form.
    #[must_use]
    pub fn new(form: &'a LoginForm) -> Self {
        Self {
            form,
            layout: CenterLayout::new(LoginForm::MIN_WIDTH, LoginForm::HEIGHT),
        }
    }

    /// Overrides the centering shell, keeping the same form.
    #[must_use]
    pub const fn layout(mut self, layout: CenterLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl Widget for &LoginPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self.layout).render(area, buf);
        self.form.render(self.layout.content_area(area), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::Theme;

    fn render_page(form: &LoginForm) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        LoginPage::new(form).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let form = LoginForm::new(Theme::default());

        let first = render_page(&form);
        let second = render_page(&form);

        assert_eq!(first, second);
    }

    #[test]
    fn test_page_renders_form_content() {
        let form = LoginForm::new(Theme::default());
        let buf = render_page(&form);

        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }

        assert!(text.contains("Welcome"));
        assert!(text.contains("Email Address"));
        assert!(text.contains("Password"));
    }
}
