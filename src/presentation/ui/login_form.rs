//! Sign-in form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::entities::Credentials;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Button, TextInput};

const REQUIRED_FIELDS_ERROR: &str = "Email and password are required.";

const FORGOT_PASSWORD_LABEL: &str = "Forgot Password";
const SIGN_UP_LABEL: &str = "Sign up";

/// Lifecycle state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Interactive; accepting edits and submission.
    Idle,
    /// A credential check is in flight; every control is disabled.
    Submitting,
}

/// Interactive controls in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    /// Email text input.
    Email,
    /// Password text input.
    Password,
    /// Forgot-password link.
    ForgotPassword,
    /// Sign-in button.
    Submit,
    /// Sign-up link.
    SignUp,
}

impl FormControl {
    const TRAVERSAL: [Self; 5] = [
        Self::Email,
        Self::Password,
        Self::ForgotPassword,
        Self::Submit,
        Self::SignUp,
    ];

    fn next(self) -> Self {
        let index = Self::TRAVERSAL.iter().position(|c| *c == self).unwrap_or(0);
        Self::TRAVERSAL[(index + 1) % Self::TRAVERSAL.len()]
    }

    fn previous(self) -> Self {
        let index = Self::TRAVERSAL.iter().position(|c| *c == self).unwrap_or(0);
        Self::TRAVERSAL[(index + Self::TRAVERSAL.len() - 1) % Self::TRAVERSAL.len()]
    }
}

/// Action requested by a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing to do.
    None,
    /// Submit the form.
    Submit,
    /// Forgot-password link activated.
    ForgotPassword,
    /// Sign-up link activated.
    SignUp,
}

/// Sign-in form UI.
///
/// Owns the field values, the loading flag, and the error message. Layout
/// and page composition around it carry no state of their own.
pub struct LoginForm {
    email: TextInput,
    password: TextInput,
    focus: FormControl,
    state: FormState,
    error: Option<String>,
    theme: Theme,
}

impl LoginForm {
    /// Rendered height including the surrounding border.
    pub const HEIGHT: u16 = 14;
    /// Minimum rendered width.
    pub const MIN_WIDTH: u16 = 50;

    /// Creates a new form with both fields empty.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut email = TextInput::new("Email Address")
            .placeholder("you@example.com")
            .accent(theme.accent);
        email.set_focused(true);

        let password = TextInput::new("Password").password().accent(theme.accent);

        Self {
            email,
            password,
            focus: FormControl::Email,
            state: FormState::Idle,
            error: None,
            theme,
        }
    }

    /// Returns current state.
    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Returns the focused control.
    #[must_use]
    pub const fn focus(&self) -> FormControl {
        self.focus
    }

    /// Returns the email field value.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.value()
    }

    /// Returns the password field value.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.value()
    }

    /// Returns the current error message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a submit attempt.
    ///
    /// Clears any previous error, then validates that both fields are
    /// non-empty after trimming. On success the form enters the submitting
    /// state and the credentials are returned; on validation failure the
    /// error is recorded and the form stays interactive.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        self.error = None;

        match Credentials::new(self.email.value(), self.password.value()) {
            Some(credentials) => {
                self.state = FormState::Submitting;
                self.sync_controls();
                Some(credentials)
            }
            None => {
                self.error = Some(REQUIRED_FIELDS_ERROR.to_string());
                None
            }
        }
    }

    /// Leaves the submitting state.
    ///
    /// Field values are kept as-is; a successful sign-in does not clear
    /// them.
    pub fn finish_submit(&mut self) {
        self.state = FormState::Idle;
        self.sync_controls();
    }

    /// Sets the error message shown under the fields.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Handles key event, returns the requested action.
    ///
    /// While a submit is in flight all keys are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if self.state == FormState::Submitting {
            return FormAction::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Enter => {
                return match self.focus {
                    FormControl::Email | FormControl::Password | FormControl::Submit => {
                        FormAction::Submit
                    }
                    FormControl::ForgotPassword => FormAction::ForgotPassword,
                    FormControl::SignUp => FormAction::SignUp,
                };
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.focused_input_mut() {
                    input.input_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input_mut() {
                    input.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(input) = self.focused_input_mut() {
                    input.delete();
                }
            }
            KeyCode::Left => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_start();
                }
            }
            KeyCode::End => {
                if let Some(input) = self.focused_input_mut() {
                    input.move_end();
                }
            }
            _ => {}
        }

        FormAction::None
    }

    fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.sync_controls();
    }

    fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        self.sync_controls();
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormControl::Email => Some(&mut self.email),
            FormControl::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn sync_controls(&mut self) {
        let enabled = self.state == FormState::Idle;
        self.email.set_enabled(enabled);
        self.password.set_enabled(enabled);
        self.email
            .set_focused(enabled && self.focus == FormControl::Email);
        self.password
            .set_focused(enabled && self.focus == FormControl::Password);
    }

    fn control_focused(&self, control: FormControl) -> bool {
        self.state == FormState::Idle && self.focus == control
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(" Welcome ");

        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ]);
        let areas = layout.areas::<6>(inner);

        (&self.email).render(areas[0], buf);
        (&self.password).render(areas[1], buf);

        if let Some(ref message) = self.error {
            Paragraph::new(Line::from(Span::styled(
                message.as_str(),
                self.theme.error_style,
            )))
            .render(areas[2], buf);
        }

        let forgot_width = u16::try_from(FORGOT_PASSWORD_LABEL.len()).unwrap_or(0);
        let [_, forgot_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(forgot_width)])
                .areas(areas[3]);
        let forgot = Button::new(FORGOT_PASSWORD_LABEL)
            .link()
            .accent(self.theme.accent)
            .focused(self.control_focused(FormControl::ForgotPassword))
            .enabled(self.state == FormState::Idle);
        (&forgot).render(forgot_area, buf);

        let submit_label = match self.state {
            FormState::Idle => "Login",
            FormState::Submitting => "Logging in...",
        };
        let submit = Button::new(submit_label)
            .accent(self.theme.accent)
            .focused(self.control_focused(FormControl::Submit))
            .enabled(self.state == FormState::Idle);
        (&submit).render(areas[4], buf);

        let sign_up = Button::new(SIGN_UP_LABEL)
            .link()
            .accent(self.theme.accent)
            .focused(self.control_focused(FormControl::SignUp))
            .enabled(self.state == FormState::Idle);
        let footer = Line::from(vec![
            Span::styled("Don't have an account? ", self.theme.dimmed_style),
            Span::styled(SIGN_UP_LABEL, sign_up.label_style()),
        ]);
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .render(areas[5], buf);
    }
}

impl Widget for &LoginForm {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
