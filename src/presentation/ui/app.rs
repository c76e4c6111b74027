//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::application::use_cases::LoginUseCase;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, NavigationPort};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{FormAction, LoginForm, LoginPage};

#[derive(Debug)]
enum Action {
    LoginCompleted {
        attempt: u64,
        result: Result<LoginResponse, AuthError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Application driving the sign-in page.
pub struct App {
    state: AppState,
    form: LoginForm,
    login_use_case: LoginUseCase,
    navigator: Arc<dyn NavigationPort>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    pending_login: Option<AbortHandle>,
    attempt: u64,
}

impl App {
    /// Creates the application with injected collaborators.
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        navigator: Arc<dyn NavigationPort>,
        theme: Theme,
    ) -> Self {
        let login_use_case = LoginUseCase::new(auth_port);
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            form: LoginForm::new(theme),
            login_use_case,
            navigator,
            action_tx,
            action_rx,
            pending_login: None,
            attempt: 0,
        }
    }

    /// Runs the application until the user quits.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;

        self.abort_pending_login();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&LoginPage::new(&self.form), frame.area());
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(*key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match self.form.handle_key(key) {
            FormAction::Submit => self.handle_submit(),
            FormAction::ForgotPassword => self.navigator.on_forgot_password(),
            FormAction::SignUp => self.navigator.on_sign_up(),
            FormAction::None => {}
        }

        EventResult::Continue
    }

    fn handle_submit(&mut self) {
        let Some(credentials) = self.form.begin_submit() else {
            return;
        };

        self.attempt += 1;
        let attempt = self.attempt;
        let use_case = self.login_use_case.clone();
        let tx = self.action_tx.clone();

        debug!(attempt, "Dispatching credential check");
        let handle = tokio::spawn(async move {
            let result = use_case.execute(LoginRequest::new(credentials)).await;
            let _ = tx.send(Action::LoginCompleted { attempt, result });
        });
        self.pending_login = Some(handle.abort_handle());
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::LoginCompleted { attempt, result } => {
                if attempt != self.attempt {
                    debug!(attempt, "Discarding stale login result");
                    return;
                }

                self.pending_login = None;
                self.form.finish_submit();

                match result {
                    Ok(response) => {
                        self.navigator.on_login_success(response.user.email());
                    }
                    Err(e) => {
                        warn!(error = %e, "Login failed");
                        self.handle_login_error(&e);
                    }
                }
            }
        }
    }

    fn handle_login_error(&mut self, error: &AuthError) {
        let message = match error {
            AuthError::InvalidCredentials => {
                "Invalid email or password. Please try again.".to_string()
            }
            AuthError::Unexpected { .. } => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        };
        self.form.set_error(message);
    }

    fn abort_pending_login(&mut self) {
        if let Some(handle) = self.pending_login.take() {
            debug!("Aborting in-flight credential check");
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockAuthPort, NavigationEvent, RecordingNavigator};
    use crate::presentation::ui::{FormControl, FormState};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_credentials(app: &mut App, email: &str, password: &str) {
        type_text(app, email);
        app.handle_key(key(KeyCode::Tab));
        type_text(app, password);
    }

    fn make_app(should_succeed: bool) -> (App, Arc<MockAuthPort>, Arc<RecordingNavigator>) {
        let auth_port = Arc::new(MockAuthPort::new(should_succeed));
        let navigator = Arc::new(RecordingNavigator::new());
        let app = App::new(auth_port.clone(), navigator.clone(), Theme::default());
        (app, auth_port, navigator)
    }

    #[test]
    fn test_app_creation() {
        let (app, _, _) = make_app(true);

        assert_eq!(app.state, AppState::Running);
        assert_eq!(app.form.state(), FormState::Idle);
    }

    #[tokio::test]
    async fn test_submit_with_empty_fields_never_engages_loading() {
        let (mut app, auth_port, _) = make_app(true);

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.form.state(), FormState::Idle);
        assert!(app.form.error().is_some());
        assert_eq!(auth_port.call_count(), 0);
        assert!(app.pending_login.is_none());
    }

    #[tokio::test]
    async fn test_successful_login_notifies_navigator() {
        let (mut app, _, navigator) = make_app(true);
        fill_credentials(&mut app, "test@example.com", "password123");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form.state(), FormState::Submitting);

        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);

        assert_eq!(app.form.state(), FormState::Idle);
        assert!(app.form.error().is_none());
        assert_eq!(app.form.email(), "test@example.com");
        assert_eq!(app.form.password(), "password123");
        assert_eq!(
            navigator.events(),
            vec![NavigationEvent::LoginSuccess("test@example.com".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejected_login_shows_error() {
        let (mut app, _, navigator) = make_app(false);
        fill_credentials(&mut app, "someone@example.com", "nope");

        app.handle_key(key(KeyCode::Enter));
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);

        assert_eq!(app.form.state(), FormState::Idle);
        assert_eq!(
            app.form.error(),
            Some("Invalid email or password. Please try again.")
        );
        assert!(navigator.events().is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_failure_shows_generic_error() {
        let (mut app, _, _) = make_app(true);
        fill_credentials(&mut app, "someone@example.com", "secret");

        app.form.begin_submit().unwrap();
        app.attempt += 1;
        app.handle_action(Action::LoginCompleted {
            attempt: app.attempt,
            result: Err(AuthError::unexpected("backend exploded")),
        });

        assert_eq!(app.form.state(), FormState::Idle);
        assert_eq!(
            app.form.error(),
            Some("An unexpected error occurred. Please try again later.")
        );
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_error() {
        let (mut app, _, _) = make_app(false);
        fill_credentials(&mut app, "someone@example.com", "nope");

        app.handle_key(key(KeyCode::Enter));
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);
        assert!(app.form.error().is_some());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form.state(), FormState::Submitting);
        assert!(app.form.error().is_none());
    }

    #[tokio::test]
    async fn test_no_second_submission_while_pending() {
        let (mut app, auth_port, _) = make_app(true);
        fill_credentials(&mut app, "test@example.com", "password123");

        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));

        let _ = app.action_rx.recv().await.unwrap();
        assert_eq!(auth_port.call_count(), 1);
        assert_eq!(app.attempt, 1);
    }

    #[tokio::test]
    async fn test_link_actions_never_touch_form_state() {
        let (mut app, auth_port, navigator) = make_app(true);
        fill_credentials(&mut app, "someone@example.com", "secret");

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.form.focus(), FormControl::ForgotPassword);
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.form.focus(), FormControl::SignUp);
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(
            navigator.events(),
            vec![NavigationEvent::ForgotPassword, NavigationEvent::SignUp]
        );
        assert_eq!(app.form.state(), FormState::Idle);
        assert_eq!(app.form.email(), "someone@example.com");
        assert_eq!(app.form.password(), "secret");
        assert_eq!(auth_port.call_count(), 0);
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let (mut app, _, navigator) = make_app(true);
        fill_credentials(&mut app, "test@example.com", "password123");

        app.form.begin_submit().unwrap();
        app.attempt = 2;
        app.handle_action(Action::LoginCompleted {
            attempt: 1,
            result: Ok(LoginResponse::new(
                crate::domain::entities::AuthenticatedUser::new("test@example.com"),
            )),
        });

        assert_eq!(app.form.state(), FormState::Submitting);
        assert!(navigator.events().is_empty());
    }

    #[tokio::test]
    async fn test_quit_aborts_pending_login() {
        let (mut app, _, _) = make_app(true);
        fill_credentials(&mut app, "test@example.com", "password123");

        app.handle_key(key(KeyCode::Enter));
        assert!(app.pending_login.is_some());

        app.abort_pending_login();
        assert!(app.pending_login.is_none());
    }
}
