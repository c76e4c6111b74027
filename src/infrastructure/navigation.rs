//! Logging navigation adapter.

use tracing::info;

use crate::domain::ports::NavigationPort;

/// Navigator that only logs the requested transition.
///
/// Placeholder for a real navigation collaborator; the sign-in screen stays
/// where it is regardless of outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl LoggingNavigator {
    /// Creates the navigator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NavigationPort for LoggingNavigator {
    fn on_login_success(&self, email: &str) {
        info!(email = %email, "Login successful");
    }

    fn on_forgot_password(&self) {
        info!("Forgot password requested");
    }

    fn on_sign_up(&self) {
        info!("Sign-up requested");
    }
}
