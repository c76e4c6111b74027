//! Navigation port definition.

/// Port for navigation requests raised by the sign-in screen.
///
/// The screen itself never navigates; it hands these intents to whatever
/// collaborator was injected.
pub trait NavigationPort: Send + Sync {
    /// Called after a successful sign-in.
    fn on_login_success(&self, email: &str);

    /// Called when the user activates the forgot-password control.
    fn on_forgot_password(&self);

    /// Called when the user activates the sign-up control.
    fn on_sign_up(&self);
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Navigation event captured by the recording mock.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum NavigationEvent {
        LoginSuccess(String),
        ForgotPassword,
        SignUp,
    }

    /// Mock navigator that records every request.
    #[derive(Default)]
    pub struct RecordingNavigator {
        events: Mutex<Vec<NavigationEvent>>,
    }

    impl RecordingNavigator {
        /// Creates an empty recorder.
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns the captured events.
        pub fn events(&self) -> Vec<NavigationEvent> {
            self.events.lock().expect("navigator mutex poisoned").clone()
        }
    }

    impl NavigationPort for RecordingNavigator {
        fn on_login_success(&self, email: &str) {
            self.events
                .lock()
                .expect("navigator mutex poisoned")
                .push(NavigationEvent::LoginSuccess(email.to_string()));
        }

        fn on_forgot_password(&self) {
            self.events
                .lock()
                .expect("navigator mutex poisoned")
                .push(NavigationEvent::ForgotPassword);
        }

        fn on_sign_up(&self) {
            self.events
                .lock()
                .expect("navigator mutex poisoned")
                .push(NavigationEvent::SignUp);
        }
    }
}
