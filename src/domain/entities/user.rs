//! Authenticated user entity.

/// User returned by a successful credential check.
///
/// The simulated backend only knows the email it accepted, so that is all
/// this entity carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Display for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.email)
    }
}
