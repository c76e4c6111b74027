//! Sign-in credentials value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Email/password pair with whitespace trimming and password masking.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates credentials, trimming both parts.
    ///
    /// Returns `None` if either part is empty after trimming.
    #[must_use]
    pub fn new(email: impl AsRef<str>, password: impl AsRef<str>) -> Option<Self> {
        let email = email.as_ref().trim().to_string();
        let password = password.as_ref().trim().to_string();

        if email.is_empty() || password.is_empty() {
            return None;
        }

        Some(Self { email, password })
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the password masked for display.
    #[must_use]
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.len())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &self.masked_password())
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}
