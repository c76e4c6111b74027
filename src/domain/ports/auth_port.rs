//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthenticatedUser, Credentials};
use crate::domain::errors::AuthError;

/// Port for credential verification.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Checks credentials and returns the authenticated user.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError>;
}
