//! Simulated authentication adapter.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::{AuthenticatedUser, Credentials};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Round-trip delay of the simulated backend.
const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Email accepted by the simulated backend.
const DEMO_EMAIL: &str = "test@example.com";
/// Password accepted by the simulated backend.
const DEMO_PASSWORD: &str = "password123";

/// Stand-in for a real authentication backend.
///
/// Sleeps for a fixed delay, then accepts exactly one demo credential pair
/// and rejects everything else.
pub struct SimulatedAuthClient {
    delay: Duration,
}

impl SimulatedAuthClient {
    /// Creates a client with the standard response delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: RESPONSE_DELAY,
        }
    }

    /// Overrides the response delay.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthPort for SimulatedAuthClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
        debug!(delay = ?self.delay, "Simulating credential check");
        tokio::time::sleep(self.delay).await;

        if credentials.email() == DEMO_EMAIL && credentials.password() == DEMO_PASSWORD {
            Ok(AuthenticatedUser::new(credentials.email()))
        } else {
            Err(AuthError::invalid_credentials())
        }
    }
}
