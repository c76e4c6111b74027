//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles the credential check workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns error if the credentials are rejected or the check fails.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        debug!(email = %request.credentials.email(), "Attempting login");

        let user = self
            .auth_port
            .authenticate(&request.credentials)
            .await
            .map_err(|e| {
                warn!(error = %e, "Credential check failed");
                e
            })?;

        info!(email = %user.email(), "Successfully authenticated");

        Ok(LoginResponse::new(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Credentials;
    use crate::domain::ports::mocks::MockAuthPort;

    fn make_request() -> LoginRequest {
        let credentials = Credentials::new("user@example.com", "hunter2").unwrap();
        LoginRequest::new(credentials)
    }

    #[tokio::test]
    async fn test_successful_login() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let use_case = LoginUseCase::new(auth_port.clone());

        let result = use_case.execute(make_request()).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().user.email(), "user@example.com");
        assert_eq!(auth_port.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let auth_port = Arc::new(MockAuthPort::new(false));
        let use_case = LoginUseCase::new(auth_port);

        let result = use_case.execute(make_request()).await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
