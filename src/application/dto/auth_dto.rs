//! Authentication DTOs.

use crate::domain::entities::{AuthenticatedUser, Credentials};

/// Login request data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Credentials to check.
    pub credentials: Credentials,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Authenticated user.
    pub user: AuthenticatedUser,
}

impl LoginResponse {
    /// Creates new login response.
    #[must_use]
    pub const fn new(user: AuthenticatedUser) -> Self {
        Self { user }
    }
}
