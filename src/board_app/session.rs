//! Client session
//!
//! A [`Session`] exists from a successful login or registration until
//! logout. Every authenticated API call borrows it for the bearer token.

use crate::shared::{AuthResponse, UserResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserResponse,
}

impl Session {
    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}
