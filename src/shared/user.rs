//! User and authentication payloads
//!
//! Request and response bodies for the `/api/users` endpoints. None of these
//! types carry a password hash; the password only travels inbound.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Register request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Plain-text password, hashed before storage
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User fields that are safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Returned by register and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: UserResponse,
    /// Bearer token for the `Authorization` header
    pub token: String,
}

/// Plain acknowledgement body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
