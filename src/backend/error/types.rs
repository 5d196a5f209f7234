/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the API. Every handler returns
 * `Result<_, BackendError>` and the error is turned into a JSON response by
 * the `IntoResponse` implementation in `conversion`.
 *
 * # Error Categories
 *
 * - `Validation` - missing or invalid input, duplicate registration (400)
 * - `Auth` - bad credentials, missing or invalid token (401)
 * - `NotFound` - unknown id or route (404)
 * - `Database` / `Internal` - unexpected failures (500)
 *
 * Internal details (SQL errors, hashing failures) are logged where they
 * happen and replaced by a generic message in the response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use taskboard::backend::error::BackendError;
///
/// let err = BackendError::validation("Title is required");
/// let err = BackendError::auth("Invalid credentials");
/// let err = BackendError::not_found("Task not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or invalid input
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure
    #[error("{message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// Unknown resource
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected server-side failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the log; not sent to clients
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Error from the shared module
    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Auth` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Internal`, `Database` - 500 Internal Server Error
    /// - `Shared` - 400 for validation problems, 500 for serialization
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Shared(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } | SharedError::UnknownVariant { .. } => {
                    StatusCode::BAD_REQUEST
                }
            },
        }
    }

    /// Message safe to return to clients
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return "Server error".to_string();
        }
        self.to_string()
    }
}
