//! Shared Error Types
//!
//! This module defines error types that are shared between the backend and the
//! board client. These errors represent validation failures that either side
//! can detect before a record reaches the store.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A field failed validation
//! - `UnknownVariant` - A string did not name a known enum variant
//!
//! # Usage
//!
//! ```rust
//! use taskboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both the client and the server
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A string value that does not name a variant of `kind`
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant {
        /// Name of the enum being parsed (e.g. "status")
        kind: &'static str,
        /// The rejected input
        value: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-variant error
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
