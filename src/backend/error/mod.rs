//! Backend Error Module
//!
//! This module defines the errors returned by HTTP handlers and how they are
//! rendered as responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse, JSON extractor, fallback
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers return it directly
//! and clients always receive a JSON body with a `message` field.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
pub use conversion::{ApiJson, not_found_fallback};
