//! Shared Module
//!
//! This module contains the types that are shared between the backend server
//! and the board client. They define the JSON contract of the REST API, so
//! both sides serialize and deserialize through the same structs.
//!
//! # Overview
//!
//! - **`task`** - Task records, priority/status enums and task request bodies
//! - **`user`** - Public user fields and auth request/response bodies
//! - **`error`** - Errors raised while validating shared data
//! - **`config`** - Environment-driven configuration helpers

/// Task data structures
pub mod task;

/// User and authentication payloads
pub mod user;

/// Shared error types
pub mod error;

/// Configuration helpers
pub mod config;

/// Re-export commonly used types for convenience
pub use task::{AssigneeRef, CreateTaskRequest, Priority, Task, TaskStatus, UpdateTaskRequest};
pub use user::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest, UserResponse};
pub use error::SharedError;
pub use config::ConfigError;
