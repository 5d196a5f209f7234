//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! the user and task REST API over a SQLite store.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT tokens, user store
//! - **`tasks`** - Task store and CRUD handlers
//! - **`middleware`** - Bearer token verification
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── tasks/          - Tasks
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! Handlers share nothing but `AppState`, a cloned SQLite pool plus
//! immutable auth settings. Concurrent task updates are last-write-wins.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Task storage and handlers
pub mod tasks;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use server::create_app;
