//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/users` endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users/register - User registration
//! - **`login`** - POST /api/users/login - User authentication
//! - **`get_users`** - GET /api/users - Public fields of every user
//! - **`get_me`** - GET /api/users/me - The authenticated user
//!
//! Register and login return `{ user, token }`; the token is then sent as
//! `Authorization: Bearer <token>` on every protected request.

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// User listing handlers
pub mod users;

pub use register::register;
pub use login::login;
pub use users::{get_me, get_users};
