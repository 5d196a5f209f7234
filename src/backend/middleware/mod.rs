//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - bearer token verification for protected routes

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
