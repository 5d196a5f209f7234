//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, fallback and layers
//! - **`api_routes`** - REST endpoints for users and tasks
//!
//! # Example
//!
//! ```rust,no_run
//! use taskboard::backend::routes::create_router;
//! use taskboard::backend::server::config::{load_database, AuthConfig};
//! use taskboard::backend::server::state::AppState;
//!
//! # async fn example() -> Result<(), taskboard::backend::error::BackendError> {
//! let pool = load_database("sqlite::memory:").await?;
//! let router = create_router(AppState::new(pool, AuthConfig::for_tests()));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
