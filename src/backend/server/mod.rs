//! Server Module
//!
//! This module contains the server-side code for initializing and
//! configuring the Axum HTTP server.
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Environment configuration and database loading
//! - **`init`** - App creation
//!
//! # Example
//!
//! ```rust,no_run
//! use taskboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{AuthConfig, ServerConfig};
pub use init::create_app;
pub use state::AppState;
