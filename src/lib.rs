//! Task Board - Main Library
//!
//! A small task manager: an Axum REST API over SQLite with JWT
//! authentication, and a native egui Kanban board that talks to it.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types used by both sides
//!   - Task, priority, status and request bodies
//!   - User and auth payloads
//!   - Error and configuration helpers
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Registration, login and token verification
//!   - Task CRUD backed by SQLite
//!
//! - **`board_app`** - Native desktop client (egui/eframe)
//!   - Login and registration screens
//!   - Three-column board with drag-and-drop status changes
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the
//!   `taskboard-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use taskboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
#[cfg(not(target_arch = "wasm32"))]
pub mod board_app;
