//! egui Native Desktop App Module
//!
//! A desktop client for the task board API built with egui/eframe.
//!
//! - **`config`** - Server URL from the environment
//! - **`session`** - The signed-in user and their token
//! - **`api`** - Async HTTP client for the REST API
//! - **`board`** - Tasks partitioned into status columns; drop planning
//! - **`sync`** - Mutate-then-refetch operations on the board
//! - **`state`** - UI state and background request plumbing
//! - **`views`** - Auth screen, board and top bar
//! - **`theme`** - Colors and frame styles
//! - **`main`** - Application entry point (binary)
//!
//! # Example
//!
//! ```text
//! cargo run --bin taskboard
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod session;
pub mod state;
pub mod sync;
pub mod theme;
pub mod views;

pub use api::{ApiClient, ApiError};
pub use board::{Board, StatusChange};
pub use config::Config;
pub use session::Session;
pub use state::AppState;
pub use sync::BoardSync;
