//! Tasks Module
//!
//! - **`db`** - SQLite storage for tasks
//! - **`handlers`** - HTTP handlers for the `/api/tasks` routes

pub mod db;
pub mod handlers;

pub use handlers::{create_task, delete_task, get_task, get_tasks, update_task};
