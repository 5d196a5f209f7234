//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── users.rs    - User listing and current user
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected routes**: token verified by `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs with a configurable lifetime (30 days by default)
//! - Invalid credentials return 401 with the same message whether the email
//!   or the password was wrong

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, get_users, login, register};
