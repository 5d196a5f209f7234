//! Theme Module
//!
//! - **`colors`** - color constants
//! - **`styles`** - global style and frame builders

pub mod colors;
pub mod styles;
