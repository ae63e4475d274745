//! # Core Module
//!
//! Configuration and shared file helpers for the hydration bot.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: ACTIVE_HOURS window override
//! - 1.0.0: Initial creation with config and list-file modules

pub mod config;
pub mod list_file;

// Re-export commonly used items
pub use config::Config;
pub use list_file::read_lines;
