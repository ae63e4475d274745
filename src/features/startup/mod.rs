//! # Startup Feature
//!
//! One-shot actions when the bot comes online.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod presence;

pub use presence::announce_online;
