//! # Features Module
//!
//! Feature modules for the hydration bot, layered over `core`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod reminders;
pub mod roster;
pub mod startup;

// Re-export commonly used items
pub use reminders::{
    deliver, ActiveHours, CycleReport, DiscordMessenger, DispatchError, MessagePool, Messenger,
    ReminderScheduler,
};
pub use roster::Roster;
pub use startup::announce_online;

/// Bot version from Cargo.toml
pub fn get_bot_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
