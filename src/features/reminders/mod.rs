//! # Reminders Feature
//!
//! Recurring hydration reminders over Discord DMs: active-hours gating,
//! randomized cycle spacing, random message selection, and per-recipient
//! dispatch.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod dispatch;
pub mod hours;
pub mod interval;
pub mod messages;
pub mod scheduler;

pub use dispatch::{deliver, DiscordMessenger, DispatchError, Messenger};
pub use hours::ActiveHours;
pub use interval::{next_interval, MAX_INTERVAL_SECS};
pub use messages::MessagePool;
pub use scheduler::{CycleReport, ReminderScheduler};
