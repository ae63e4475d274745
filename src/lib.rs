// Core layer - configuration and shared helpers
pub mod core;

// Features layer - all feature modules
pub mod features;

// Re-export core config for convenience
pub use core::Config;

// Re-export feature items for convenience
pub use features::{
    // Reminders
    ActiveHours, CycleReport, DiscordMessenger, DispatchError, MessagePool, Messenger,
    ReminderScheduler,
    // Roster
    Roster,
    // Startup
    announce_online,
};
