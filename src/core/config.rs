//! Process configuration loaded from the environment
//!
//! All runtime settings come from environment variables (optionally via a
//! `.env` file loaded by the binary before this runs). Configuration is the
//! first thing read at startup so the log level is known before the logger
//! is initialized.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: ACTIVE_HOURS override for the daily send window
//! - 1.0.0: Initial creation with token, file paths, presence text

use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use std::env;
use std::path::PathBuf;

// ============================================================================
// Defaults
// ============================================================================

/// Default path of the recipient roster file (one Discord user id per line)
const DEFAULT_USER_LIST: &str = "./user_list.txt";

/// Default path of the message pool file (one reminder message per line)
const DEFAULT_MSG_LIST: &str = "./msg_list.txt";

/// Default "watching" status text shown on the bot's profile
const DEFAULT_PRESENCE: &str = "It do be Hydration Time";

/// Default daily window in which reminders are sent
const DEFAULT_ACTIVE_HOURS: &str = "08:00-22:00";

/// Default log filter applied when `RUST_LOG` is unset
const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Config
// ============================================================================

/// Runtime configuration for the bot process.
#[derive(Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Path of the recipient roster file
    pub user_list_path: PathBuf,
    /// Path of the message pool file
    pub msg_list_path: PathBuf,
    /// Text of the "watching" activity set once the gateway is ready
    pub presence_text: String,
    /// Start of the daily send window (inclusive)
    pub active_start: NaiveTime,
    /// End of the daily send window (inclusive)
    pub active_end: NaiveTime,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DISCORD_TOKEN` is required (`TOKEN` is accepted as a legacy alias);
    /// everything else falls back to a default. Returns an error when the
    /// token is missing/blank or `ACTIVE_HOURS` does not parse.
    pub fn from_env() -> Result<Self> {
        let discord_token = env::var("DISCORD_TOKEN")
            .or_else(|_| env::var("TOKEN"))
            .map_err(|_| anyhow!("DISCORD_TOKEN is not set (the legacy TOKEN name also works)"))?;
        if discord_token.trim().is_empty() {
            return Err(anyhow!("DISCORD_TOKEN is set but blank"));
        }

        let user_list_path =
            PathBuf::from(env::var("USER_LIST_PATH").unwrap_or_else(|_| DEFAULT_USER_LIST.into()));
        let msg_list_path =
            PathBuf::from(env::var("MSG_LIST_PATH").unwrap_or_else(|_| DEFAULT_MSG_LIST.into()));
        let presence_text =
            env::var("PRESENCE_TEXT").unwrap_or_else(|_| DEFAULT_PRESENCE.to_string());

        let hours_raw =
            env::var("ACTIVE_HOURS").unwrap_or_else(|_| DEFAULT_ACTIVE_HOURS.to_string());
        let (active_start, active_end) = parse_active_hours(&hours_raw)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            discord_token,
            user_list_path,
            msg_list_path,
            presence_text,
            active_start,
            active_end,
            log_level,
        })
    }
}

// ============================================================================
// ACTIVE_HOURS parsing
// ============================================================================

/// Parse a `HH:MM-HH:MM` window string into (start, end).
///
/// The start must be strictly earlier than the end; windows that wrap past
/// midnight are not supported.
fn parse_active_hours(raw: &str) -> Result<(NaiveTime, NaiveTime)> {
    let (start_raw, end_raw) = raw
        .split_once('-')
        .ok_or_else(|| anyhow!("ACTIVE_HOURS must look like \"08:00-22:00\", got {raw:?}"))?;

    let start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M")
        .map_err(|_| anyhow!("ACTIVE_HOURS start {:?} is not a HH:MM time", start_raw.trim()))?;
    let end = NaiveTime::parse_from_str(end_raw.trim(), "%H:%M")
        .map_err(|_| anyhow!("ACTIVE_HOURS end {:?} is not a HH:MM time", end_raw.trim()))?;

    if start >= end {
        return Err(anyhow!(
            "ACTIVE_HOURS start ({start}) must be earlier than end ({end})"
        ));
    }

    Ok((start, end))
}
