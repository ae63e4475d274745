//! # Feature: Recipient Roster
//!
//! The list of users who receive reminders, loaded once at startup from a
//! line-delimited text file (one Discord user id per line).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use crate::core::list_file::read_lines;
use anyhow::{Context, Result};
use log::warn;
use serenity::model::id::UserId;
use std::path::Path;

/// The recipients of reminder messages, in file order.
#[derive(Debug, Clone)]
pub struct Roster {
    recipients: Vec<UserId>,
}

impl Roster {
    /// Load the roster from a file of decimal Discord user ids.
    ///
    /// Lines that do not parse as an id are logged and skipped so one typo
    /// cannot take the bot down. An unreadable file is an error; an empty
    /// roster is allowed (the caller decides whether that is worth warning
    /// about).
    pub fn load(path: &Path) -> Result<Self> {
        let lines = read_lines(path)
            .with_context(|| format!("Failed to read recipient roster {}", path.display()))?;

        let mut recipients = Vec::with_capacity(lines.len());
        for line in &lines {
            match line.trim().parse::<u64>() {
                Ok(id) => recipients.push(UserId(id)),
                Err(_) => warn!(
                    "Ignoring malformed recipient id {:?} in {}",
                    line,
                    path.display()
                ),
            }
        }

        Ok(Self { recipients })
    }

    /// Build a roster from ids already in hand.
    pub fn from_ids(recipients: Vec<UserId>) -> Self {
        Self { recipients }
    }

    /// The recipients in roster order.
    pub fn recipients(&self) -> &[UserId] {
        &self.recipients
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}
