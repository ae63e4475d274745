//! # Feature: Recipient Dispatch
//!
//! Delivery of one reminder to one recipient: look up a private channel,
//! open one if absent, send the text. The platform sits behind the
//! [`Messenger`] trait so the scheduler can be exercised without a live
//! gateway; [`DiscordMessenger`] is the production implementation.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Session channel ledger with eviction after a failed send
//! - 1.0.0: Initial creation with lookup/open/send sequence

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use serenity::http::{Http, HttpError};
use serenity::model::id::{ChannelId, UserId};
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Why a single delivery failed. Both variants are non-fatal to the
/// scheduler: it logs them and moves on to the next recipient.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The user id does not resolve to a reachable Discord account.
    #[error("recipient {0} does not resolve to a reachable account")]
    RecipientNotFound(UserId),

    /// The platform refused or failed the send itself.
    #[error("delivery failed: {0}")]
    Delivery(#[from] serenity::Error),
}

// ============================================================================
// Messenger capability
// ============================================================================

/// Platform capability for delivering private messages.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// The channel already open for this recipient, if any.
    async fn existing_channel(&self, recipient: UserId) -> Option<ChannelId>;

    /// Open a private channel to the recipient.
    async fn open_channel(&self, recipient: UserId) -> Result<ChannelId, DispatchError>;

    /// Send `text` through an open channel.
    async fn send_text(&self, channel: ChannelId, text: &str) -> Result<(), DispatchError>;

    /// Drop any remembered channel for the recipient. Called after a failed
    /// send so the next attempt starts from a clean slate.
    fn forget_channel(&self, _recipient: UserId) {}
}

// ============================================================================
// Delivery sequence
// ============================================================================

/// Deliver one message to one recipient.
///
/// Reuses the recipient's existing private channel when one is known, opens
/// one otherwise, then sends. A failed send evicts the remembered channel
/// before the error is returned.
pub async fn deliver<M: Messenger>(
    messenger: &M,
    recipient: UserId,
    text: &str,
) -> Result<(), DispatchError> {
    let channel = match messenger.existing_channel(recipient).await {
        Some(channel) => channel,
        None => messenger.open_channel(recipient).await?,
    };

    match messenger.send_text(channel, text).await {
        Ok(()) => {
            debug!("Sent reminder to user {} via channel {}", recipient, channel);
            Ok(())
        }
        Err(e) => {
            messenger.forget_channel(recipient);
            Err(e)
        }
    }
}

// ============================================================================
// Discord implementation
// ============================================================================

/// Discord's JSON error code for an id that is not a user ("Unknown User")
const UNKNOWN_USER_CODE: isize = 10013;

/// Sends DMs over the Discord REST API.
///
/// Channels opened during this session are remembered per recipient, so one
/// REST round trip per send is saved after the first cycle. The ledger is
/// only a session cache; Discord remains the authority, and entries are
/// evicted whenever a send through them fails.
pub struct DiscordMessenger {
    http: Arc<Http>,
    open_dms: DashMap<UserId, ChannelId>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            open_dms: DashMap::new(),
        }
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn existing_channel(&self, recipient: UserId) -> Option<ChannelId> {
        self.open_dms.get(&recipient).map(|entry| *entry.value())
    }

    async fn open_channel(&self, recipient: UserId) -> Result<ChannelId, DispatchError> {
        let channel = recipient
            .create_dm_channel(self.http.as_ref())
            .await
            .map_err(|e| {
                if is_unknown_recipient(&e) {
                    DispatchError::RecipientNotFound(recipient)
                } else {
                    DispatchError::Delivery(e)
                }
            })?;
        self.open_dms.insert(recipient, channel.id);
        debug!("Opened DM channel {} for user {}", channel.id, recipient);
        Ok(channel.id)
    }

    async fn send_text(&self, channel: ChannelId, text: &str) -> Result<(), DispatchError> {
        channel.say(self.http.as_ref(), text).await?;
        Ok(())
    }

    fn forget_channel(&self, recipient: UserId) {
        self.open_dms.remove(&recipient);
    }
}

/// Whether the platform error means "this id is not a reachable user", as
/// opposed to a transient transport failure.
fn is_unknown_recipient(err: &serenity::Error) -> bool {
    if let serenity::Error::Http(http_err) = err {
        if let HttpError::UnsuccessfulRequest(response) = &**http_err {
            return response.status_code.as_u16() == 404
                || response.error.code == UNKNOWN_USER_CODE;
        }
    }
    false
}

// ============================================================================
// Tests
// ============================================================================
