//! # Feature: Startup Presence
//!
//! Sets the bot's activity and online status once the gateway is ready.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use log::info;
use serenity::model::gateway::Activity;
use serenity::model::user::OnlineStatus;
use serenity::prelude::Context;

/// Set the "watching" activity and go online.
///
/// Invoked from the ready handler; running it again after a reconnect is
/// harmless and keeps the status visible.
pub async fn announce_online(ctx: &Context, status_text: &str) {
    ctx.set_presence(Some(Activity::watching(status_text)), OnlineStatus::Online)
        .await;
    info!("Presence set: watching {:?}", status_text);
}
