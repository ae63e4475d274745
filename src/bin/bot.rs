use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info, warn};
use serenity::async_trait;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use hydrobot::core::Config;
use hydrobot::features::get_bot_version;
use hydrobot::features::reminders::{
    ActiveHours, DiscordMessenger, MessagePool, ReminderScheduler,
};
use hydrobot::features::roster::Roster;
use hydrobot::features::startup::announce_online;

struct Handler {
    roster: Roster,
    msg_list_path: PathBuf,
    hours: ActiveHours,
    presence_text: String,
    shutdown: Arc<Notify>,
    scheduler_started: AtomicBool,
}

impl Handler {
    fn new(
        roster: Roster,
        msg_list_path: PathBuf,
        hours: ActiveHours,
        presence_text: String,
        shutdown: Arc<Notify>,
    ) -> Self {
        Handler {
            roster,
            msg_list_path,
            hours,
            presence_text,
            shutdown,
            scheduler_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("🤖 Bot ID: {}", ready.user.id);

        announce_online(&ctx, &self.presence_text).await;

        // Gateway reconnects fire ready again; only the first one may start
        // the scheduler
        if self.scheduler_started.swap(true, Ordering::SeqCst) {
            info!("Reconnected; reminder scheduler already running");
            return;
        }

        let scheduler =
            ReminderScheduler::new(self.roster.clone(), self.msg_list_path.clone(), self.hours);
        let messenger = DiscordMessenger::new(ctx.http.clone());
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            scheduler.run(messenger, shutdown).await;
        });
    }

    async fn resume(&self, _ctx: Context, _resume: ResumedEvent) {
        debug!("Gateway session resumed");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Hydration Bot v{}...", get_bot_version());

    let roster = Roster::load(&config.user_list_path)?;
    if roster.is_empty() {
        warn!(
            "Recipient roster {} is empty; cycles will run but nobody gets reminded",
            config.user_list_path.display()
        );
    } else {
        info!(
            "Loaded {} recipients from {}",
            roster.len(),
            config.user_list_path.display()
        );
    }

    // Early probe so a missing pool shows up at startup rather than at the
    // first cycle; the scheduler re-reads the file every cycle
    let pool = MessagePool::load(&config.msg_list_path);
    if pool.is_empty() {
        warn!(
            "Message pool {} is empty or unreadable; cycles will skip sends until it has content",
            config.msg_list_path.display()
        );
    } else {
        info!(
            "Found {} reminder messages in {}",
            pool.len(),
            config.msg_list_path.display()
        );
    }

    info!(
        "Active hours: {} to {} (local time)",
        config.active_start, config.active_end
    );

    let hours = ActiveHours::new(config.active_start, config.active_end);
    let shutdown = Arc::new(Notify::new());

    let handler = Handler::new(
        roster,
        config.msg_list_path.clone(),
        hours,
        config.presence_text.clone(),
        shutdown.clone(),
    );

    // The bot only pushes DMs; it consumes no gateway events beyond ready
    let intents = GatewayIntents::empty();

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            error!("This could indicate:");
            error!("  - Invalid bot token format");
            error!("  - Network issues reaching Discord API");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Ctrl-C stops the scheduler at its next wait, then closes the gateway
    let shard_manager = client.shard_manager.clone();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {e}");
            return;
        }
        info!("Shutdown signal received");
        signal_shutdown.notify_one();
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Bot configured successfully. Connecting to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        error!("This could be due to:");
        error!("  - Invalid bot token");
        error!("  - Network connectivity issues");
        error!("  - Discord API outage");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    info!("Shut down cleanly");
    Ok(())
}
