//! # Feature: Reminder Scheduler
//!
//! The driving loop: one dispatch pass over the whole roster, then a wait.
//! While the active-hours window is open the wait is a random pause of up to
//! ten minutes; while it is closed, a single sleep straight to the next
//! opening. Repeats until the shutdown handle fires.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Messenger seam for testability, select-based shutdown
//! - 1.0.0: Initial creation with plain sleep loop

use crate::features::reminders::dispatch::{deliver, Messenger};
use crate::features::reminders::hours::ActiveHours;
use crate::features::reminders::interval::next_interval;
use crate::features::reminders::messages::MessagePool;
use crate::features::roster::Roster;
use chrono::{Local, NaiveDateTime};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Outcome of one dispatch pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub sent: usize,
    pub failed: usize,
}

/// Periodically messages every recipient on the roster.
///
/// Owns the per-process scheduling state; the platform is injected per call
/// so the loop itself never touches the network directly.
pub struct ReminderScheduler {
    roster: Roster,
    msg_list_path: PathBuf,
    hours: ActiveHours,
}

impl ReminderScheduler {
    pub fn new(roster: Roster, msg_list_path: PathBuf, hours: ActiveHours) -> Self {
        Self {
            roster,
            msg_list_path,
            hours,
        }
    }

    /// One dispatch pass: re-read the pool, then message every recipient in
    /// roster order.
    ///
    /// Each recipient gets an independent random pick from the pool.
    /// Per-recipient failures are logged and counted, never propagated, so
    /// one bad id cannot starve the rest of the roster.
    pub async fn run_cycle<M: Messenger>(&self, messenger: &M) -> CycleReport {
        let pool = MessagePool::load(&self.msg_list_path);
        if pool.is_empty() {
            warn!(
                "Message pool {} has no messages; skipping this cycle's sends",
                self.msg_list_path.display()
            );
            return CycleReport::default();
        }

        let mut report = CycleReport::default();
        for &recipient in self.roster.recipients() {
            if let Some(message) = pool.pick() {
                match deliver(messenger, recipient, &message).await {
                    Ok(()) => report.sent += 1,
                    Err(e) => {
                        report.failed += 1;
                        warn!("Reminder to user {} failed: {}", recipient, e);
                    }
                }
            }
        }

        info!(
            "Dispatch cycle complete: {} sent, {} failed ({} on roster)",
            report.sent,
            report.failed,
            self.roster.len()
        );
        report
    }

    /// How long to pause after a cycle, given the current wall-clock time.
    fn next_wait(&self, now: NaiveDateTime) -> Duration {
        if self.hours.contains(now.time()) {
            next_interval()
        } else {
            self.hours.until_reopen(now)
        }
    }

    /// Run the loop until `shutdown` fires.
    ///
    /// The first dispatch pass runs immediately. The shutdown signal is only
    /// observed at the wait between cycles, so an in-flight pass always
    /// finishes before the task exits; a signal arriving mid-pass is held as
    /// a permit and picked up at the next wait.
    pub async fn run<M: Messenger>(self, messenger: M, shutdown: Arc<Notify>) {
        info!(
            "⏰ Reminder scheduler started ({} recipients, pool at {})",
            self.roster.len(),
            self.msg_list_path.display()
        );

        loop {
            self.run_cycle(&messenger).await;

            let now = Local::now().naive_local();
            let wait = self.next_wait(now);
            if self.hours.contains(now.time()) {
                info!("Next dispatch cycle in {}s", wait.as_secs());
            } else {
                info!(
                    "Quiet hours; sleeping {}s until the window reopens",
                    wait.as_secs()
                );
            }

            tokio::select! {
                _ = shutdown.notified() => {
                    info!("Reminder scheduler stopping");
                    break;
                }
                _ = tokio::time::sleep(wait) => {}
            }
        }
    }
}
