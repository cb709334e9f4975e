//! Daily reminder service
//!
//! Wakes once per day at the configured time, selects the events due in
//! `days_ahead` days and sends one Telegram message per event to the owning
//! chat. Delivery is best effort: a failed send is logged and the loop moves
//! on to the next event.

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, NaiveTime, Utc};
use teloxide::{prelude::*, types::ChatId, Bot};
use tracing::{error, info};

use crate::config::NotificationConfig;
use crate::database::EventStore;
use crate::models::Event;
use crate::utils::errors::Result;
use crate::utils::helpers::scope_label;

#[derive(Clone)]
pub struct ReminderService {
    bot: Bot,
    store: Arc<dyn EventStore>,
    config: NotificationConfig,
}

impl ReminderService {
    pub fn new(bot: Bot, store: Arc<dyn EventStore>, config: NotificationConfig) -> Self {
        Self { bot, store, config }
    }

    /// Spawn the daily loop on the runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(self) {
        loop {
            let wait = self.duration_until_next_run();
            info!(seconds = wait.as_secs(), "Next reminder run scheduled");
            tokio::time::sleep(wait).await;

            if let Err(e) = self.send_due_reminders().await {
                error!(error = %e, "Reminder run failed");
            }
        }
    }

    /// Time left until the next configured run, always in the future.
    fn duration_until_next_run(&self) -> std::time::Duration {
        let now = Utc::now();
        let run_time = NaiveTime::from_hms_opt(self.config.hour, self.config.minute, 0)
            .unwrap_or(NaiveTime::MIN);

        let mut next = now.date_naive().and_time(run_time).and_utc();
        if next <= now {
            next += ChronoDuration::days(1);
        }

        (next - now).to_std().unwrap_or_default()
    }

    /// Select due events and deliver one message per record.
    pub async fn send_due_reminders(&self) -> Result<()> {
        let due = self.store.select_due(self.config.days_ahead).await?;
        info!(count = due.len(), "Selected events due for notification");

        for event in due {
            let text = format_reminder(&event);

            match self.bot.send_message(ChatId(event.chat_id), text).await {
                Ok(_) => {
                    info!(
                        event_id = event.id,
                        chat_id = event.chat_id,
                        "Sent reminder"
                    );
                }
                Err(e) => {
                    error!(
                        event_id = event.id,
                        chat_id = event.chat_id,
                        error = %e,
                        "Failed to send reminder"
                    );
                }
            }
        }

        Ok(())
    }
}

/// Format the reminder message for a due event.
pub fn format_reminder(event: &Event) -> String {
    let mut text = format!(
        "🔔 Event reminder!\n\n📅 Date: {}\n📝 Title: {}\n",
        event.event_date, event.title
    );

    if !event.description.is_empty() {
        text.push_str(&format!("📄 Description: {}\n", event.description));
    }

    text.push_str(&format!(
        "{} event\n\n🎯 Don't forget to prepare!",
        scope_label(event.is_group_event)
    ));

    text
}
