//! Event command handlers

use std::sync::Arc;

use teloxide::{prelude::*, types::Message, Bot};
use tracing::debug;

use crate::database::EventStore;
use crate::models::{CreateEventRequest, Event};
use crate::utils::errors::{BotError, Result};
use crate::utils::helpers::{is_past_date, parse_event_date, scope_label};
use crate::utils::logging::{log_event_action, log_user_action};

const ADD_USAGE: &str = "❌ Wrong usage!\n\n\
    📝 The correct form is:\n\
    /add YYYY-MM-DD title description\n\n\
    💡 Examples:\n\
    • /add 2024-03-15 math-exam\n\
    • /add 2024-03-20 dentist Bring the referral letter";

/// Handle /add command - register a new dated event
pub async fn handle_add(
    bot: Bot,
    msg: Message,
    store: Arc<dyn EventStore>,
    args: String,
) -> Result<()> {
    let user = msg
        .from()
        .ok_or_else(|| BotError::InvalidInput("No user in message".to_string()))?;
    let owner_id = user.id.0 as i64;
    let chat_id = msg.chat.id.0;

    debug!(owner_id = owner_id, chat_id = chat_id, "Processing /add command");

    let mut parts = args.split_whitespace();
    let (date_str, title) = match (parts.next(), parts.next()) {
        (Some(date_str), Some(title)) => (date_str, title),
        _ => {
            bot.send_message(msg.chat.id, ADD_USAGE).await?;
            return Ok(());
        }
    };
    let description = parts.collect::<Vec<_>>().join(" ");

    let event_date = match parse_event_date(date_str) {
        Some(date) => date,
        None => {
            bot.send_message(
                msg.chat.id,
                "❌ Invalid date format!\n💡 Use YYYY-MM-DD, e.g. 2024-03-15",
            )
            .await?;
            return Ok(());
        }
    };

    if is_past_date(event_date) {
        bot.send_message(
            msg.chat.id,
            "❌ Cannot add events in the past!\n💡 Use today's date or a future one",
        )
        .await?;
        return Ok(());
    }

    // An event registered in a chat other than the user's own private chat
    // belongs to the whole group.
    let is_group_event = chat_id != owner_id;

    let request = CreateEventRequest {
        owner_id,
        chat_id,
        event_date,
        title: title.to_string(),
        description: description.clone(),
        is_group_event,
    };
    let event_id = store.create(request).await?;

    log_user_action(owner_id, "add_event", Some(&event_id.to_string()));

    let mut text = format!(
        "✅ Event added!\n\n📅 Date: {}\n📝 Title: {}\n",
        event_date, title
    );
    if !description.is_empty() {
        text.push_str(&format!("📄 Description: {}\n", description));
    }
    text.push_str(&format!(
        "🆔 Id: {}\n{} scope\n\n💡 Use /list to see all your events",
        event_id,
        scope_label(is_group_event)
    ));

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle /list command - show upcoming events for this chat
///
/// In a private chat the caller sees their own events; in a group chat the
/// group's shared events are shown regardless of who created them.
pub async fn handle_list(bot: Bot, msg: Message, store: Arc<dyn EventStore>) -> Result<()> {
    let user = msg
        .from()
        .ok_or_else(|| BotError::InvalidInput("No user in message".to_string()))?;
    let owner_id = user.id.0 as i64;
    let chat_id = msg.chat.id.0;

    debug!(owner_id = owner_id, chat_id = chat_id, "Processing /list command");

    let is_group = chat_id != owner_id;

    let (events, header, empty_text) = if is_group {
        (
            store.list_for_group(chat_id).await?,
            "👥 Group events:",
            "📅 No upcoming events in this group!\n💡 Use /add to add one",
        )
    } else {
        (
            store.list_for_owner(owner_id, chat_id).await?,
            "👤 Your events:",
            "📅 No upcoming events!\n💡 Use /add to add your first one",
        )
    };

    if events.is_empty() {
        bot.send_message(msg.chat.id, empty_text).await?;
        return Ok(());
    }

    let mut text = format!("{header}\n\n");
    for event in &events {
        text.push_str(&format_event_entry(event));
    }
    text.push_str("💡 Use /remove <id> to delete an event");

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle /remove command - delete an event the caller owns
pub async fn handle_remove(
    bot: Bot,
    msg: Message,
    store: Arc<dyn EventStore>,
    args: String,
) -> Result<()> {
    let user = msg
        .from()
        .ok_or_else(|| BotError::InvalidInput("No user in message".to_string()))?;
    let owner_id = user.id.0 as i64;

    debug!(owner_id = owner_id, "Processing /remove command");

    let event_id = match args.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            bot.send_message(
                msg.chat.id,
                "❌ Invalid event id!\n💡 Example: /remove 1\n🔍 Use /list to see event ids",
            )
            .await?;
            return Ok(());
        }
    };

    // Existence and ownership are reported separately so the caller knows
    // which precondition failed.
    let event = match store.find_by_id(event_id).await? {
        Some(event) => event,
        None => {
            bot.send_message(
                msg.chat.id,
                "❌ Event not found!\n💡 Use /list to see available events",
            )
            .await?;
            return Ok(());
        }
    };

    if !event.is_owned_by(owner_id) {
        bot.send_message(
            msg.chat.id,
            "❌ You cannot remove other people's events!\n👤 Only your own",
        )
        .await?;
        return Ok(());
    }

    if store.delete_for_owner(event_id, owner_id).await? {
        log_event_action(event_id, "remove_event", event.chat_id);
        bot.send_message(
            msg.chat.id,
            format!(
                "✅ Event removed!\n\n📝 Title: {}\n📅 Date: {}\n\n💡 Use /list to see the remaining events",
                event.title, event.event_date
            ),
        )
        .await?;
    } else {
        bot.send_message(msg.chat.id, "❌ Failed to remove the event!\n🔄 Try again")
            .await?;
    }

    Ok(())
}

/// One /list entry for a single event.
fn format_event_entry(event: &Event) -> String {
    let mut entry = format!(
        "🎯 {}. {}\n📅 {}\n",
        event.id, event.title, event.event_date
    );
    if !event.description.is_empty() {
        entry.push_str(&format!("📝 {}\n", event.description));
    }
    entry.push('\n');
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};

    #[test]
    fn test_format_event_entry() {
        let event = Event {
            id: 3,
            owner_id: 1,
            chat_id: 1,
            event_date: NaiveDate::from_ymd_opt(2030, 3, 15).unwrap(),
            title: "Math Exam".to_string(),
            description: "Chapters 4-5".to_string(),
            created_at: DateTime::<Utc>::MIN_UTC,
            is_group_event: false,
        };

        let entry = format_event_entry(&event);
        assert!(entry.contains("3."));
        assert!(entry.contains("Math Exam"));
        assert!(entry.contains("2030-03-15"));
        assert!(entry.contains("Chapters 4-5"));
    }

    #[test]
    fn test_format_event_entry_without_description() {
        let event = Event {
            id: 4,
            owner_id: 1,
            chat_id: 1,
            event_date: NaiveDate::from_ymd_opt(2030, 3, 20).unwrap(),
            title: "Dentist".to_string(),
            description: String::new(),
            created_at: DateTime::<Utc>::MIN_UTC,
            is_group_event: false,
        };

        let entry = format_event_entry(&event);
        assert!(entry.contains("Dentist"));
        assert!(!entry.contains("📝"));
    }
}
