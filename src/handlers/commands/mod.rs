//! Command handlers module
//!
//! This module contains handlers for all bot commands like /add, /list, etc.

pub mod events;
pub mod help;
pub mod start;

use std::sync::Arc;

use teloxide::{types::Message, utils::command::BotCommands, Bot};

use crate::database::EventStore;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Remindbot commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the welcome message")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Add an event: /add YYYY-MM-DD title [description]")]
    Add(String),
    #[command(description = "List upcoming events")]
    List,
    #[command(description = "Remove an event by id: /remove <id>")]
    Remove(String),
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    store: Arc<dyn EventStore>,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg).await,
        Command::Help => help::handle_help(bot, msg).await,
        Command::Add(args) => events::handle_add(bot, msg, store, args).await,
        Command::List => events::handle_list(bot, msg, store).await,
        Command::Remove(args) => events::handle_remove(bot, msg, store, args).await,
    }
}
