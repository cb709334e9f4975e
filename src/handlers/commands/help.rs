//! Help command handler

use teloxide::{prelude::*, types::Message, Bot};

use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    let help_text = "📚 Usage guide\n\n\
        🎯 Add an event:\n\
        /add YYYY-MM-DD title description\n\n\
        📅 Show upcoming events:\n\
        /list\n\n\
        🗑️ Delete an event:\n\
        /remove <id>\n\n\
        💡 Examples:\n\
        • /add 2024-03-15 math-exam\n\
        • /add 2024-03-20 dentist Bring the referral letter\n\
        • /remove 1\n\n\
        🔔 The bot reminds you one day before each event";

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}
