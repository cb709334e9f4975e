//! Start command handler

use teloxide::{prelude::*, types::Message, Bot};

use crate::utils::errors::Result;

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message) -> Result<()> {
    let welcome_text = "🎓 Welcome to the reminder bot!\n\n\
        📋 Commands:\n\
        • /add date title description - add an event\n\
        • /list - show upcoming events\n\
        • /remove id - delete an event\n\
        • /help - usage guide\n\n\
        💡 Example: /add 2024-03-15 math-exam\n\n\
        🔔 You will get a reminder one day before each event";

    bot.send_message(msg.chat.id, welcome_text).await?;
    Ok(())
}
