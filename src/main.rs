//! Remindbot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::{prelude::*, types::Update};
use tracing::{error, info, warn};

use remindbot::{
    config::Settings,
    database::{self, EventStore},
    handlers::commands::{self, Command},
    services::ReminderService,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting Remindbot v{}...", remindbot::VERSION);

    // The single store instance is constructed here and injected into every
    // handler and the reminder service.
    info!("Connecting to database...");
    let store = database::connect(&settings.database).await?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    // Schedule the daily reminder run
    info!(
        hour = settings.notification.hour,
        minute = settings.notification.minute,
        "Scheduling daily reminders..."
    );
    let reminder = ReminderService::new(
        bot.clone(),
        store.clone(),
        settings.notification.clone(),
    );
    reminder.spawn();

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![store])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Remindbot is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("Remindbot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry().branch(
        Update::filter_message()
            .filter_command::<Command>()
            .endpoint(handle_commands),
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    store: Arc<dyn EventStore>,
) -> HandlerResult {
    if let Err(e) = commands::handle_command(bot, msg, cmd, store).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}
