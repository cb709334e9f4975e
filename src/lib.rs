//! Remindbot Telegram Bot
//!
//! A Telegram bot that stores dated reminder events and notifies the owning
//! chat one day before each event occurs. The library exposes the event
//! store, the command handlers and the daily reminder service as modular
//! components.

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use database::EventStore;
pub use utils::errors::{BotError, Result};

// Re-export main components for easy access
pub use services::ReminderService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
