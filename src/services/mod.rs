//! Services module
//!
//! This module contains the background services of the bot.

pub mod reminder;

pub use reminder::ReminderService;
