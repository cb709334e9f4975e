//! Configuration module
//!
//! This module handles application settings and their validation.

pub mod settings;
pub mod validation;

pub use settings::{BotConfig, DatabaseConfig, LoggingConfig, NotificationConfig, Settings};
