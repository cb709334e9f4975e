//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Database configuration
///
/// The URL selects the backing engine: `mysql://` or `mariadb://` connect to
/// a server, anything else is treated as a local SQLite database.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Daily reminder configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Hour of day (UTC) at which the daily run fires.
    pub hour: u32,
    pub minute: u32,
    /// How many days before an event the reminder is sent.
    pub days_ahead: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("REMINDBOT").separator("__"))
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;

        // Plain BOT_TOKEN / DATABASE_URL are honored for deployments that
        // configure the bot through bare environment variables.
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            settings.bot.token = token;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            settings.database.url = url;
        }

        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            database: DatabaseConfig {
                url: "sqlite://events.db".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            notification: NotificationConfig {
                hour: 9,
                minute: 0,
                days_ahead: 1,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "./logs".to_string(),
            },
        }
    }
}
