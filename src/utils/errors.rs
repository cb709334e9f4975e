//! Error handling for remindbot
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the remindbot application
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for remindbot operations
pub type Result<T> = std::result::Result<T, BotError>;

impl BotError {
    /// Check if reissuing the failed command could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            BotError::Database(_) => false,
            BotError::Telegram(_) => true,
            BotError::Config(_) => false,
            BotError::EventNotFound { .. } => false,
            BotError::PermissionDenied(_) => false,
            BotError::InvalidInput(_) => false,
            BotError::Io(_) => true,
        }
    }
}
