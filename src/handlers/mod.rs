//! Handlers module
//!
//! This module contains the Telegram update handlers.

pub mod commands;

pub use commands::{handle_command, Command};
