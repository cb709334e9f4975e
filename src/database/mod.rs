//! Database module
//!
//! This module holds the event store: one `EventStore` interface with a
//! file-based (SQLite) and a client-server (MySQL) implementation, selected
//! by the configured connection URL.

pub mod mysql;
pub mod sqlite;
pub mod store;

// Re-export commonly used database components
pub use mysql::MySqlEventStore;
pub use sqlite::SqliteEventStore;
pub use store::{connect, is_server_url, EventStore};
