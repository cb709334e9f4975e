//! Event model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dated reminder record owned by a user and associated with a chat.
///
/// Events are immutable after creation; the lifecycle is create, read any
/// number of times, then delete by the owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub owner_id: i64,
    pub chat_id: i64,
    pub event_date: NaiveDate,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub is_group_event: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub owner_id: i64,
    pub chat_id: i64,
    pub event_date: NaiveDate,
    pub title: String,
    pub description: String,
    pub is_group_event: bool,
}

impl Event {
    /// Whether the event belongs to the given user.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}
