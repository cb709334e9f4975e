//! MySQL event store implementation
//!
//! Client-server engine, selected when the database URL carries a
//! `mysql://` or `mariadb://` scheme.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;
use crate::database::store::EventStore;
use crate::models::{CreateEventRequest, Event};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct MySqlEventStore {
    pool: MySqlPool,
}

impl MySqlEventStore {
    /// Connect to the server and provision the schema.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        // sqlx only understands the mysql:// scheme; mariadb:// URLs speak
        // the same protocol.
        let url = match config.url.strip_prefix("mariadb://") {
            Some(rest) => format!("mysql://{rest}"),
            None => config.url.clone(),
        };

        let options = MySqlConnectOptions::from_str(&url)?.charset("utf8mb4");

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;

        tracing::info!("Connected to MySQL event store");
        Ok(store)
    }

    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the events table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS events (
                id BIGINT AUTO_INCREMENT PRIMARY KEY,
                owner_id BIGINT NOT NULL,
                chat_id BIGINT NOT NULL,
                event_date DATE NOT NULL,
                title VARCHAR(255) NOT NULL,
                description TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                is_group_event BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl EventStore for MySqlEventStore {
    async fn create(&self, request: CreateEventRequest) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO events (owner_id, chat_id, event_date, title, description, created_at, is_group_event)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(request.owner_id)
        .bind(request.chat_id)
        .bind(request.event_date)
        .bind(request.title)
        .bind(request.description)
        .bind(Utc::now())
        .bind(request.is_group_event)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    async fn list_for_owner(&self, owner_id: i64, chat_id: i64) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, owner_id, chat_id, event_date, title, description, created_at, is_group_event
            FROM events
            WHERE owner_id = ? AND chat_id = ?
            ORDER BY event_date ASC
            "#,
        )
        .bind(owner_id)
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn list_for_group(&self, chat_id: i64) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, owner_id, chat_id, event_date, title, description, created_at, is_group_event
            FROM events
            WHERE chat_id = ? AND is_group_event = TRUE
            ORDER BY event_date ASC
            "#,
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, owner_id, chat_id, event_date, title, description, created_at, is_group_event
            FROM events
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn delete_for_owner(&self, id: i64, owner_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn select_due(&self, days_ahead: i64) -> Result<Vec<Event>> {
        let target_date = Utc::now().date_naive() + Duration::days(days_ahead);

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, owner_id, chat_id, event_date, title, description, created_at, is_group_event
            FROM events
            WHERE event_date = ?
            "#,
        )
        .bind(target_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
