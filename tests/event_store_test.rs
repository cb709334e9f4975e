//! Integration tests for the event store
//!
//! Every test runs against the SQLite backend; both backends share the same
//! operation semantics, so these tests specify the store contract.

use chrono::{Duration, NaiveDate, Utc};
use remindbot::config::DatabaseConfig;
use remindbot::database::{self, EventStore, SqliteEventStore};
use remindbot::models::CreateEventRequest;

fn sqlite_config(url: &str) -> DatabaseConfig {
    DatabaseConfig {
        url: url.to_string(),
        // One connection keeps in-memory databases coherent across queries.
        max_connections: 1,
        min_connections: 1,
    }
}

async fn memory_store() -> SqliteEventStore {
    SqliteEventStore::connect(&sqlite_config("sqlite::memory:"))
        .await
        .expect("Failed to open in-memory store")
}

fn request(
    owner_id: i64,
    chat_id: i64,
    date: NaiveDate,
    title: &str,
    description: &str,
) -> CreateEventRequest {
    CreateEventRequest {
        owner_id,
        chat_id,
        event_date: date,
        title: title.to_string(),
        description: description.to_string(),
        is_group_event: chat_id != owner_id,
    }
}

fn date(ymd: (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).expect("valid date")
}

#[tokio::test]
async fn test_create_then_find_round_trips_all_fields() {
    let store = memory_store().await;

    let id = store
        .create(request(1, 1, date((2024, 3, 15)), "Math Exam", ""))
        .await
        .unwrap();
    assert!(id > 0);

    let event = store.find_by_id(id).await.unwrap().expect("event exists");
    assert_eq!(event.id, id);
    assert_eq!(event.owner_id, 1);
    assert_eq!(event.chat_id, 1);
    assert_eq!(event.event_date, date((2024, 3, 15)));
    assert_eq!(event.title, "Math Exam");
    assert_eq!(event.description, "");
    assert!(!event.is_group_event);
}

#[tokio::test]
async fn test_find_by_id_absent() {
    let store = memory_store().await;
    assert!(store.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_for_owner_is_idempotent() {
    let store = memory_store().await;
    let id = store
        .create(request(1, 1, date((2030, 6, 1)), "Dentist", ""))
        .await
        .unwrap();

    assert!(store.delete_for_owner(id, 1).await.unwrap());
    // Second attempt reports failure, not an error.
    assert!(!store.delete_for_owner(id, 1).await.unwrap());
    assert!(store.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_for_owner_rejects_wrong_owner() {
    let store = memory_store().await;
    let id = store
        .create(request(1, 1, date((2030, 6, 1)), "Dentist", ""))
        .await
        .unwrap();

    assert!(!store.delete_for_owner(id, 999).await.unwrap());
    assert!(store.find_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_list_for_owner_is_chat_scoped_and_ordered() {
    let store = memory_store().await;

    store
        .create(request(1, 1, date((2030, 6, 20)), "Later", ""))
        .await
        .unwrap();
    store
        .create(request(1, 1, date((2030, 6, 5)), "Sooner", ""))
        .await
        .unwrap();
    // Foreign rows: other owner, and the same owner in another chat.
    store
        .create(request(2, 1, date((2030, 6, 1)), "Other owner", ""))
        .await
        .unwrap();
    store
        .create(request(1, 50, date((2030, 6, 1)), "Other chat", ""))
        .await
        .unwrap();

    let events = store.list_for_owner(1, 1).await.unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.owner_id == 1 && e.chat_id == 1));
    assert_eq!(events[0].title, "Sooner");
    assert_eq!(events[1].title, "Later");
}

#[tokio::test]
async fn test_list_for_group_only_returns_group_events() {
    let store = memory_store().await;

    store
        .create(request(1, 2, date((2030, 6, 10)), "Team review", ""))
        .await
        .unwrap();
    store
        .create(request(3, 2, date((2030, 6, 3)), "Standup", ""))
        .await
        .unwrap();
    store
        .create(request(2, 2, date((2030, 6, 1)), "Personal in chat 2", ""))
        .await
        .unwrap();

    let events = store.list_for_group(2).await.unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.is_group_event));
    assert_eq!(events[0].title, "Standup");
    assert_eq!(events[1].title, "Team review");
}

#[tokio::test]
async fn test_group_event_scenario() {
    let store = memory_store().await;

    let id = store
        .create(request(1, 2, date((2030, 9, 1)), "Group exam", ""))
        .await
        .unwrap();

    let event = store.find_by_id(id).await.unwrap().expect("event exists");
    assert!(event.is_group_event);

    let group = store.list_for_group(2).await.unwrap();
    assert!(group.iter().any(|e| e.id == id));

    let personal = store.list_for_owner(1, 1).await.unwrap();
    assert!(personal.iter().all(|e| e.id != id));
}

#[tokio::test]
async fn test_select_due_matches_exact_horizon() {
    let store = memory_store().await;
    let today = Utc::now().date_naive();

    let due_id = store
        .create(request(1, 1, today + Duration::days(1), "Due tomorrow", ""))
        .await
        .unwrap();
    let group_due_id = store
        .create(request(3, 4, today + Duration::days(1), "Group due", ""))
        .await
        .unwrap();
    store
        .create(request(1, 1, today, "Due today", ""))
        .await
        .unwrap();
    store
        .create(request(1, 1, today + Duration::days(2), "Due later", ""))
        .await
        .unwrap();

    let due = store.select_due(1).await.unwrap();
    let mut ids: Vec<i64> = due.iter().map(|e| e.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![due_id, group_due_id]);
}

#[tokio::test]
async fn test_select_due_empty_when_none_match() {
    let store = memory_store().await;
    let today = Utc::now().date_naive();

    store
        .create(request(1, 1, today + Duration::days(3), "Far away", ""))
        .await
        .unwrap();

    assert!(store.select_due(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_description_round_trip() {
    let store = memory_store().await;

    let id = store
        .create(request(
            5,
            5,
            date((2031, 1, 2)),
            "Checkup",
            "Bring the referral letter",
        ))
        .await
        .unwrap();

    let event = store.find_by_id(id).await.unwrap().expect("event exists");
    assert_eq!(event.description, "Bring the referral letter");
}

#[tokio::test]
async fn test_file_store_survives_reconnect() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("events.db");
    let url = format!("sqlite://{}", db_path.display());
    let config = sqlite_config(&url);

    let id = {
        let store = SqliteEventStore::connect(&config).await.unwrap();
        store
            .create(request(1, 1, date((2031, 5, 5)), "Persistent", ""))
            .await
            .unwrap()
    };

    // Reconnecting re-runs schema provisioning, which must be
    // non-destructive.
    let store = SqliteEventStore::connect(&config).await.unwrap();
    let event = store.find_by_id(id).await.unwrap().expect("event survived");
    assert_eq!(event.title, "Persistent");
}

#[tokio::test]
async fn test_connect_dispatches_to_sqlite_for_file_urls() {
    let store = database::connect(&sqlite_config("sqlite::memory:"))
        .await
        .unwrap();

    let id = store
        .create(request(1, 1, date((2031, 7, 7)), "Via dispatch", ""))
        .await
        .unwrap();
    assert!(store.find_by_id(id).await.unwrap().is_some());
}
