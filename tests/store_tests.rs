// Integration tests for the in-memory store backend

use chrono::Utc;
use rasid::config::StoreConfig;
use rasid::conversation::{ReporterSession, SessionPatch, Step};
use rasid::store::{MemoryStore, SessionStore, StoreFactory};

const IDENTITY: &str = "9647700000002";

#[tokio::test]
async fn test_get_absent_session_is_none() {
    let store = MemoryStore::new();
    assert!(store.get(IDENTITY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_put_then_get_roundtrip() {
    let store = MemoryStore::new();

    let mut session = ReporterSession::new(IDENTITY, Utc::now());
    session.current_step = Step::Area;
    session.full_name = Some("Ali Hassan Mohammed".to_string());
    store.put(&session).await.unwrap();

    let loaded = store.get(IDENTITY).await.unwrap().unwrap();
    assert_eq!(loaded.current_step, Step::Area);
    assert_eq!(loaded.full_name.as_deref(), Some("Ali Hassan Mohammed"));
}

#[tokio::test]
async fn test_put_overwrites_existing_session() {
    let store = MemoryStore::new();

    let mut session = ReporterSession::new(IDENTITY, Utc::now());
    session.current_step = Step::Voted;
    store.put(&session).await.unwrap();

    // Restart replaces the whole row
    let fresh = ReporterSession::new(IDENTITY, Utc::now());
    store.put(&fresh).await.unwrap();

    let loaded = store.get(IDENTITY).await.unwrap().unwrap();
    assert_eq!(loaded.current_step, Step::Start);
    assert!(loaded.full_name.is_none());
}

#[tokio::test]
async fn test_patch_updates_only_named_fields() {
    let store = MemoryStore::new();

    let mut session = ReporterSession::new(IDENTITY, Utc::now());
    session.current_step = Step::Name;
    session.full_name = Some("Ali Hassan Mohammed".to_string());
    store.put(&session).await.unwrap();

    store
        .patch(
            IDENTITY,
            SessionPatch {
                current_step: Some(Step::Area),
                area_name: Some("Baghdad".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let loaded = store.get(IDENTITY).await.unwrap().unwrap();
    assert_eq!(loaded.current_step, Step::Area);
    assert_eq!(loaded.area_name.as_deref(), Some("Baghdad"));
    // Untouched fields keep their values
    assert_eq!(loaded.full_name.as_deref(), Some("Ali Hassan Mohammed"));
}

#[tokio::test]
async fn test_patch_without_session_fails() {
    let store = MemoryStore::new();

    let result = store
        .patch(IDENTITY, SessionPatch::default())
        .await;

    assert!(result.is_err());
}

#[test]
fn test_factory_rejects_unknown_backend() {
    let config = StoreConfig {
        kind: "postgres".to_string(),
        call_timeout_ms: 5000,
    };

    assert!(StoreFactory::create(&config).is_err());
}

#[test]
fn test_factory_builds_memory_backend() {
    assert!(StoreFactory::create(&StoreConfig::default()).is_ok());
}
