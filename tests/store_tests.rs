// tests/store_tests.rs

use std::path::PathBuf;
use std::sync::Arc;

use course_eval::{
    models::feedback::FeedbackRecord,
    store::{FeedbackStore, FileStore, MemoryStore, StoreError},
};

fn temp_data_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("course_eval_store_{}", uuid::Uuid::new_v4()))
        .join("db.json")
}

fn record(rating: i64, comments: &str) -> FeedbackRecord {
    FeedbackRecord::new()
        .with("rating", rating)
        .with("comments", comments)
}

/// Shared contract checks, run against every backend.
async fn check_append_then_list(store: &dyn FeedbackStore) {
    assert!(store.list_all().await.unwrap().is_empty());

    let r1 = record(4, "Good");
    let r2 = record(2, "Too fast");

    store.append(r1.clone()).await.unwrap();
    let after_one = store.list_all().await.unwrap();
    assert_eq!(after_one.len(), 1);
    assert_eq!(after_one.last(), Some(&r1));

    store.append(r2.clone()).await.unwrap();
    let after_two = store.list_all().await.unwrap();
    assert_eq!(after_two, vec![r1.clone(), r2]);

    // Duplicates are kept.
    store.append(r1.clone()).await.unwrap();
    assert_eq!(store.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn memory_store_contract() {
    check_append_then_list(&MemoryStore::new()).await;
}

#[tokio::test]
async fn file_store_contract() {
    check_append_then_list(&FileStore::new(temp_data_path())).await;
}

#[tokio::test]
async fn file_store_missing_file_is_empty() {
    let store = FileStore::new(temp_data_path());
    assert!(!store.path().exists());
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_store_writes_feedback_document() {
    let path = temp_data_path();
    let store = FileStore::new(path.clone());
    store.append(record(5, "Great")).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        document,
        serde_json::json!({ "feedback": [{ "rating": 5, "comments": "Great" }] })
    );

    // No temporary file is left behind.
    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name() != "db.json")
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn file_store_reads_existing_document() {
    let path = temp_data_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{ "feedback": [ { "rating": 3 } ] }"#).unwrap();

    let store = FileStore::new(path);
    store.append(record(4, "Better")).await.unwrap();

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].rating(), Some(3.0));
    assert_eq!(listed[1], record(4, "Better"));
}

#[tokio::test]
async fn file_store_rejects_document_without_feedback_array() {
    let path = temp_data_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{ "responses": [] }"#).unwrap();

    let store = FileStore::new(path.clone());

    let listed = store.list_all().await;
    assert!(matches!(listed, Err(StoreError::MalformedPersistedState(_))));

    let appended = store.append(record(1, "x")).await;
    assert!(matches!(appended, Err(StoreError::MalformedPersistedState(_))));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{ "responses": [] }"#);
}

#[tokio::test]
async fn file_store_concurrent_appends_lose_nothing() {
    let store = Arc::new(FileStore::new(temp_data_path()));

    let mut handles = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.append(record(i % 5 + 1, &format!("#{}", i))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.len(), 50);

    let mut seen: Vec<String> = listed
        .iter()
        .filter_map(|r| r.get("comments").and_then(|v| v.as_str()).map(str::to_string))
        .collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 50);
}

#[tokio::test]
async fn memory_store_concurrent_appends_lose_nothing() {
    let store = Arc::new(MemoryStore::new());

    let mut handles = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.append(record(i, "c")).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.list_all().await.unwrap().len(), 50);
}
