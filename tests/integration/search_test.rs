//! Search View Integration Tests
//!
//! The search view is pure over the store's snapshot: no network traffic,
//! stable results, restartable iteration.

use std::sync::Arc;

use taskdeck::TaskStore;
use taskdeck_api::MockBackend;
use taskdeck_core::Task;

async fn seeded_store() -> (Arc<MockBackend>, TaskStore) {
    let backend = Arc::new(MockBackend::with_tasks(vec![Task::new(
        "1", "Build", "alice", "make",
    )]));
    let store = TaskStore::new(backend.clone());
    store.refresh().await.unwrap();
    (backend, store)
}

#[tokio::test]
async fn test_search_substring_scenario() {
    let (_, store) = seeded_store().await;

    let hits = store.search("bui").await.matches();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");

    let misses = store.search("zz").await.matches();
    assert!(misses.is_empty());
}

#[tokio::test]
async fn test_search_ignores_case() {
    let (_, store) = seeded_store().await;
    assert_eq!(store.search("BUILD").await.count(), 1);
    assert_eq!(store.search("bUiLd").await.count(), 1);
}

#[tokio::test]
async fn test_search_is_side_effect_free() {
    let (backend, store) = seeded_store().await;
    let calls_before = backend.calls().await;

    for _ in 0..3 {
        let view = store.search("build").await;
        assert_eq!(view.count(), 1);
    }

    // repeated searches issued no network calls and changed nothing
    assert_eq!(backend.calls().await, calls_before);
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_search_view_is_restartable() {
    let (_, store) = seeded_store().await;
    let view = store.search("b").await;

    let first: Vec<String> = view.iter().map(|t| t.id.clone()).collect();
    let second: Vec<String> = view.iter().map(|t| t.id.clone()).collect();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_search_sees_optimistic_entries() {
    let (_, store) = seeded_store().await;
    store
        .create(Task::new("2", "Build docs", "bob", "mkdocs build"))
        .await
        .unwrap();

    let ids: Vec<String> = store
        .search("build")
        .await
        .iter()
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}
