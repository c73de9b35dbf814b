//! Task Store Integration Tests
//!
//! Drives the store through the application state with a scripted backend,
//! covering the full create/search/remove/execute lifecycle and the
//! optimistic-update guarantees.

use std::sync::Arc;

use taskdeck::{AppError, AppState, SyncState, TaskStore};
use taskdeck_api::{ApiError, MockBackend};
use taskdeck_core::Task;

fn build_task() -> Task {
    Task::new("1", "Build", "alice", "make")
}

async fn state_with_backend(backend: Arc<MockBackend>) -> AppState {
    let state = AppState::new();
    state.initialize_with_backend(backend).await.unwrap();
    state
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_then_list_includes_task() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend).await;
    let store = state.store().await.unwrap();

    store.refresh().await.unwrap();
    store
        .create(Task::new("2", "Test", "bob", "npm test"))
        .await
        .unwrap();

    let tasks = store.refresh().await.unwrap();
    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_create_against_failing_backend_leaves_only_original() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend.clone()).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    backend
        .set_fail_create(Some(ApiError::Server {
            status: 500,
            message: "rejected".to_string(),
        }))
        .await;

    let err = store
        .create(Task::new("2", "Test", "bob", "npm test"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CreateFailed { .. }));

    backend.set_fail_create(None).await;
    let tasks = store.refresh().await.unwrap();
    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);
}

#[tokio::test]
async fn test_create_with_missing_field_leaves_list_unchanged() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    for bad in [
        Task::new("", "Test", "bob", "npm test"),
        Task::new("2", "", "bob", "npm test"),
        Task::new("2", "Test", "", "npm test"),
        Task::new("2", "Test", "bob", ""),
    ] {
        let err = store.create(bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_remove_unknown_id_leaves_list_unchanged() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    let err = store.remove("missing").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(store.snapshot().await.len(), 1);
}

#[tokio::test]
async fn test_failed_delete_restores_task_at_prior_position() {
    let backend = Arc::new(MockBackend::with_tasks(vec![
        Task::new("1", "Build", "alice", "make"),
        Task::new("2", "Test", "bob", "npm test"),
        Task::new("3", "Deploy", "carol", "make deploy"),
    ]));
    let state = state_with_backend(backend.clone()).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    backend
        .set_fail_delete(Some(ApiError::Network {
            message: "connection reset".to_string(),
        }))
        .await;

    let err = store.remove("2").await.unwrap_err();
    assert!(matches!(err, AppError::DeleteFailed { .. }));

    let snapshot = store.snapshot().await;
    let ids: Vec<String> = snapshot.tasks().iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(snapshot.find("2").unwrap().state, SyncState::RollingBack);
}

#[tokio::test]
async fn test_restored_entry_settles_after_refresh() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend.clone()).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    backend
        .set_fail_delete(Some(ApiError::Network {
            message: "connection reset".to_string(),
        }))
        .await;
    store.remove("1").await.unwrap_err();

    backend.set_fail_delete(None).await;
    store.refresh().await.unwrap();
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.find("1").unwrap().state, SyncState::Confirmed);
}

#[tokio::test]
async fn test_execute_round_trip_captures_output() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    backend.set_output("1", "compiled\n").await;
    let state = state_with_backend(backend).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    let output = store.execute("1").await.unwrap();
    assert_eq!(output, "compiled\n");
    assert_eq!(
        store
            .snapshot()
            .await
            .find("1")
            .unwrap()
            .task
            .last_output
            .as_deref(),
        Some("compiled\n")
    );
}

#[tokio::test]
async fn test_execute_failure_surfaces_partial_output() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend.clone()).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    backend
        .set_fail_execute(Some(ApiError::Server {
            status: 502,
            message: "step 1 ok\nstep 2 crashed".to_string(),
        }))
        .await;

    match store.execute("1").await.unwrap_err() {
        AppError::ExecutionFailed { id, output, .. } => {
            assert_eq!(id, "1");
            assert_eq!(output.as_deref(), Some("step 1 ok\nstep 2 crashed"));
        }
        other => panic!("Expected ExecutionFailed, got {:?}", other),
    }
}

// ============================================================================
// Reconciliation
// ============================================================================

#[tokio::test]
async fn test_unreachable_backend_keeps_last_known_good_list() {
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend.clone()).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    backend
        .set_fail_list(Some(ApiError::Timeout {
            message: "request elapsed".to_string(),
        }))
        .await;

    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, AppError::Api(ApiError::Timeout { .. })));
    assert_eq!(store.snapshot().await.len(), 1);

    backend.set_fail_list(None).await;
    assert_eq!(store.refresh().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_refresh_mirrors_server_order() {
    let backend = Arc::new(MockBackend::with_tasks(vec![
        Task::new("9", "Last", "alice", "true"),
        Task::new("2", "First", "bob", "true"),
    ]));
    let state = state_with_backend(backend).await;
    let store = state.store().await.unwrap();

    let tasks = store.refresh().await.unwrap();
    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "2"]);
}

#[tokio::test]
async fn test_concurrent_delete_loser_gets_not_found() {
    // Another client already deleted the task: the backend answers 404, the
    // entry stays removed locally, and the late caller sees NotFound.
    let backend = Arc::new(MockBackend::with_tasks(vec![build_task()]));
    let state = state_with_backend(backend.clone()).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    backend
        .set_fail_delete(Some(ApiError::Server {
            status: 404,
            message: "no task with id 1".to_string(),
        }))
        .await;

    let err = store.remove("1").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(store.snapshot().await.is_empty());
}

// ============================================================================
// Ordering
// ============================================================================

#[tokio::test]
async fn test_operations_on_distinct_ids_proceed_concurrently() {
    let backend = Arc::new(MockBackend::with_tasks(vec![
        Task::new("1", "Build", "alice", "make"),
        Task::new("2", "Test", "bob", "npm test"),
    ]));
    let state = state_with_backend(backend).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    let store_a: Arc<TaskStore> = store.clone();
    let store_b: Arc<TaskStore> = store.clone();
    let (a, b) = tokio::join!(store_a.execute("1"), store_b.remove("2"));
    a.unwrap();
    b.unwrap();

    let ids: Vec<String> = store
        .snapshot()
        .await
        .tasks()
        .iter()
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(ids, vec!["1"]);
}

#[tokio::test]
async fn test_recreate_after_failed_create_succeeds() {
    // A rolled-back create leaves no trace, so the same id can be submitted
    // again once the backend recovers.
    let backend = Arc::new(MockBackend::new());
    let state = state_with_backend(backend.clone()).await;
    let store = state.store().await.unwrap();
    store.refresh().await.unwrap();

    backend
        .set_fail_create(Some(ApiError::Server {
            status: 500,
            message: "rejected".to_string(),
        }))
        .await;
    store.create(build_task()).await.unwrap_err();

    backend.set_fail_create(None).await;
    store.create(build_task()).await.unwrap();
    assert_eq!(store.snapshot().await.len(), 1);
}
