//! Task Store
//!
//! The authoritative local view of the task collection. All reads and writes
//! go through the store, which mediates against the remote backend with
//! deterministic reconciliation rules:
//!
//! - creates and deletes apply optimistically and roll back on rejection
//! - a failed refresh leaves the last known-good list untouched
//! - operations on the same task id are serialized behind a per-id lock, so
//!   a delete racing a create for the same id waits for the create to
//!   resolve instead of resurrecting a rolled-back entry

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::models::task::{SyncState, TaskEntry, TaskSnapshot};
use crate::utils::error::{AppError, AppResult};
use taskdeck_api::TaskBackend;
use taskdeck_core::{SearchView, Task};

#[derive(Default)]
struct StoreState {
    /// The visible entry list, in server order with optimistic entries kept
    /// in insertion position.
    entries: Vec<TaskEntry>,
    /// Ids with a delete in flight; a racing refresh must not re-add them.
    deleting: HashSet<String>,
}

impl StoreState {
    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.task.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }
}

/// The task store. Owns the in-memory task list exclusively; the
/// presentation layer only reads snapshots.
pub struct TaskStore {
    backend: Arc<dyn TaskBackend>,
    state: RwLock<StoreState>,
    id_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl TaskStore {
    /// Create a store over the given backend with an empty local list.
    pub fn new(backend: Arc<dyn TaskBackend>) -> Self {
        Self {
            backend,
            state: RwLock::new(StoreState::default()),
            id_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Name of the backend this store mediates against.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Get the serialization lock for a task id, creating it on first use.
    async fn id_lock(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.id_locks.lock().await;
        locks
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Fetch the full collection from the backend and reconcile.
    ///
    /// On success the local list mirrors the server order; `last_output` is
    /// carried over by id, optimistic creates the server has not confirmed
    /// yet are retained, and ids with an in-flight delete are skipped. On
    /// failure the last known-good list is left untouched.
    pub async fn refresh(&self) -> AppResult<Vec<Task>> {
        let fetched = self.backend.list().await?;

        let mut state = self.state.write().await;
        let mut next: Vec<TaskEntry> = Vec::with_capacity(fetched.len());
        for task in fetched {
            if state.deleting.contains(&task.id) {
                continue;
            }
            let last_output = state
                .entries
                .iter()
                .find(|e| e.task.id == task.id)
                .and_then(|e| e.task.last_output.clone());
            next.push(TaskEntry::confirmed(Task {
                last_output,
                ..task
            }));
        }
        for entry in &state.entries {
            if entry.state == SyncState::Pending && !next.iter().any(|e| e.task.id == entry.task.id)
            {
                next.push(entry.clone());
            }
        }
        state.entries = next;

        debug!(count = state.entries.len(), "task list refreshed");
        Ok(state.entries.iter().map(|e| e.task.clone()).collect())
    }

    /// Create a task: validate, apply optimistically, confirm remotely.
    ///
    /// Rejected input never reaches the network. A remote rejection removes
    /// the optimistic entry and surfaces `CreateFailed` carrying the
    /// original task.
    pub async fn create(&self, task: Task) -> AppResult<()> {
        task.validate()?;

        let lock = self.id_lock(&task.id).await;
        let _guard = lock.lock().await;

        {
            let mut state = self.state.write().await;
            if state.contains(&task.id) {
                return Err(AppError::validation(format!(
                    "duplicate task id: {}",
                    task.id
                )));
            }
            state.entries.push(TaskEntry::pending(task.clone()));
        }

        match self.backend.create(&task).await {
            Ok(()) => {
                let mut state = self.state.write().await;
                if let Some(pos) = state.position(&task.id) {
                    state.entries[pos].state = SyncState::Confirmed;
                }
                debug!(id = %task.id, "create confirmed");
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.write().await;
                state.entries.retain(|e| e.task.id != task.id);
                warn!(id = %task.id, %err, "create rejected, entry rolled back");
                Err(AppError::CreateFailed {
                    task: Box::new(task),
                    source: err,
                })
            }
        }
    }

    /// Remove a task: apply optimistically, confirm remotely.
    ///
    /// A remote rejection re-inserts the entry at its original position,
    /// tagged `RollingBack` until the next successful refresh. A remote 404
    /// means another client won the race; the entry stays removed and the
    /// late caller gets `NotFound`.
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        let lock = self.id_lock(id).await;
        let _guard = lock.lock().await;

        let (position, entry) = {
            let mut state = self.state.write().await;
            let position = state
                .position(id)
                .ok_or_else(|| AppError::not_found(format!("task {}", id)))?;
            let entry = state.entries.remove(position);
            state.deleting.insert(id.to_string());
            (position, entry)
        };

        match self.backend.delete(id).await {
            Ok(()) => {
                self.state.write().await.deleting.remove(id);
                debug!(id = %id, "delete confirmed");
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.state.write().await.deleting.remove(id);
                warn!(id = %id, "task already deleted remotely");
                Err(AppError::not_found(format!("task {}", id)))
            }
            Err(err) => {
                let mut state = self.state.write().await;
                state.deleting.remove(id);
                let at = position.min(state.entries.len());
                state
                    .entries
                    .insert(at, TaskEntry::rolling_back(entry.task));
                warn!(id = %id, %err, "delete rejected, entry restored");
                Err(AppError::DeleteFailed {
                    id: id.to_string(),
                    source: err,
                })
            }
        }
    }

    /// Run a task's command remotely and capture its output locally.
    ///
    /// On failure surfaces `ExecutionFailed` with whatever partial output
    /// the backend returned; a remote 404 surfaces `NotFound`.
    pub async fn execute(&self, id: &str) -> AppResult<String> {
        let lock = self.id_lock(id).await;
        let _guard = lock.lock().await;

        if !self.state.read().await.contains(id) {
            return Err(AppError::not_found(format!("task {}", id)));
        }

        match self.backend.execute(id).await {
            Ok(output) => {
                let mut state = self.state.write().await;
                if let Some(pos) = state.position(id) {
                    state.entries[pos].task.last_output = Some(output.clone());
                }
                debug!(id = %id, bytes = output.len(), "execution output captured");
                Ok(output)
            }
            Err(err) if err.is_not_found() => {
                warn!(id = %id, "task deleted remotely before execution");
                Err(AppError::not_found(format!("task {}", id)))
            }
            Err(err) => {
                let output = err.partial_body().map(|s| s.to_string());
                warn!(id = %id, %err, "execution failed");
                Err(AppError::ExecutionFailed {
                    id: id.to_string(),
                    output,
                    source: err,
                })
            }
        }
    }

    /// Filter the current local list by a case-insensitive substring match
    /// on `name`. Pure over the snapshot; no network call, no mutation.
    pub async fn search(&self, query: &str) -> SearchView {
        let state = self.state.read().await;
        let tasks: Arc<[Task]> = state
            .entries
            .iter()
            .map(|e| e.task.clone())
            .collect::<Vec<_>>()
            .into();
        SearchView::new(tasks, query)
    }

    /// Read-only snapshot of the entry list for the presentation layer.
    pub async fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            entries: self.state.read().await.entries.clone(),
        }
    }

    /// Probe the backend for reachability.
    pub async fn health_check(&self) -> AppResult<()> {
        self.backend.health_check().await?;
        Ok(())
    }
}
