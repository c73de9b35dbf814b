//! Mock task backend for testing.
//!
//! Records every call and serves scripted responses, making it easy to write
//! deterministic tests for the store's reconciliation logic without a live
//! backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::backend::TaskBackend;
use crate::types::{ApiError, ApiResult};
use taskdeck_core::Task;

#[derive(Default)]
struct MockState {
    tasks: Vec<Task>,
    calls: Vec<String>,
    outputs: HashMap<String, String>,
    fail_list: Option<ApiError>,
    fail_create: Option<ApiError>,
    fail_delete: Option<ApiError>,
    fail_execute: Option<ApiError>,
}

/// A test-double backend that records calls and serves scripted responses.
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with some tasks already present remotely.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Mutex::new(MockState {
                tasks,
                ..MockState::default()
            }),
        }
    }

    /// Pre-load the output `execute` should return for a task id.
    pub async fn set_output(&self, id: &str, output: &str) {
        let mut state = self.state.lock().await;
        state.outputs.insert(id.to_string(), output.to_string());
    }

    /// Script the next outcome of `list` (and `health_check`).
    pub async fn set_fail_list(&self, err: Option<ApiError>) {
        self.state.lock().await.fail_list = err;
    }

    /// Script the outcome of `create`.
    pub async fn set_fail_create(&self, err: Option<ApiError>) {
        self.state.lock().await.fail_create = err;
    }

    /// Script the outcome of `delete`.
    pub async fn set_fail_delete(&self, err: Option<ApiError>) {
        self.state.lock().await.fail_delete = err;
    }

    /// Script the outcome of `execute`.
    pub async fn set_fail_execute(&self, err: Option<ApiError>) {
        self.state.lock().await.fail_execute = err;
    }

    /// All calls executed against this backend, in order.
    pub async fn calls(&self) -> Vec<String> {
        self.state.lock().await.calls.clone()
    }

    /// The backend's current task collection.
    pub async fn tasks(&self) -> Vec<Task> {
        self.state.lock().await.tasks.clone()
    }
}

#[async_trait]
impl TaskBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list(&self) -> ApiResult<Vec<Task>> {
        let mut state = self.state.lock().await;
        state.calls.push("list".to_string());
        if let Some(err) = &state.fail_list {
            return Err(err.clone());
        }
        Ok(state.tasks.clone())
    }

    async fn create(&self, task: &Task) -> ApiResult<()> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("create {}", task.id));
        if let Some(err) = &state.fail_create {
            return Err(err.clone());
        }
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("delete {}", id));
        if let Some(err) = &state.fail_delete {
            return Err(err.clone());
        }
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(ApiError::Server {
                status: 404,
                message: format!("no task with id {}", id),
            });
        }
        Ok(())
    }

    async fn execute(&self, id: &str) -> ApiResult<String> {
        let mut state = self.state.lock().await;
        state.calls.push(format!("execute {}", id));
        if let Some(err) = &state.fail_execute {
            return Err(err.clone());
        }
        let command = match state.tasks.iter().find(|t| t.id == id) {
            Some(task) => task.command.clone(),
            None => {
                return Err(ApiError::Server {
                    status: 404,
                    message: format!("no task with id {}", id),
                })
            }
        };
        if let Some(output) = state.outputs.get(id) {
            return Ok(output.clone());
        }
        Ok(format!("ran: {}", command))
    }

    async fn health_check(&self) -> ApiResult<()> {
        let mut state = self.state.lock().await;
        state.calls.push("health".to_string());
        if let Some(err) = &state.fail_list {
            return Err(err.clone());
        }
        Ok(())
    }
}
