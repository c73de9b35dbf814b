//! Task Backend Trait
//!
//! Defines the seam between the task store and the remote REST API.

use async_trait::async_trait;

use crate::types::{ApiError, ApiResult};
use taskdeck_core::Task;

/// Trait that all task backends must implement.
///
/// Provides a unified interface for:
/// - Reading the full collection (list)
/// - Creating and deleting tasks
/// - Running a task's command remotely (execute)
/// - Reachability probing (health_check)
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Returns the backend name for identification.
    fn name(&self) -> &'static str;

    /// Fetch the full task collection in server order.
    async fn list(&self) -> ApiResult<Vec<Task>>;

    /// Create a task remotely.
    async fn create(&self, task: &Task) -> ApiResult<()>;

    /// Delete a task remotely by id.
    async fn delete(&self, id: &str) -> ApiResult<()>;

    /// Trigger a remote run of the task's command, returning its output.
    async fn execute(&self, id: &str) -> ApiResult<String>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> ApiResult<()>;
}

/// Map a non-success HTTP status and response body to an `ApiError`.
pub fn parse_http_error(status: u16, body: &str) -> ApiError {
    ApiError::Server {
        status,
        message: body.trim().to_string(),
    }
}
