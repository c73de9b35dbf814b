//! REST Backend
//!
//! Implementation of the `TaskBackend` trait against the remote REST API.
//!
//! Wire contract: `GET {base}/tasks` returns a JSON array, `POST {base}/tasks`
//! takes a JSON task body, `DELETE {base}/tasks/{id}` removes by id, and
//! `POST {base}/tasks/{id}/execute` runs the task's command and returns the
//! output as plain text.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::backend::{parse_http_error, TaskBackend};
use crate::http_client::build_http_client;
use crate::types::{ApiError, ApiResult, BackendConfig};
use taskdeck_core::Task;

/// REST backend speaking the task API over HTTP
pub struct RestBackend {
    config: BackendConfig,
    client: reqwest::Client,
}

impl RestBackend {
    /// Create a new REST backend with the given configuration.
    ///
    /// Fails with `InvalidUrl` if the configured base URL does not parse.
    pub fn new(config: BackendConfig) -> ApiResult<Self> {
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            message: format!("{}: {}", config.base_url, e),
        })?;
        let client = build_http_client(Duration::from_secs(config.timeout_secs));
        Ok(Self { config, client })
    }

    /// Get the base URL without a trailing slash.
    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// URL of the task collection.
    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url())
    }

    /// URL of a single task.
    fn task_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base_url(), id)
    }

    /// Map a reqwest transport error to an `ApiError`.
    fn map_transport_error(err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            ApiError::Decode {
                message: err.to_string(),
            }
        } else {
            ApiError::Network {
                message: err.to_string(),
            }
        }
    }

    /// Read the response body for a non-success status and build the error.
    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        parse_http_error(status, &body)
    }
}

#[async_trait]
impl TaskBackend for RestBackend {
    fn name(&self) -> &'static str {
        "rest"
    }

    async fn list(&self) -> ApiResult<Vec<Task>> {
        let url = self.tasks_url();
        debug!(url = %url, "fetching task collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            warn!(%err, "list rejected by backend");
            return Err(err);
        }

        response
            .json::<Vec<Task>>()
            .await
            .map_err(Self::map_transport_error)
    }

    async fn create(&self, task: &Task) -> ApiResult<()> {
        let url = self.tasks_url();
        debug!(url = %url, id = %task.id, "creating task");

        let response = self
            .client
            .post(&url)
            .json(task)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            warn!(id = %task.id, %err, "create rejected by backend");
            return Err(err);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let url = self.task_url(id);
        debug!(url = %url, "deleting task");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            warn!(id = %id, %err, "delete rejected by backend");
            return Err(err);
        }
        Ok(())
    }

    async fn execute(&self, id: &str) -> ApiResult<String> {
        let url = format!("{}/execute", self.task_url(id));
        debug!(url = %url, "executing task");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            warn!(id = %id, %err, "execute rejected by backend");
            return Err(err);
        }

        response.text().await.map_err(Self::map_transport_error)
    }

    async fn health_check(&self) -> ApiResult<()> {
        let response = self
            .client
            .get(self.tasks_url())
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}
