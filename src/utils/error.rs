//! Application Error Types
//!
//! The caller-facing error surface of the task store plus the ambient
//! application errors (config, I/O, serialization).

use thiserror::Error;

use taskdeck_api::ApiError;
use taskdeck_core::{CoreError, Task};

/// Application-wide error type.
///
/// Store operations reject bad input with `Validation` before any state
/// mutation or network call; optimistic-mutation failures roll local state
/// back before one of the `*Failed` variants is surfaced.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors, rejected before any mutation or network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation on an unknown task id
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Transport failure surfaced unchanged (list/refresh path)
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Remote rejected an optimistic create; carries the original task so
    /// the caller can retry or display it
    #[error("Create failed for task {}: {source}", .task.id)]
    CreateFailed {
        task: Box<Task>,
        #[source]
        source: ApiError,
    },

    /// Remote rejected an optimistic delete; the entry has been restored
    #[error("Delete failed for task {id}: {source}")]
    DeleteFailed {
        id: String,
        #[source]
        source: ApiError,
    },

    /// Remote run request failed; carries any partial output returned
    #[error("Execution failed for task {id}: {source}")]
    ExecutionFailed {
        id: String,
        output: Option<String>,
        #[source]
        source: ApiError,
    },

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(msg) => AppError::Config(msg),
            CoreError::Io(e) => AppError::Io(e),
            CoreError::Serialization(e) => AppError::Serialization(e),
            CoreError::Validation(msg) => AppError::Validation(msg),
            CoreError::NotFound(msg) => AppError::NotFound(msg),
            CoreError::Internal(msg) => AppError::Internal(msg),
        }
    }
}
