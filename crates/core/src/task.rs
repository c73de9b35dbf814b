//! Task Model
//!
//! The task record shared across the Taskdeck workspace: a named, owned,
//! executable command identified by a caller-assigned id.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A single manageable unit of work.
///
/// The `id` is assigned by the caller at creation time; the store never
/// generates ids. `last_output` is captured locally after an execute and is
/// not part of the create payload sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, assigned by the caller
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text owner
    pub owner: String,
    /// Shell-like command text associated with the task
    pub command: String,
    /// Output captured by the most recent execute, transient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_output: Option<String>,
}

impl Task {
    /// Create a task with all required fields and no captured output.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            command: command.into(),
            last_output: None,
        }
    }

    /// Validate that every required field is non-empty.
    ///
    /// The error names the first offending field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::validation("id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name must not be empty"));
        }
        if self.owner.trim().is_empty() {
            return Err(CoreError::validation("owner must not be empty"));
        }
        if self.command.trim().is_empty() {
            return Err(CoreError::validation("command must not be empty"));
        }
        Ok(())
    }
}
