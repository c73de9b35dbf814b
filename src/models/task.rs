//! Task View Models
//!
//! Store-owned entry types: the per-entry synchronization state and the
//! read-only snapshot handed to the presentation layer.

use serde::{Deserialize, Serialize};

use taskdeck_core::Task;

/// Synchronization state of a locally-held entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// Optimistic create still awaiting remote confirmation
    Pending,
    /// Matches the last confirmed remote outcome
    Confirmed,
    /// Restored after a rejected optimistic delete, awaiting the next
    /// successful refresh
    RollingBack,
}

impl SyncState {
    /// Whether the entry has an optimistic mutation still in flight or
    /// being reversed.
    pub fn is_settled(&self) -> bool {
        matches!(self, SyncState::Confirmed)
    }
}

/// A task plus its synchronization state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskEntry {
    pub task: Task,
    pub state: SyncState,
}

impl TaskEntry {
    /// An optimistic entry awaiting remote confirmation.
    pub fn pending(task: Task) -> Self {
        Self {
            task,
            state: SyncState::Pending,
        }
    }

    /// An entry confirmed by the backend.
    pub fn confirmed(task: Task) -> Self {
        Self {
            task,
            state: SyncState::Confirmed,
        }
    }

    /// An entry restored after a rejected delete.
    pub fn rolling_back(task: Task) -> Self {
        Self {
            task,
            state: SyncState::RollingBack,
        }
    }
}

/// Read-only view of the store's entry list.
///
/// The presentation layer only ever sees snapshots; mutations go through the
/// store's operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub entries: Vec<TaskEntry>,
}

impl TaskSnapshot {
    /// The tasks in snapshot order, without their sync states.
    pub fn tasks(&self) -> Vec<Task> {
        self.entries.iter().map(|e| e.task.clone()).collect()
    }

    /// Look up an entry by task id.
    pub fn find(&self, id: &str) -> Option<&TaskEntry> {
        self.entries.iter().find(|e| e.task.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
