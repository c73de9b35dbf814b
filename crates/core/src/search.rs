//! Search View
//!
//! A lazy, restartable filter over a task snapshot. The view owns a shared
//! snapshot and a normalized query; iterating never mutates anything, so the
//! same view can be walked any number of times with identical results.

use std::sync::Arc;

use crate::task::Task;

/// A case-insensitive substring filter on task names.
///
/// Built over an immutable snapshot, so results are stable until the caller
/// asks the store for a fresh view.
#[derive(Debug, Clone)]
pub struct SearchView {
    tasks: Arc<[Task]>,
    query: String,
}

impl SearchView {
    /// Build a view over a snapshot. The query is normalized to lowercase once.
    pub fn new(tasks: Arc<[Task]>, query: &str) -> Self {
        Self {
            tasks,
            query: query.to_lowercase(),
        }
    }

    /// Lazily iterate the matching tasks in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |task| task.name.to_lowercase().contains(&self.query))
    }

    /// Collect the matches into an owned list.
    pub fn matches(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }

    /// Number of matching tasks.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// The normalized query this view filters by.
    pub fn query(&self) -> &str {
        &self.query
    }
}
