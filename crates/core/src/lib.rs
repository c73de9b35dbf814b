//! Taskdeck Core
//!
//! Foundational types for the Taskdeck workspace: the task model, field
//! validation, the lazy search view, and core error types. This crate has
//! zero dependencies on application-level code (HTTP client, store, CLI).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `task` - The `Task` record and its validation
//! - `search` - Lazy, restartable filtering over task snapshots (`SearchView`)

pub mod error;
pub mod search;
pub mod task;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Task Model ─────────────────────────────────────────────────────────
pub use task::Task;

// ── Search View ────────────────────────────────────────────────────────
pub use search::SearchView;
