//! Taskdeck - Rust Backend Library
//!
//! Client-side task management over a remote REST backend. It includes:
//! - The task store (optimistic mutations, rollback, per-id serialization)
//! - CLI command handlers
//! - Storage layer for configuration
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::settings::{AppConfig, SettingsUpdate};
pub use models::task::{SyncState, TaskEntry, TaskSnapshot};
pub use services::task_store::TaskStore;
pub use state::AppState;
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
