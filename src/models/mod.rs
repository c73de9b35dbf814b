//! Data Models
//!
//! Serializable data structures shared by the store, commands, and config.

pub mod settings;
pub mod task;
