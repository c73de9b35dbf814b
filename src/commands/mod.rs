//! CLI Commands
//!
//! Thin handlers mapping CLI subcommands onto the application state. These
//! are the entry points invoked from `main`.

pub mod health;
pub mod settings;
pub mod tasks;

pub use health::*;
pub use settings::*;
pub use tasks::*;
