//! Taskdeck API
//!
//! Provides the seam between the task store and the remote REST backend:
//! the `TaskBackend` trait, the transport error model, the reqwest
//! implementation, and an in-memory mock for tests.

pub mod backend;
pub mod http_client;
pub mod mock;
pub mod rest;
pub mod types;

// Re-export main types
pub use backend::{parse_http_error, TaskBackend};
pub use http_client::build_http_client;
pub use mock::MockBackend;
pub use rest::RestBackend;
pub use types::{ApiError, ApiResult, BackendConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
