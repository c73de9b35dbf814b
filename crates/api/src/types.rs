//! Backend Types
//!
//! Transport error model and backend configuration shared by every
//! `TaskBackend` implementation.

use serde::{Deserialize, Serialize};

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a task backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL of the REST backend
    pub base_url: String,
    /// Bounded wait for any single request, in seconds
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    /// Create a config for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Error types for backend operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, reset)
    Network { message: String },
    /// The bounded request wait elapsed
    Timeout { message: String },
    /// The response body could not be decoded
    Decode { message: String },
    /// The backend answered with a non-success status
    Server { status: u16, message: String },
    /// The configured base URL is not a valid URL
    InvalidUrl { message: String },
}

impl ApiError {
    /// Whether the backend reported the target resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }

    /// Any diagnostic body the backend returned alongside a rejection.
    pub fn partial_body(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network { message } => {
                write!(f, "Network error: {}", message)
            }
            ApiError::Timeout { message } => {
                write!(f, "Timed out: {}", message)
            }
            ApiError::Decode { message } => {
                write!(f, "Malformed response: {}", message)
            }
            ApiError::Server { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
            ApiError::InvalidUrl { message } => {
                write!(f, "Invalid base URL: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;
