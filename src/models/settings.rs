//! Settings Models
//!
//! Application configuration and settings data structures.

use serde::{Deserialize, Serialize};

use taskdeck_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the task backend
    pub api_url: String,
    /// Bounded wait for any single backend request, in seconds
    pub request_timeout_secs: u64,
    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug_mode: false,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub debug_mode: Option<bool>,
}

impl SettingsUpdate {
    /// Whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.api_url.is_none() && self.request_timeout_secs.is_none() && self.debug_mode.is_none()
    }
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(api_url) = update.api_url {
            self.api_url = api_url;
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(debug) = update.debug_mode {
            self.debug_mode = debug;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = url::Url::parse(&self.api_url) {
            return Err(format!("Invalid api_url {}: {}", self.api_url, e));
        }

        if self.request_timeout_secs < 1 {
            return Err("request_timeout_secs must be at least 1 second".to_string());
        }
        if self.request_timeout_secs > 600 {
            return Err("request_timeout_secs cannot exceed 600 seconds".to_string());
        }

        Ok(())
    }
}
