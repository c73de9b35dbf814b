//! Application State
//!
//! Global state for the CLI surface, containing all services.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::services::task_store::TaskStore;
use crate::storage::ConfigService;
use crate::utils::error::{AppError, AppResult};
use taskdeck_api::{BackendConfig, RestBackend, TaskBackend};

/// Application state shared by all commands
pub struct AppState {
    /// Configuration service for app settings
    config: Arc<RwLock<Option<ConfigService>>>,
    /// The task store mediating the remote backend
    store: Arc<RwLock<Option<Arc<TaskStore>>>>,
    /// Whether the state has been initialized
    initialized: Arc<RwLock<bool>>,
}

impl AppState {
    /// Create a new uninitialized app state
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            store: Arc::new(RwLock::new(None)),
            initialized: Arc::new(RwLock::new(false)),
        }
    }

    /// Initialize all services against the stored configuration.
    ///
    /// `api_url_override` takes precedence over the configured base URL for
    /// this process only; it is never written back to disk.
    pub async fn initialize(&self, api_url_override: Option<&str>) -> AppResult<()> {
        let mut initialized = self.initialized.write().await;
        if *initialized {
            return Ok(());
        }

        let config_service = ConfigService::new()?;
        let mut app_config = config_service.get_config_clone();
        {
            let mut config_lock = self.config.write().await;
            *config_lock = Some(config_service);
        }

        if let Some(url) = api_url_override {
            app_config.api_url = url.to_string();
        }

        let backend = Arc::new(RestBackend::new(BackendConfig {
            base_url: app_config.api_url.clone(),
            timeout_secs: app_config.request_timeout_secs,
        })?);
        self.install_store(backend).await;

        *initialized = true;
        Ok(())
    }

    /// Initialize with an explicit backend, bypassing config and REST setup.
    pub async fn initialize_with_backend(&self, backend: Arc<dyn TaskBackend>) -> AppResult<()> {
        let mut initialized = self.initialized.write().await;
        if *initialized {
            return Ok(());
        }
        self.install_store(backend).await;
        *initialized = true;
        Ok(())
    }

    async fn install_store(&self, backend: Arc<dyn TaskBackend>) {
        let mut store_lock = self.store.write().await;
        *store_lock = Some(Arc::new(TaskStore::new(backend)));
    }

    /// Get the task store
    pub async fn store(&self) -> AppResult<Arc<TaskStore>> {
        let guard = self.store.read().await;
        match &*guard {
            Some(store) => Ok(store.clone()),
            None => Err(AppError::internal("Task store not initialized")),
        }
    }

    /// Get the current configuration
    pub async fn get_config(&self) -> AppResult<AppConfig> {
        let guard = self.config.read().await;
        match &*guard {
            Some(config) => Ok(config.get_config_clone()),
            None => Err(AppError::config("Config service not initialized")),
        }
    }

    /// Update the configuration
    pub async fn update_config(&self, update: SettingsUpdate) -> AppResult<AppConfig> {
        let mut guard = self.config.write().await;
        match &mut *guard {
            Some(config) => config.update_config(update),
            None => Err(AppError::config("Config service not initialized")),
        }
    }

    /// Check if config is healthy
    pub fn is_config_healthy(&self) -> bool {
        // Use try_read to avoid blocking
        if let Ok(guard) = self.config.try_read() {
            if let Some(ref config) = *guard {
                return config.is_healthy();
            }
        }
        false
    }

    /// Probe the backend through the store
    pub async fn backend_health(&self) -> AppResult<()> {
        self.store().await?.health_check().await
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("initialized", &self.initialized)
            .finish()
    }
}
