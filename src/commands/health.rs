//! Health Commands
//!
//! CLI handler reporting config and backend health.

use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::utils::error::AppResult;

/// Health check report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub service: String,
    pub config: bool,
    pub backend: bool,
}

/// Probe config and backend health and build a report.
pub async fn check_health(state: &AppState) -> AppResult<HealthReport> {
    let config = state.is_config_healthy();
    let backend = state.backend_health().await.is_ok();
    let status = if config && backend {
        "healthy"
    } else {
        "degraded"
    };

    Ok(HealthReport {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "taskdeck".to_string(),
        config,
        backend,
    })
}

/// Print the health report.
pub async fn print_health(state: &AppState) -> AppResult<()> {
    let report = check_health(state).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
