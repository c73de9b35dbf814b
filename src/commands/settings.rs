//! Settings Commands
//!
//! CLI handlers for showing and updating the stored configuration.

use crate::models::settings::SettingsUpdate;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Print the current configuration as pretty JSON.
pub async fn show_settings(state: &AppState) -> AppResult<()> {
    let config = state.get_config().await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Apply a partial update and print the resulting configuration.
pub async fn update_settings(state: &AppState, update: SettingsUpdate) -> AppResult<()> {
    if update.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }
    let config = state.update_config(update).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
