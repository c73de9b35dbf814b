//! Task Commands
//!
//! CLI handlers for the task collection: list, create, search, remove, run.
//! Each handler refreshes the local view first so reconciliation runs against
//! current remote state, then renders the outcome.

use crate::models::task::{SyncState, TaskEntry};
use crate::state::AppState;
use crate::utils::error::AppResult;
use taskdeck_core::Task;

/// Fetch the collection and print it.
pub async fn list_tasks(state: &AppState, json: bool) -> AppResult<()> {
    let store = state.store().await?;
    store.refresh().await?;

    let snapshot = store.snapshot().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if snapshot.is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    println!("{}", header_row());
    for entry in &snapshot.entries {
        println!("{}", format_entry_row(entry));
    }
    Ok(())
}

/// Create a task from CLI arguments.
pub async fn create_task(
    state: &AppState,
    id: String,
    name: String,
    owner: String,
    command: String,
) -> AppResult<()> {
    let store = state.store().await?;
    store.refresh().await?;

    let task = Task::new(id, name, owner, command);
    store.create(task.clone()).await?;
    println!("Task {} created.", task.id);
    Ok(())
}

/// Filter the collection by a name substring and print the matches.
pub async fn search_tasks(state: &AppState, query: &str, json: bool) -> AppResult<()> {
    let store = state.store().await?;
    store.refresh().await?;

    let view = store.search(query).await;
    let matches = view.matches();
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No tasks matching \"{}\".", query);
        return Ok(());
    }
    println!("{}", header_row());
    for task in &matches {
        println!("{}", format_task_row(task));
    }
    Ok(())
}

/// Delete a task by id.
pub async fn remove_task(state: &AppState, id: &str) -> AppResult<()> {
    let store = state.store().await?;
    store.refresh().await?;

    store.remove(id).await?;
    println!("Task {} deleted.", id);
    Ok(())
}

/// Run a task's command remotely and print its output.
pub async fn run_task(state: &AppState, id: &str) -> AppResult<()> {
    let store = state.store().await?;
    store.refresh().await?;

    let output = store.execute(id).await?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn header_row() -> String {
    format!(
        "{:<12} {:<20} {:<12} {:<24} {}",
        "ID", "NAME", "OWNER", "COMMAND", "STATE"
    )
}

fn format_task_row(task: &Task) -> String {
    format!(
        "{:<12} {:<20} {:<12} {:<24} {}",
        task.id, task.name, task.owner, task.command, "confirmed"
    )
}

fn format_entry_row(entry: &TaskEntry) -> String {
    let state = match entry.state {
        SyncState::Pending => "pending",
        SyncState::Confirmed => "confirmed",
        SyncState::RollingBack => "rolling back",
    };
    format!(
        "{:<12} {:<20} {:<12} {:<24} {}",
        entry.task.id, entry.task.name, entry.task.owner, entry.task.command, state
    )
}
