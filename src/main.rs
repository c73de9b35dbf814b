// Taskdeck - CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taskdeck::commands;
use taskdeck::{AppState, SettingsUpdate};

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Task collection client over a REST backend")]
struct Cli {
    /// Override the configured backend base URL for this invocation
    #[arg(long)]
    api_url: Option<String>,

    /// Emit machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and show the task collection
    List,
    /// Create a task
    Create {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        command: String,
    },
    /// Filter tasks by a case-insensitive name substring
    Search { query: String },
    /// Delete a task by id
    Remove { id: String },
    /// Run a task's command on the backend and print its output
    Run { id: String },
    /// Show or update the stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Check config and backend health
    Health,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Apply a partial update
    Set {
        #[arg(long)]
        api_url: Option<String>,
        #[arg(long)]
        request_timeout_secs: Option<u64>,
        #[arg(long)]
        debug_mode: Option<bool>,
    },
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "taskdeck=debug"
    } else {
        "taskdeck=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let state = AppState::new();
    state.initialize(cli.api_url.as_deref()).await?;

    let debug = state
        .get_config()
        .await
        .map(|c| c.debug_mode)
        .unwrap_or(false);
    init_tracing(debug);

    match cli.command {
        Command::List => commands::list_tasks(&state, cli.json).await?,
        Command::Create {
            id,
            name,
            owner,
            command,
        } => commands::create_task(&state, id, name, owner, command).await?,
        Command::Search { query } => commands::search_tasks(&state, &query, cli.json).await?,
        Command::Remove { id } => commands::remove_task(&state, &id).await?,
        Command::Run { id } => commands::run_task(&state, &id).await?,
        Command::Config { action } => match action {
            ConfigAction::Show => commands::show_settings(&state).await?,
            ConfigAction::Set {
                api_url,
                request_timeout_secs,
                debug_mode,
            } => {
                commands::update_settings(
                    &state,
                    SettingsUpdate {
                        api_url,
                        request_timeout_secs,
                        debug_mode,
                    },
                )
                .await?
            }
        },
        Command::Health => commands::print_health(&state).await?,
    }

    Ok(())
}
