//! `todo`: terminal client for a remote-backed to-do list.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use todo_sync_cli::{exit_code, run_once, shell, Action, ReqwestTransport, DEFAULT_LOG_FILTER};
use todo_sync_core::config::{DEFAULT_BASE_URL, DEFAULT_USERNAME};
use todo_sync_core::{view, ClientConfig, TaskId, TodoClient, TodoSession};
use tracing_subscriber::EnvFilter;

/// Keep a to-do list in sync with a remote todo service.
#[derive(Parser)]
#[command(name = "todo", version, about)]
struct Cli {
    /// Base URL of the todo service.
    #[arg(long, env = "TODO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// User whose list is managed.
    #[arg(long, env = "TODO_USER", default_value = DEFAULT_USERNAME)]
    user: String,

    /// Subcommand to run. Defaults to the interactive shell.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current list.
    List,
    /// Add a task.
    Add { label: String },
    /// Mark a task done.
    Done { id: TaskId },
    /// Delete a task.
    Rm { id: TaskId },
    /// Delete every task.
    Clear,
    /// Interactive mode.
    Shell,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout carries only the rendered list.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig {
        base_url: cli.base_url,
        username: cli.user,
    };
    config.validate()?;

    let session = TodoSession::new(TodoClient::from_config(&config), ReqwestTransport::new()?);

    let action = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            println!("{}", shell::HELP);
            shell::run(Arc::new(session)).await?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::List => Action::List,
        Command::Add { label } => Action::Add(label),
        Command::Done { id } => Action::Done(id),
        Command::Rm { id } => Action::Remove(id),
        Command::Clear => Action::Clear,
    };

    let (tasks, outcome) = run_once(&session, &action).await;
    print!("{}", view::render(&tasks));
    if let Err(err) = &outcome {
        eprintln!("error: {err}");
    }
    Ok(ExitCode::from(exit_code(&outcome)))
}
