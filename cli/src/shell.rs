//! Interactive mode.
//!
//! Every line typed is a new task unless it starts with `:`. Operations run
//! as independent tasks, so a slow request never blocks the prompt, and the
//! list is re-rendered whenever its snapshot changes. Remote failures are
//! only logged; the view simply keeps showing the previous state.
//!
//! On `:quit` or end of input the shell waits for every operation still in
//! flight, then renders the final list once more if it changed.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};
use todo_sync_core::{view, ApiError, TaskId, TaskList, TodoSession, Transport};
use tracing::{debug, warn};

use crate::actions::{self, Action};

pub const HELP: &str = "\
type a label and press enter to add a task
:done ID   mark a task done
:rm ID     delete a task
:clear     delete every task
:reload    fetch the list again
:quit      leave";

/// What a line of input means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Action(Action),
    Help,
    Quit,
    /// Blank line; nothing to do.
    Empty,
    Invalid(String),
}

pub fn parse_line(line: &str) -> ShellInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellInput::Empty;
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return ShellInput::Action(Action::Add(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    match (name, arg) {
        ("done", Some(id)) => parse_id(id).map_or_else(ShellInput::Invalid, |id| {
            ShellInput::Action(Action::Done(id))
        }),
        ("rm", Some(id)) => parse_id(id).map_or_else(ShellInput::Invalid, |id| {
            ShellInput::Action(Action::Remove(id))
        }),
        ("done" | "rm", None) => ShellInput::Invalid(format!(":{name} needs a task id")),
        ("clear", None) => ShellInput::Action(Action::Clear),
        ("reload", None) => ShellInput::Action(Action::Reload),
        ("help", None) => ShellInput::Help,
        ("quit" | "q", None) => ShellInput::Quit,
        _ => ShellInput::Invalid(format!("unknown command :{command}")),
    }
}

fn parse_id(raw: &str) -> Result<TaskId, String> {
    raw.parse().map_err(|_| format!("not a task id: {raw}"))
}

/// Mount the session, then read commands from stdin until `:quit` or EOF.
pub async fn run<T>(session: Arc<TodoSession<T>>) -> anyhow::Result<()>
where
    T: Transport + Send + Sync + 'static,
{
    run_with(session, BufReader::new(tokio::io::stdin()), std::io::stdout()).await
}

/// The shell loop over arbitrary input and output.
pub async fn run_with<T, R, W>(
    session: Arc<TodoSession<T>>,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    T: Transport + Send + Sync + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mounted = session.mount().await.unwrap_or_else(|_| session.tasks());
    render(&mut output, &mounted)?;

    let mut updates = session.subscribe();
    let mut pending = JoinSet::new();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    ShellInput::Action(action) => {
                        let session = Arc::clone(&session);
                        pending.spawn(async move { actions::apply(&session, &action).await });
                    }
                    ShellInput::Help => writeln!(output, "{HELP}")?,
                    ShellInput::Quit => break,
                    ShellInput::Empty => {}
                    ShellInput::Invalid(message) => {
                        warn!(%message, "ignored input");
                        writeln!(output, "{message}")?;
                    }
                }
            }
            Ok(()) = updates.changed() => {
                let snapshot = updates.borrow_and_update().clone();
                render(&mut output, &snapshot)?;
            }
            Some(joined) = pending.join_next() => report(&mut output, joined)?,
        }
    }

    debug!(in_flight = pending.len(), "waiting for pending operations");
    while let Some(joined) = pending.join_next().await {
        report(&mut output, joined)?;
    }
    if updates.has_changed().unwrap_or(false) {
        let snapshot = updates.borrow_and_update().clone();
        render(&mut output, &snapshot)?;
    }
    output.flush()?;
    Ok(())
}

fn render<W: Write>(output: &mut W, tasks: &TaskList) -> std::io::Result<()> {
    write!(output, "{}", view::render(tasks))?;
    output.flush()
}

/// Input the session rejected is shown to the user. Remote failures were
/// already logged by the session and stay out of the view.
fn report<W: Write>(
    output: &mut W,
    joined: Result<Result<(), ApiError>, JoinError>,
) -> std::io::Result<()> {
    match joined {
        Ok(Err(err)) if !err.is_remote() => writeln!(output, "{err}"),
        Ok(_) => Ok(()),
        Err(err) => {
            warn!(error = %err, "operation task did not finish");
            Ok(())
        }
    }
}
