//! Terminal host for `todo-sync-core`: executes requests with reqwest and
//! renders the list to stdout.

pub mod actions;
pub mod shell;
pub mod transport;

use todo_sync_core::{ApiError, TaskList, TodoSession, Transport};

pub use actions::Action;
pub use transport::ReqwestTransport;

/// `RUST_LOG` fallback for the `todo` binary.
pub const DEFAULT_LOG_FILTER: &str = "todo=info,todo_sync_cli=info,todo_sync_core=info";

/// One-shot mode: mount the session, run a single action, and return the
/// resulting list together with the action's outcome.
pub async fn run_once<T: Transport>(
    session: &TodoSession<T>,
    action: &Action,
) -> (TaskList, Result<(), ApiError>) {
    let outcome = match session.mount().await {
        Ok(_) => actions::apply(session, action).await,
        Err(err) => Err(err),
    };
    (session.tasks(), outcome)
}

/// Process exit status for a one-shot outcome: 0 on success, 2 when the
/// input was rejected before any request, 1 when the remote exchange failed.
pub fn exit_code(outcome: &Result<(), ApiError>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(err) if err.is_remote() => 1,
        Err(_) => 2,
    }
}
