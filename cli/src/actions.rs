//! User intents and how each maps onto a session operation.

use todo_sync_core::{ApiError, TaskId, TodoSession, Transport};

/// One thing the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the list as loaded.
    List,
    Add(String),
    Done(TaskId),
    Remove(TaskId),
    Clear,
    /// Re-fetch the list from the server.
    Reload,
}

/// Run `action` against the session. The local list moves only on success.
pub async fn apply<T: Transport>(session: &TodoSession<T>, action: &Action) -> Result<(), ApiError> {
    match action {
        Action::List => Ok(()),
        Action::Add(label) => session.create_task(label).await.map(drop),
        Action::Done(id) => session.complete_task(*id).await,
        Action::Remove(id) => session.delete_task(*id).await,
        Action::Clear => session.clear_all_tasks().await,
        Action::Reload => session.load_tasks().await.map(drop),
    }
}
