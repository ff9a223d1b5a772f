//! Remote-backed task list: every operation round-trips to the service first
//! and only then moves the local list forward.
//!
//! # Design
//! - The local list lives in a `watch` channel owned by the session. Readers
//!   take immutable `TaskList` snapshots or subscribe to changes.
//! - Updates are applied against whatever snapshot is current when the
//!   response arrives, so concurrent creations append in arrival order.
//! - A failed operation returns its `ApiError` and leaves the list alone.
//!   Nothing is retried.

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::state::TaskList;
use crate::types::{Task, TaskId, UserStatus};

/// A `TodoClient` bound to a transport and to the local mirror of the
/// user's task list.
pub struct TodoSession<T> {
    client: TodoClient,
    transport: T,
    tasks: watch::Sender<TaskList>,
}

impl<T: Transport> TodoSession<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        let (tasks, _) = watch::channel(TaskList::default());
        Self {
            client,
            transport,
            tasks,
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Current snapshot of the local list.
    pub fn tasks(&self) -> TaskList {
        self.tasks.borrow().clone()
    }

    /// Receiver that is notified each time the local list changes.
    pub fn subscribe(&self) -> watch::Receiver<TaskList> {
        self.tasks.subscribe()
    }

    /// Make sure the user resource exists, creating it when the check says
    /// it does not.
    pub async fn ensure_user(&self) -> Result<UserStatus, ApiError> {
        settle("ensure_user", self.try_ensure_user().await)
    }

    async fn try_ensure_user(&self) -> Result<UserStatus, ApiError> {
        let response = self.send(self.client.build_check_user()).await?;
        if self.client.parse_check_user(&response) {
            info!(user = self.client.username(), "user already exists");
            return Ok(UserStatus::Existing);
        }
        let response = self.send(self.client.build_create_user()).await?;
        self.client.parse_create_user(response)?;
        info!(user = self.client.username(), "created user");
        Ok(UserStatus::Created)
    }

    /// Replace the local list with the server's view.
    pub async fn load_tasks(&self) -> Result<TaskList, ApiError> {
        settle("load_tasks", self.try_load_tasks().await)
    }

    async fn try_load_tasks(&self) -> Result<TaskList, ApiError> {
        let response = self.send(self.client.build_load_tasks()).await?;
        let loaded = TaskList::new(self.client.parse_load_tasks(response)?);
        info!(count = loaded.len(), "loaded tasks");
        self.apply(|_| loaded.clone());
        Ok(loaded)
    }

    /// Startup sequence: ensure the user, then load its tasks. A failed
    /// bootstrap is logged and the load still runs; its result is returned.
    pub async fn mount(&self) -> Result<TaskList, ApiError> {
        let _ = self.ensure_user().await;
        self.load_tasks().await
    }

    /// Create a task remotely and append it locally with the server's id.
    pub async fn create_task(&self, label: &str) -> Result<Task, ApiError> {
        settle("create_task", self.try_create_task(label).await)
    }

    async fn try_create_task(&self, label: &str) -> Result<Task, ApiError> {
        let request = self.client.build_create_task(label)?;
        let id = self.client.parse_create_task(self.send(request).await?)?;
        let task = Task {
            id,
            label: label.to_string(),
            is_done: false,
        };
        info!(id, "created task");
        self.apply(|list| list.appended(task.clone()));
        Ok(task)
    }

    /// Mark a task done remotely, then locally. An id missing from the local
    /// list leaves it unchanged.
    pub async fn complete_task(&self, id: TaskId) -> Result<(), ApiError> {
        settle("complete_task", self.try_complete_task(id).await)
    }

    async fn try_complete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let request = self.client.build_complete_task(id)?;
        self.client.parse_complete_task(self.send(request).await?)?;
        info!(id, "marked task done");
        self.apply(|list| list.with_completed(id));
        Ok(())
    }

    /// Delete a task remotely, then drop it from the local list.
    pub async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        settle("delete_task", self.try_delete_task(id).await)
    }

    async fn try_delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let request = self.client.build_delete_task(id);
        self.client.parse_delete_task(self.send(request).await?)?;
        info!(id, "deleted task");
        self.apply(|list| list.without(id));
        Ok(())
    }

    /// Delete every task of the current snapshot, one request at a time in
    /// list order. The local list is cleared only if all deletions succeed.
    ///
    /// A failure stops the loop. Deletions that already went through are not
    /// undone, so the server may hold fewer tasks than the local list shows
    /// until the next `load_tasks`; `ApiError::ClearAborted` reports how many.
    pub async fn clear_all_tasks(&self) -> Result<(), ApiError> {
        settle("clear_all_tasks", self.try_clear_all_tasks().await)
    }

    async fn try_clear_all_tasks(&self) -> Result<(), ApiError> {
        let snapshot = self.tasks();
        let mut deleted = 0;
        for task in &snapshot {
            let outcome = match self.send(self.client.build_delete_task(task.id)).await {
                Ok(response) => self.client.parse_delete_task(response),
                Err(err) => Err(err),
            };
            if let Err(source) = outcome {
                return Err(ApiError::ClearAborted {
                    deleted,
                    failed_id: task.id,
                    source: Box::new(source),
                });
            }
            deleted += 1;
        }
        info!(deleted, "cleared all tasks");
        self.apply(TaskList::cleared);
        Ok(())
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    /// Swap in the next snapshot computed from the current one. Subscribers
    /// are only woken when the list actually changed.
    fn apply(&self, next: impl FnOnce(&TaskList) -> TaskList) {
        self.tasks.send_if_modified(|current| {
            let updated = next(current);
            if updated == *current {
                return false;
            }
            *current = updated;
            true
        });
    }
}

fn settle<V>(operation: &'static str, result: Result<V, ApiError>) -> Result<V, ApiError> {
    if let Err(err) = &result {
        warn!(operation, error = %err, "operation failed");
    }
    result
}
