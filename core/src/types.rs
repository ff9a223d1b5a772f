//! Domain DTOs for the users/todos API.
//!
//! # Design
//! Field names match the wire format (`label`, `is_done`) so no serde renames
//! are needed. These types are defined independently from the mock-server
//! crate; integration tests catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
pub type TaskId = u64;

/// A single task as held by the remote service and mirrored locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub label: String,
    pub is_done: bool,
}

/// The user resource. Embeds the user's task collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub todos: Vec<Task>,
}

/// Request payload for creating a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub label: String,
    #[serde(default)]
    pub is_done: bool,
}

/// Request payload for updating an existing task. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
}

impl TaskUpdate {
    /// The update that moves a task from pending to done.
    pub fn done() -> Self {
        Self {
            label: None,
            is_done: Some(true),
        }
    }
}

/// The part of a create-task response the client consumes.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedTask {
    pub id: TaskId,
}

/// Outcome of `TodoSession::ensure_user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Existing,
    Created,
}
