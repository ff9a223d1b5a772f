//! Immutable task-list snapshots.
//!
//! # Design
//! A `TaskList` never changes after construction. Each transition returns a
//! new list, and clones share the same backing storage, so a reader holding a
//! snapshot never observes a half-applied update from a concurrent operation.

use std::sync::Arc;

use crate::types::{Task, TaskId};

/// Ordered snapshot of the local task list. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Arc<Vec<Task>>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(tasks),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// New list with `task` at the end.
    pub fn appended(&self, task: Task) -> Self {
        let mut tasks = self.tasks.to_vec();
        tasks.push(task);
        Self::new(tasks)
    }

    /// New list where the task with `id` is done. Unknown ids yield an
    /// identical list.
    pub fn with_completed(&self, id: TaskId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        Self::new(
            self.tasks
                .iter()
                .map(|task| {
                    if task.id == id {
                        Task {
                            is_done: true,
                            ..task.clone()
                        }
                    } else {
                        task.clone()
                    }
                })
                .collect(),
        )
    }

    /// New list without the first task carrying `id`.
    pub fn without(&self, id: TaskId) -> Self {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                let mut tasks = self.tasks.to_vec();
                tasks.remove(index);
                Self::new(tasks)
            }
            None => self.clone(),
        }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Footer text shown under the list.
    pub fn footer(&self) -> String {
        format!("{} tasks", self.len())
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
