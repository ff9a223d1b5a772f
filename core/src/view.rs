//! Plain-text rendition of the task list.

use std::fmt::Write;

use crate::state::TaskList;

pub const TITLE: &str = "To do";

/// Prompt shown in the input line, depending on whether there is anything
/// to show.
pub fn placeholder(tasks: &TaskList) -> &'static str {
    if tasks.is_empty() {
        "No tasks, add tasks"
    } else {
        "What needs to be done?"
    }
}

/// Render title, input prompt, one row per task and the count footer.
pub fn render(tasks: &TaskList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "> {}", placeholder(tasks));
    for task in tasks {
        let mark = if task.is_done { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] {:>4}  {}", task.id, task.label);
    }
    let _ = writeln!(out, "{}", tasks.footer());
    out
}
