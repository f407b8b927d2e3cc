//! To-do list operations.
//!
//! Every mutation loads the whole list, changes it, and saves it back. A
//! rejected operation returns before `save` is called.

use anyhow::Result;

use crate::repository::TaskRepository;
use crate::validation::{parse_selection, require_text};

/// Load all tasks in display order.
pub fn list_tasks(repo: &dyn TaskRepository) -> Result<Vec<String>> {
    repo.load()
}

/// Append a task to the end of the list.
///
/// The text is trimmed; empty text is rejected. Returns the stored text.
pub fn add_task(repo: &dyn TaskRepository, text: &str) -> Result<String> {
    let task = require_text(text, "Task")?;

    let mut tasks = repo.load()?;
    tasks.push(task.clone());
    repo.save(&tasks)?;

    Ok(task)
}

/// Remove the task at a 1-based `selection`.
///
/// Anything other than a number in `1..=len` is rejected as an invalid
/// selection. Returns the removed text.
pub fn remove_task(repo: &dyn TaskRepository, selection: &str) -> Result<String> {
    let mut tasks = repo.load()?;
    let index = parse_selection(selection, tasks.len())?;

    let removed = tasks.remove(index);
    repo.save(&tasks)?;

    Ok(removed)
}
