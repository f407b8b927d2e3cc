use std::cell::RefCell;

use anyhow::Result;

use super::task_repository::TaskRepository;

/// In-memory implementation of TaskRepository for testing.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RefCell<Vec<String>>,
    saves: RefCell<usize>,
}

impl InMemoryTaskRepository {
    /// Create a new empty InMemoryTaskRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new InMemoryTaskRepository with pre-populated tasks.
    pub fn with_tasks(tasks: &[&str]) -> Self {
        Self {
            tasks: RefCell::new(tasks.iter().map(|t| t.to_string()).collect()),
            saves: RefCell::new(0),
        }
    }

    /// Current contents.
    pub fn snapshot(&self) -> Vec<String> {
        self.tasks.borrow().clone()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn load(&self) -> Result<Vec<String>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[String]) -> Result<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
