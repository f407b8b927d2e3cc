//! Storage backends for the task list.

pub mod in_memory;
pub mod task_repository;

pub use in_memory::InMemoryTaskRepository;
pub use task_repository::{FileTaskRepository, TaskRepository};
