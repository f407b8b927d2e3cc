use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A trait for loading and saving the task list.
///
/// The list is always read and written whole; there are no partial updates.
pub trait TaskRepository {
    /// Load every task in display order. A store that was never written is empty.
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored list with `tasks`.
    fn save(&self, tasks: &[String]) -> Result<()>;
}

/// JSON-file implementation of TaskRepository.
///
/// The file holds a pretty-printed JSON array of strings.
pub struct FileTaskRepository {
    path: PathBuf,
}

impl FileTaskRepository {
    /// Create a new FileTaskRepository backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            log::debug!("no task file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read tasks from {}", self.path.display()))?;

        let tasks: Vec<String> = serde_json::from_str(&content).with_context(|| {
            format!(
                "Task file {} is not a JSON list of strings",
                self.path.display()
            )
        })?;

        log::debug!("loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    fn save(&self, tasks: &[String]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;

        // Temp file in the same directory, renamed over the target.
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write tasks to {}", self.path.display()))?;

        log::debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tasks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(temp.path().join("tasks.json"));
        assert!(repo.load().unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_roundtrip() {
        let temp = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(temp.path().join("tasks.json"));

        repo.save(&tasks(&["a", "b", "c"])).unwrap();

        let reloaded = FileTaskRepository::new(temp.path().join("tasks.json"));
        assert_eq!(reloaded.load().unwrap(), tasks(&["a", "b", "c"]));
    }

    #[test]
    fn test_file_format_is_json_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        let repo = FileTaskRepository::new(path.clone());

        repo.save(&tasks(&["write \"docs\""])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n  \"write \\\"docs\\\"\"\n]\n");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/tasks.json");
        let repo = FileTaskRepository::new(path.clone());

        repo.save(&tasks(&["x"])).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_whole_list() {
        let temp = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(temp.path().join("tasks.json"));

        repo.save(&tasks(&["a", "b", "c"])).unwrap();
        repo.save(&tasks(&["z"])).unwrap();
        assert_eq!(repo.load().unwrap(), tasks(&["z"]));

        repo.save(&[]).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{\"not\": \"a list\"}").unwrap();

        let err = FileTaskRepository::new(path).load().unwrap_err();
        assert!(err.to_string().contains("is not a JSON list of strings"));
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let repo = FileTaskRepository::new(temp.path().join("tasks.json"));
        repo.save(&tasks(&["a"])).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
