//! Flat-file task persistence
//!
//! The whole list is rewritten on every save, so after any successful
//! mutation the file is a complete snapshot of the in-memory state.

use std::fs;
use std::path::{Path, PathBuf};

use taskpad_domain::{Task, TaskList};
use tracing::debug;

use crate::error::{IoOperation, StorageError, StorageResult};

/// Directory under the home directory holding all Taskpad data
pub const DATA_DIR_NAME: &str = ".taskpad";

/// File name of the persisted task list
pub const TASK_FILE_NAME: &str = "tasks.txt";

/// Store for the persisted task list
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        TaskStore { path }
    }

    /// Create a store backed by the default file (`~/.taskpad/tasks.txt`)
    pub fn with_default_path() -> StorageResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            StorageError::path_resolution_error("could not determine the home directory")
        })?;
        Ok(TaskStore::new(home.join(DATA_DIR_NAME).join(TASK_FILE_NAME)))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted task list.
    ///
    /// A missing file yields an empty list. Any line that fails to parse
    /// aborts the load with the line number and offending text; a partially
    /// loaded list is never returned.
    pub fn load(&self) -> StorageResult<TaskList> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "task file does not exist yet, starting empty");
            return Ok(TaskList::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::io_error(self.path.clone(), IoOperation::Read, e))?;

        let mut tasks = TaskList::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = Task::from_storage_line(line).map_err(|e| {
                StorageError::malformed_line(self.path.clone(), index + 1, line, e)
            })?;
            tasks.add(task).map_err(|e| {
                StorageError::malformed_line(self.path.clone(), index + 1, line, e)
            })?;
        }

        debug!(path = %self.path.display(), count = tasks.len(), "loaded task file");
        Ok(tasks)
    }

    /// Rewrite the file from the in-memory list.
    pub fn save(&self, tasks: &TaskList) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::directory_creation_failed(parent.to_path_buf(), e)
                })?;
            }
        }

        let mut contents = tasks
            .iter()
            .map(Task::storage_string)
            .collect::<Vec<_>>()
            .join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }

        fs::write(&self.path, contents)
            .map_err(|e| StorageError::io_error(self.path.clone(), IoOperation::Write, e))?;

        debug!(path = %self.path.display(), count = tasks.len(), "saved task file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TaskStore {
        TaskStore::new(dir.path().join(TASK_FILE_NAME))
    }

    #[test]
    fn test_load_missing_file_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let tasks = store.load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut tasks = TaskList::new();
        tasks.add(Task::todo("buy milk").unwrap()).unwrap();
        tasks
            .add(Task::deadline("submit report /by 02/12/2019 1800").unwrap())
            .unwrap();
        tasks.mark_task_as_done(1).unwrap();
        store.save(&tasks).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.get(1).unwrap().is_done());
        assert!(!reloaded.get(2).unwrap().is_done());
    }

    #[test]
    fn test_save_writes_one_line_per_task() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut tasks = TaskList::new();
        tasks.add(Task::todo("buy milk").unwrap()).unwrap();
        tasks.add(Task::todo("water plants").unwrap()).unwrap();
        store.save(&tasks).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "[T][ ] buy milk\n[T][ ] water plants\n");
    }

    #[test]
    fn test_save_empty_list_truncates_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut tasks = TaskList::new();
        tasks.add(Task::todo("buy milk").unwrap()).unwrap();
        store.save(&tasks).unwrap();
        store.save(&TaskList::new()).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("nested").join("deep").join(TASK_FILE_NAME));
        store.save(&TaskList::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_aborts_on_malformed_line() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "[T][ ] buy milk\nnot a task line\n[T][ ] water plants\n",
        )
        .unwrap();

        let err = store.load().unwrap_err();
        match err {
            StorageError::MalformedLine {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "not a task line");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_duplicate_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "[T][ ] buy milk\n[T][X] buy milk\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            StorageError::MalformedLine { line_number: 2, .. }
        ));
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "[T][ ] buy milk\n\n[T][ ] water plants\n").unwrap();

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 2);
    }
}
