//! Task persistence - JSON file storage
//!
//! Whole-collection reads and writes: every command loads the full task
//! list, mutates it in memory, and rewrites the file. Last writer wins if
//! two processes race on the same file.

pub mod error;

pub use error::{Result, StoreError};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::task::Task;

/// On-disk document: a single top-level `tasks` key holding the ordered
/// array of task records.
#[derive(Serialize, Deserialize)]
struct TaskFile {
    tasks: Vec<Task>,
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection. A missing backing file is bootstrapped to
    /// an empty document rather than treated as an error; anything that
    /// exists but does not decode as the expected shape is a format error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "task file missing, creating empty document");
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: TaskFile =
            serde_json::from_str(&content).map_err(|e| StoreError::Format(e.to_string()))?;
        debug!(path = %self.path.display(), count = file.tasks.len(), "loaded tasks");
        Ok(file.tasks)
    }

    /// Overwrite the backing file with the full collection, pretty-printed.
    /// The write is not atomic: a crash mid-write can leave a truncated
    /// file behind.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = TaskFile {
            tasks: tasks.to_vec(),
        };
        let content =
            serde_json::to_string_pretty(&file).map_err(|e| StoreError::Format(e.to_string()))?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
