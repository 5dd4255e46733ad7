//! Durable storage for the task collection.
//!
//! One file holds the whole collection as a UTF-8 JSON array of task
//! records; a sidecar file next to it carries the undo history between
//! sessions. Read and write failures are logged and swallowed, never
//! surfaced: a missing or unparseable file degrades to an empty collection,
//! and a failed save loses at most the latest mutation.

use crate::error::StoreError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use taskdeck_core::{History, Task};

/// JSON-file persistence adapter.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn history_path(&self) -> PathBuf {
        self.path.with_extension("history.json")
    }

    /// Read the stored collection. Absent or unparseable data yields an
    /// empty collection; the parse failure is logged only.
    pub fn load(&self) -> Vec<Task> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read task file");
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "stored tasks are corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection. Fire-and-forget: failures are
    /// logged and otherwise ignored.
    pub fn save(&self, tasks: &[Task]) {
        if let Err(e) = self.write_json(&self.path, tasks) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to save tasks");
        }
    }

    /// Read the persisted undo history, if any. Corruption degrades to
    /// `None` the same way `load` degrades to empty.
    pub fn load_history(&self) -> Option<History> {
        let path = self.history_path();
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read history file");
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(history) => Some(history),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "stored history is corrupt, discarding");
                None
            }
        }
    }

    /// Overwrite the persisted undo history. Fire-and-forget.
    pub fn save_history(&self, history: &History) {
        let path = self.history_path();
        if let Err(e) = self.write_json(&path, history) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    // Atomic write: temp file in the same directory + rename.
    fn write_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent)?;
        }
        let dir = parent.unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}
