//! Import/export of task collections as interchange JSON files.

use crate::error::StoreError;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use taskdeck_core::{Task, TaskId};

/// Write a pretty-printed export file into `dir`, named
/// `tasks_export_<YYYY-MM-DD>.json`. Returns the path written.
pub fn export_to_file(tasks: &[Task], dir: &Path) -> Result<PathBuf, StoreError> {
    let name = format!("tasks_export_{}.json", Utc::now().format("%Y-%m-%d"));
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(tasks)?;
    fs::create_dir_all(dir)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Parse a user-supplied export file.
///
/// The document must be a JSON array of task-shaped records; anything else
/// fails with `StoreError::InvalidJson` and leaves the store untouched.
/// Entries are validated through typed deserialization, so malformed records
/// are rejected at the boundary rather than admitted into the collection.
pub fn import_from_file(path: &Path) -> Result<Vec<Task>, StoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|_| StoreError::InvalidJson)
}

/// Merge-mode import: imported tasks get fresh ids and creation timestamps
/// to avoid colliding with existing ones, then are appended after the
/// current collection.
pub fn merge_imported(existing: &[Task], imported: Vec<Task>) -> Vec<Task> {
    let now = Utc::now();
    let mut merged = existing.to_vec();
    merged.extend(imported.into_iter().map(|mut task| {
        task.id = TaskId::generate();
        task.created_at = now;
        task.updated_at = now;
        task
    }));
    merged
}
