pub mod add;
pub mod clear;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod move_task;
pub mod redo;
pub mod stats;
pub mod toggle;
pub mod undo;
pub mod update;

use anyhow::{bail, Result};
use std::path::Path;
use taskdeck_core::{Task, TaskId};
use taskdeck_store::{JsonStorage, TaskStore};

pub(crate) fn open_store(file: &Path) -> TaskStore {
    TaskStore::open(JsonStorage::new(file))
}

/// Resolve a full id or unique prefix against the live collection.
///
/// Returns `None` when nothing matches (mutations on unknown ids are
/// no-ops, not errors); fails only on an ambiguous prefix.
pub(crate) fn resolve_id(store: &TaskStore, prefix: &str) -> Result<Option<TaskId>> {
    let matches: Vec<&Task> = store
        .tasks()
        .iter()
        .filter(|t| t.id.as_str().starts_with(prefix))
        .collect();
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].id.clone())),
        n => bail!("ambiguous id prefix '{}': matches {} tasks", prefix, n),
    }
}

/// Short display form of a task id. Truncates by characters, not bytes:
/// imported ids are kept verbatim and may contain multi-byte text.
pub(crate) fn short_id(id: &TaskId) -> &str {
    let s = id.as_str();
    s.char_indices().nth(8).map_or(s, |(i, _)| &s[..i])
}
