//! Linear undo/redo history over full collection snapshots.
//!
//! The cursor always points at the snapshot matching the live collection, so
//! undoing a single mutation restores the pre-mutation state and undo→redo
//! round-trips exactly. Recording after an undo discards the redo branch.

use crate::task::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct History {
    snapshots: Vec<Vec<Task>>,
    cursor: usize,
}

impl History {
    /// Seed history with the collection as loaded at store construction.
    pub fn new(initial: Vec<Task>) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Record the collection as it stands after a mutation, discarding any
    /// snapshots beyond the cursor first.
    pub fn record(&mut self, snapshot: Vec<Task>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot, returning the collection to restore.
    /// `None` at the start of history.
    pub fn undo(&mut self) -> Option<&[Task]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot, returning the collection to restore.
    /// `None` at the end of history.
    pub fn redo(&mut self) -> Option<&[Task]> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// The snapshot the live collection currently corresponds to.
    pub fn current(&self) -> &[Task] {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots (the seed included).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
