//! The task store: the canonical collection, its mutation operations, and
//! the undo/redo history.
//!
//! Every operation that changes the live collection records a snapshot and
//! fires a save through the injected storage; pure no-ops (unknown id,
//! equal reorder indices) touch neither history nor disk. Persistence is
//! fire-and-forget, so a failed save is logged by the adapter and never
//! blocks a mutation.

use crate::storage::JsonStorage;
use taskdeck_core::{History, Task, TaskDraft, TaskId, TaskPatch};

pub struct TaskStore {
    tasks: Vec<Task>,
    history: History,
    storage: JsonStorage,
}

impl TaskStore {
    /// Load the collection (and any persisted history) from storage.
    ///
    /// A history sidecar is only adopted when its current snapshot matches
    /// the loaded collection; otherwise the collection was changed out of
    /// band and history is reseeded.
    pub fn open(storage: JsonStorage) -> Self {
        let tasks = storage.load();
        let history = match storage.load_history() {
            Some(history) if history.current() == tasks => history,
            _ => History::new(tasks.clone()),
        };
        Self {
            tasks,
            history,
            storage,
        }
    }

    /// The live collection, in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Append a new task built from `draft`. Returns its id.
    pub fn add_task(&mut self, draft: TaskDraft) -> TaskId {
        let task = Task::new(draft);
        let id = task.id.clone();
        self.tasks.push(task);
        self.commit();
        id
    }

    /// Replace the given fields of the task with `id` and refresh its
    /// `updated_at`. Unknown id is a pure no-op; returns whether a task
    /// was updated.
    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.apply(patch);
        self.commit();
        true
    }

    /// Remove the task with `id`. Unknown id is a pure no-op (no history
    /// entry, no save); returns whether a task was removed.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| &t.id == id) else {
            return false;
        };
        self.tasks.remove(pos);
        self.commit();
        true
    }

    /// Flip completion of the task with `id`. Unknown id is a pure no-op;
    /// returns whether a task was toggled.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.toggle();
        self.commit();
        true
    }

    /// Move the task at `source` so it ends up at `destination`, shifting
    /// the tasks in between. Equal indices are a no-op. Indices must be in
    /// bounds; the drag-and-drop caller guarantees that.
    pub fn reorder_tasks(&mut self, source: usize, destination: usize) {
        debug_assert!(source < self.tasks.len() && destination < self.tasks.len());
        if source == destination {
            return;
        }
        let task = self.tasks.remove(source);
        self.tasks.insert(destination, task);
        self.commit();
    }

    /// Replace the whole collection. Used for both replace- and merge-mode
    /// import; merge-mode callers pre-concatenate via
    /// [`crate::transfer::merge_imported`].
    pub fn import_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.commit();
    }

    /// Empty the collection.
    pub fn clear_all_tasks(&mut self) {
        self.tasks.clear();
        self.commit();
    }

    /// Restore the previous snapshot. Returns false at the start of
    /// history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.tasks = snapshot.to_vec();
        self.persist();
        true
    }

    /// Restore the next snapshot. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.tasks = snapshot.to_vec();
        self.persist();
        true
    }

    // Record the post-mutation state and persist it. Recording truncates
    // any redo branch first.
    fn commit(&mut self) {
        self.history.record(self.tasks.clone());
        self.persist();
    }

    fn persist(&self) {
        self.storage.save(&self.tasks);
        self.storage.save_history(&self.history);
    }
}
