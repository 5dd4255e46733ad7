//! Core data model and derived views for taskdeck.
//!
//! This crate is pure: the task record, the undo history, and the filter and
//! statistics engines. Persistence and mutation live in `taskdeck-store`.

pub mod error;
pub mod filter;
pub mod history;
pub mod stats;
pub mod task;

pub use error::CoreError;
pub use filter::{visible_tasks, FilterCriteria, StatusFilter};
pub use history::History;
pub use stats::{compute_stats, compute_stats_at, PriorityCounts, TaskStats};
pub use task::{Priority, Task, TaskDraft, TaskId, TaskPatch};
