//! The statistics engine: aggregate counts over a collection.

use crate::task::{Priority, Task};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-priority counts. All three enumerants are always present.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregate counts for a collection at one point in time.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Active tasks whose due date is strictly before "now".
    pub overdue: usize,
    pub by_priority: PriorityCounts,
    /// Counts per category present in the collection. Categories with no
    /// tasks are omitted, never zero-filled.
    pub by_category: BTreeMap<String, usize>,
}

/// Compute stats sampling "now" once at call time.
pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    compute_stats_at(tasks, Utc::now())
}

/// Deterministic variant taking an explicit "now".
pub fn compute_stats_at(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let today = now.date_naive();
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };

    for task in tasks {
        if task.completed {
            stats.completed += 1;
        } else {
            stats.active += 1;
            if task.due_date.is_some_and(|due| due < today) {
                stats.overdue += 1;
            }
        }

        match task.priority {
            Priority::High => stats.by_priority.high += 1,
            Priority::Medium => stats.by_priority.medium += 1,
            Priority::Low => stats.by_priority.low += 1,
        }

        if !task.category.is_empty() {
            *stats.by_category.entry(task.category.clone()).or_insert(0) += 1;
        }
    }

    stats
}
