//! The filter engine: computes the visible subset of a collection.

use crate::error::CoreError;
use crate::task::{Priority, Task};
use std::fmt;
use std::str::FromStr;

/// Completion-status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(s)
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::InvalidStatusFilter(other.to_string())),
        }
    }
}

/// Transient view criteria. Defaults match every task.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    /// Case-insensitive substring over title and description. Empty matches.
    pub search: String,
    /// Case-insensitive category equality. Empty matches.
    pub category: String,
    /// Exact priority. `None` matches.
    pub priority: Option<Priority>,
}

impl FilterCriteria {
    fn matches(&self, task: &Task) -> bool {
        if !self.status.matches(task) {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = task.title.to_lowercase().contains(&needle);
            let in_description = task.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }
        if !self.category.is_empty()
            && task.category.to_lowercase() != self.category.to_lowercase()
        {
            return false;
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        true
    }
}

/// Select the tasks matching `criteria`, preserving collection order.
///
/// Pure: no mutation, no side effects, safe to call repeatedly.
pub fn visible_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|t| criteria.matches(t)).collect()
}
