use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::path::Path;
use taskdeck_core::{Priority, TaskDraft};

pub fn run(
    file: &Path,
    title: String,
    description: String,
    priority: Option<Priority>,
    category: String,
    due: Option<NaiveDate>,
) -> Result<()> {
    // The store trusts its callers on this, so validate here.
    if title.trim().is_empty() {
        bail!("title must not be empty");
    }

    let mut store = super::open_store(file);
    let id = store.add_task(TaskDraft {
        title,
        description,
        priority,
        category,
        due_date: due,
    });
    println!("added {}", super::short_id(&id));
    Ok(())
}
