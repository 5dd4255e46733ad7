use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;
use taskdeck_core::{Priority, TaskPatch};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: &Path,
    id: String,
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    category: Option<String>,
    due: Option<NaiveDate>,
    clear_due: bool,
) -> Result<()> {
    let mut store = super::open_store(file);
    let Some(task_id) = super::resolve_id(&store, &id)? else {
        println!("no task matches '{}'", id);
        return Ok(());
    };

    let due_date = if clear_due {
        Some(None)
    } else {
        due.map(Some)
    };

    store.update_task(
        &task_id,
        TaskPatch {
            title,
            description,
            priority,
            category,
            completed: None,
            due_date,
        },
    );
    println!("updated {}", super::short_id(&task_id));
    Ok(())
}
