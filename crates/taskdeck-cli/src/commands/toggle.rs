use anyhow::Result;
use std::path::Path;

pub fn run(file: &Path, id: String) -> Result<()> {
    let mut store = super::open_store(file);
    let Some(task_id) = super::resolve_id(&store, &id)? else {
        println!("no task matches '{}'", id);
        return Ok(());
    };

    store.toggle_task(&task_id);
    let state = match store.task(&task_id) {
        Some(task) if task.completed => "completed",
        _ => "active",
    };
    println!("{} is now {}", super::short_id(&task_id), state);
    Ok(())
}
