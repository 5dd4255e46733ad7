use anyhow::Result;
use std::path::Path;

pub fn run(file: &Path, id: String) -> Result<()> {
    let mut store = super::open_store(file);
    let Some(task_id) = super::resolve_id(&store, &id)? else {
        println!("no task matches '{}'", id);
        return Ok(());
    };

    store.delete_task(&task_id);
    println!("deleted {}", super::short_id(&task_id));
    Ok(())
}
