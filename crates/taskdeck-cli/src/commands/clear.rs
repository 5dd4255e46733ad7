use anyhow::Result;
use std::path::Path;

pub fn run(file: &Path) -> Result<()> {
    let mut store = super::open_store(file);
    let count = store.tasks().len();
    store.clear_all_tasks();
    println!("cleared {} tasks", count);
    Ok(())
}
