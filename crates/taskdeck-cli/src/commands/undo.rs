use anyhow::Result;
use std::path::Path;

pub fn run(file: &Path) -> Result<()> {
    let mut store = super::open_store(file);
    if store.undo() {
        println!("undid last change ({} tasks)", store.tasks().len());
    } else {
        println!("nothing to undo");
    }
    Ok(())
}
