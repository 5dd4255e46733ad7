use anyhow::{Context, Result};
use std::path::Path;
use taskdeck_store::transfer;

pub fn run(file: &Path, dir: &Path) -> Result<()> {
    let store = super::open_store(file);
    let path = transfer::export_to_file(store.tasks(), dir)
        .with_context(|| format!("failed to export into {}", dir.display()))?;
    println!("exported {} tasks to {}", store.tasks().len(), path.display());
    Ok(())
}
