use anyhow::{bail, Result};
use std::path::Path;

pub fn run(file: &Path, source: usize, destination: usize) -> Result<()> {
    let mut store = super::open_store(file);

    // The store treats out-of-bounds indices as a caller bug, so check here.
    let len = store.tasks().len();
    if source >= len || destination >= len {
        bail!("position out of range (have {} tasks)", len);
    }

    store.reorder_tasks(source, destination);
    println!("moved {} -> {}", source, destination);
    Ok(())
}
