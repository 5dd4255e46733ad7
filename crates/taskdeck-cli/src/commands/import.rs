use anyhow::Result;
use std::path::Path;
use taskdeck_store::transfer;

pub fn run(file: &Path, path: &Path, merge: bool) -> Result<()> {
    // Parse before touching the store: a bad file must leave state as is,
    // and its error ("Invalid JSON file") goes straight to the user.
    let imported = transfer::import_from_file(path)?;
    let count = imported.len();

    let mut store = super::open_store(file);
    if merge {
        let merged = transfer::merge_imported(store.tasks(), imported);
        store.import_tasks(merged);
        println!("merged {} tasks ({} total)", count, store.tasks().len());
    } else {
        store.import_tasks(imported);
        println!("imported {} tasks", count);
    }
    Ok(())
}
