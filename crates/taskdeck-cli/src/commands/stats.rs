use anyhow::Result;
use std::path::Path;
use taskdeck_core::compute_stats;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let store = super::open_store(file);
    let stats = compute_stats(store.tasks());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total:     {}", stats.total);
    println!("Active:    {}", stats.active);
    println!("Completed: {}", stats.completed);
    println!("Overdue:   {}", stats.overdue);
    println!();
    println!("By priority:");
    println!("  high:   {}", stats.by_priority.high);
    println!("  medium: {}", stats.by_priority.medium);
    println!("  low:    {}", stats.by_priority.low);

    if !stats.by_category.is_empty() {
        println!();
        println!("By category:");
        for (category, count) in &stats.by_category {
            println!("  {}: {}", category, count);
        }
    }
    Ok(())
}
