use anyhow::Result;
use std::path::Path;
use taskdeck_core::{visible_tasks, FilterCriteria, Priority, StatusFilter, Task};

pub fn run(
    file: &Path,
    status: StatusFilter,
    search: String,
    category: String,
    priority: Option<Priority>,
    json: bool,
) -> Result<()> {
    let store = super::open_store(file);
    let criteria = FilterCriteria {
        status,
        search,
        category,
        priority,
    };
    let visible = visible_tasks(store.tasks(), &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    for (index, task) in visible.iter().enumerate() {
        println!("{:>3}. {}", index, render(task));
    }
    Ok(())
}

fn render(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!(
        "[{}] {}  {}  ({})",
        mark,
        super::short_id(&task.id),
        task.title,
        task.priority
    );
    if !task.category.is_empty() {
        line.push_str(&format!(" #{}", task.category));
    }
    if let Some(due) = task.due_date {
        line.push_str(&format!(" due {}", due));
    }
    line
}
