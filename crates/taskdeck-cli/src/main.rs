mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskdeck_core::{Priority, StatusFilter};

#[derive(Parser)]
#[command(name = "taskdeck", about = "Personal task tracker", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Task file to operate on
    #[arg(long, global = true, default_value = ".taskdeck/tasks.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Priority (high, medium, low)
        #[arg(short, long)]
        priority: Option<Priority>,

        /// Free-text category
        #[arg(short, long, default_value = "")]
        category: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// List tasks, optionally filtered
    List {
        /// Status filter (all, active, completed)
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Case-insensitive search over title and description
        #[arg(long, default_value = "")]
        search: String,

        /// Filter by category (case-insensitive)
        #[arg(short, long, default_value = "")]
        category: String,

        /// Filter by priority
        #[arg(short, long)]
        priority: Option<Priority>,
    },

    /// Update fields of an existing task
    Update {
        /// Task id (full or unique prefix)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<Priority>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<NaiveDate>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Delete a task
    Delete {
        /// Task id (full or unique prefix)
        id: String,
    },

    /// Toggle a task between active and completed
    Toggle {
        /// Task id (full or unique prefix)
        id: String,
    },

    /// Move a task to a new position in the list
    Move {
        /// Current position (0-based)
        source: usize,

        /// Target position (0-based)
        destination: usize,
    },

    /// Show aggregate statistics
    Stats,

    /// Undo the last mutation
    Undo,

    /// Redo a previously undone mutation
    Redo,

    /// Import tasks from an exported JSON file
    Import {
        /// File to import
        path: PathBuf,

        /// Append imported tasks (with fresh ids) instead of replacing
        #[arg(long)]
        merge: bool,
    },

    /// Export all tasks to a dated JSON file
    Export {
        /// Directory to write the export into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Delete every task
    Clear,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = cli.file;

    let result = match cli.command {
        Commands::Add {
            title,
            description,
            priority,
            category,
            due,
        } => commands::add::run(&file, title, description, priority, category, due),
        Commands::List {
            status,
            search,
            category,
            priority,
        } => commands::list::run(&file, status, search, category, priority, cli.json),
        Commands::Update {
            id,
            title,
            description,
            priority,
            category,
            due,
            clear_due,
        } => commands::update::run(&file, id, title, description, priority, category, due, clear_due),
        Commands::Delete { id } => commands::delete::run(&file, id),
        Commands::Toggle { id } => commands::toggle::run(&file, id),
        Commands::Move {
            source,
            destination,
        } => commands::move_task::run(&file, source, destination),
        Commands::Stats => commands::stats::run(&file, cli.json),
        Commands::Undo => commands::undo::run(&file),
        Commands::Redo => commands::redo::run(&file),
        Commands::Import { path, merge } => commands::import::run(&file, &path, merge),
        Commands::Export { dir } => commands::export::run(&file, &dir),
        Commands::Clear => commands::clear::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
