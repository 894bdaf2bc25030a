use clap::{Parser, Subcommand};

/// A small, robust CLI task scheduler with compact repeat rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List upcoming tasks
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Compute the next occurrence of a repeat rule
    Next(NextCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The due date (YYYYMMDD or natural language like 'tomorrow')
    #[clap(short, long)]
    pub date: Option<String>,
    /// A free-form comment
    #[clap(short, long)]
    pub comment: Option<String>,
    /// Repeat rule: 'd N', 'y', 'w 1,3,5' or 'm 15,-1 2,8'
    #[clap(short, long)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Search text; a DD.MM.YYYY value filters by due date instead
    pub search: Option<String>,
    /// Maximum number of tasks to show
    #[clap(long)]
    pub limit: Option<i64>,
    /// Print tasks as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task to show
    pub id: i64,
    /// Print the task as JSON instead of a table
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    /// New due date (YYYYMMDD or natural language)
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    /// New repeat rule
    #[arg(long)]
    pub repeat: Option<String>,
    /// Remove the repeat rule (convert to a one-shot task)
    #[arg(long, conflicts_with = "repeat")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// Base date in YYYYMMDD form
    pub date: String,
    /// Repeat rule, quoted (e.g. "w 1,3,5")
    pub repeat: String,
    /// Reference date in YYYYMMDD form (defaults to today)
    #[clap(long)]
    pub now: Option<String>,
}
