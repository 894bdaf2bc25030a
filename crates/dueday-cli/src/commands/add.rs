use anyhow::Result;
use dueday_core::models::NewTaskData;
use dueday_core::repository::Repository;
use owo_colors::OwoColorize;

use crate::cli::AddCommand;
use crate::parser;

pub async fn add_task(repo: &impl Repository, command: AddCommand) -> Result<()> {
    let date = match command.date.as_deref() {
        Some(raw) => parser::parse_task_date(raw)?,
        // The repository fills in today for empty dates.
        None => String::new(),
    };

    let data = NewTaskData {
        date,
        title: command.title,
        comment: command.comment.unwrap_or_default(),
        repeat: command.repeat.unwrap_or_default(),
    };

    let task = repo.add_task(data, parser::today()).await?;
    println!(
        "{} task {}: '{}' due {}",
        "Added".green().bold(),
        task.id,
        task.title,
        task.date
    );
    if !task.repeat.is_empty() {
        println!("Repeats: {}", task.repeat);
    }
    Ok(())
}
