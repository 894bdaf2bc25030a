use anyhow::Result;
use dueday_core::error::CoreError;
use dueday_core::repository::Repository;

use crate::cli::EditCommand;
use crate::parser;

pub async fn edit_task(repo: &impl Repository, command: EditCommand) -> Result<()> {
    let mut task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if let Some(title) = command.title {
        task.title = title;
    }
    if let Some(comment) = command.comment {
        task.comment = comment;
    }
    if let Some(date) = command.date {
        task.date = parser::parse_task_date(&date)?;
    }
    if command.repeat_clear {
        task.repeat.clear();
    } else if let Some(repeat) = command.repeat {
        task.repeat = repeat;
    }

    let task = repo.update_task(task, parser::today()).await?;
    println!("Updated task {}: '{}' due {}", task.id, task.title, task.date);
    Ok(())
}
