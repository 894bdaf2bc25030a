use anyhow::Result;
use dueday_core::error::CoreError;
use dueday_core::repository::Repository;

use crate::cli::ShowCommand;
use crate::parser;
use crate::views;

pub async fn show_task(repo: &impl Repository, command: ShowCommand) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        views::table::display_task(&task, parser::today());
    }
    Ok(())
}
