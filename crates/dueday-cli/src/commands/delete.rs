use anyhow::Result;
use dialoguer::Confirm;
use dueday_core::error::CoreError;
use dueday_core::repository::Repository;

use crate::cli::DeleteCommand;

pub async fn delete_task(repo: &impl Repository, command: DeleteCommand) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete task '{}'?",
                task.title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    repo.delete_task(command.id).await?;
    println!("Deleted task: '{}'", task.title);
    Ok(())
}
