use anyhow::Result;
use dueday_core::models::CompletionResult;
use dueday_core::repository::Repository;
use owo_colors::OwoColorize;

use crate::cli::DoneCommand;
use crate::parser;

pub async fn done_task(repo: &impl Repository, command: DoneCommand) -> Result<()> {
    let result = repo.complete_task(command.id, parser::today()).await?;

    match result {
        CompletionResult::Finished(task) => {
            println!("{} task: '{}' (removed)", "Completed".green().bold(), task.title);
        }
        CompletionResult::Rescheduled(task) => {
            println!(
                "{} task: '{}', next occurrence {}",
                "Completed".green().bold(),
                task.title,
                task.date
            );
        }
    }
    Ok(())
}
