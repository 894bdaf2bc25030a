use anyhow::Result;
use chrono::NaiveDate;
use dueday_core::models::{format_date, ListQuery};
use dueday_core::repository::Repository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::parser;
use crate::views;

pub async fn list_tasks(
    repo: &impl Repository,
    command: ListCommand,
    config: &Config,
) -> Result<()> {
    let mut query = ListQuery {
        limit: command.limit.unwrap_or(config.list_limit),
        ..Default::default()
    };

    if let Some(search) = &command.search {
        // A DD.MM.YYYY search means "tasks due on that day"; anything else
        // is a substring search over title and comment.
        if let Ok(date) = NaiveDate::parse_from_str(search, "%d.%m.%Y") {
            query.date = Some(format_date(date));
        } else {
            query.search = Some(search.clone());
        }
    }

    let tasks = repo.find_tasks(&query).await?;

    if command.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "tasks": tasks }))?
        );
    } else {
        views::table::display_tasks(&tasks, parser::today());
    }
    Ok(())
}
