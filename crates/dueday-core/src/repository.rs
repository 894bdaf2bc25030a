use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};

use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{format_date, validate_date, CompletionResult, ListQuery, NewTaskData, Task};
use crate::recurrence::next_date;

/// Data access layer for scheduled tasks.
///
/// `today` / `now` are explicit parameters on every date-sensitive operation:
/// the recurrence engine never reads the wall clock, and keeping the
/// reference date at the call boundary keeps these methods deterministic
/// under test.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn find_tasks(&self, query: &ListQuery) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, task: Task, today: NaiveDate) -> Result<Task, CoreError>;
    async fn complete_task(&self, id: i64, now: NaiveDate) -> Result<CompletionResult, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Normalizes a task's due date before it is persisted.
    ///
    /// Empty and `"today"` dates become `today`. A past-due date with a
    /// repeat rule rolls forward through the engine, with one exception:
    /// `d 1` snaps to today, since "every day" means "due today" and
    /// stepping it through the calculator would push it to tomorrow.
    /// That shortcut lives here, at the caller level, never in the engine.
    /// A past-due date without a rule snaps to today; dates on or after
    /// today are stored as given.
    fn normalized_date(
        date: &str,
        repeat: &str,
        today: NaiveDate,
    ) -> Result<String, CoreError> {
        let today_str = format_date(today);

        let date = if date.is_empty() || date == "today" {
            today_str.clone()
        } else {
            date.to_string()
        };
        validate_date(&date)?;

        // YYYYMMDD strings order lexicographically == chronologically.
        if date >= today_str {
            Ok(date)
        } else if repeat.is_empty() || repeat == "d 1" {
            Ok(today_str)
        } else {
            next_date(today, &date, repeat)
        }
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        if data.title.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "task title cannot be empty".to_string(),
            ));
        }
        if !data.repeat.is_empty() {
            // Surface rule errors at creation time, not at completion time.
            data.repeat.parse::<crate::recurrence::RepeatRule>()?;
        }
        let date = Self::normalized_date(&data.date, &data.repeat, today)?;

        let result = sqlx::query(
            "INSERT INTO scheduler (date, title, comment, repeat) VALUES (?, ?, ?, ?)",
        )
        .bind(&date)
        .bind(&data.title)
        .bind(&data.comment)
        .bind(&data.repeat)
        .execute(self.pool())
        .await?;

        Ok(Task {
            id: result.last_insert_rowid(),
            date,
            title: data.title,
            comment: data.comment,
            repeat: data.repeat,
        })
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as(
            "SELECT id, date, title, comment, repeat FROM scheduler WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(task)
    }

    async fn find_tasks(&self, query: &ListQuery) -> Result<Vec<Task>, CoreError> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, date, title, comment, repeat FROM scheduler");

        let mut has_where = false;
        if let Some(date) = &query.date {
            builder.push(" WHERE date = ").push_bind(date);
            has_where = true;
        }
        if let Some(search) = &query.search {
            builder.push(if has_where { " AND " } else { " WHERE " });
            let pattern = format!("%{search}%");
            builder
                .push("(title LIKE ")
                .push_bind(pattern.clone())
                .push(" OR comment LIKE ")
                .push_bind(pattern)
                .push(")");
        }
        builder.push(" ORDER BY date ASC LIMIT ").push_bind(query.limit);

        let tasks = builder.build_query_as().fetch_all(self.pool()).await?;
        Ok(tasks)
    }

    async fn update_task(&self, mut task: Task, today: NaiveDate) -> Result<Task, CoreError> {
        if task.title.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "task title cannot be empty".to_string(),
            ));
        }
        if !task.repeat.is_empty() {
            task.repeat.parse::<crate::recurrence::RepeatRule>()?;
        }
        task.date = Self::normalized_date(&task.date, &task.repeat, today)?;

        let result = sqlx::query(
            "UPDATE scheduler SET date = ?, title = ?, comment = ?, repeat = ? WHERE id = ?",
        )
        .bind(&task.date)
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.repeat)
        .bind(task.id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(task.id.to_string()));
        }
        Ok(task)
    }

    async fn complete_task(&self, id: i64, now: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut task = self
            .find_task_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if task.repeat.is_empty() {
            self.delete_task(id).await?;
            return Ok(CompletionResult::Finished(task));
        }

        let next = next_date(now, &task.date, &task.repeat)?;
        let result = sqlx::query("UPDATE scheduler SET date = ? WHERE id = ?")
            .bind(&next)
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }

        task.date = next;
        Ok(CompletionResult::Rescheduled(task))
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
