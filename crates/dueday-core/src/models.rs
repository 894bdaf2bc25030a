use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use sqlx::FromRow;

use crate::error::CoreError;

/// Date format used everywhere in the scheduler: 8 digits, `YYYYMMDD`.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// A scheduled task. Maps 1:1 to the `scheduler` table.
///
/// `date` is stored as a `YYYYMMDD` string rather than a typed date: the
/// column participates in lexicographic `ORDER BY`/comparisons which, for
/// this format, coincide with chronological order.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Autoincrement row id, serialized as a string for API compatibility.
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    /// Due date in `YYYYMMDD` form.
    pub date: String,
    pub title: String,
    pub comment: String,
    /// Compact repeat rule (`d N`, `y`, `w ...`, `m ...`), empty for one-shot tasks.
    pub repeat: String,
}

/// Data required to create a new task.
#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    /// Due date in `YYYYMMDD` form; empty or `"today"` means the supplied today.
    pub date: String,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

/// Parameters for listing tasks.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Exact-match filter on the due date (`YYYYMMDD`).
    pub date: Option<String>,
    /// Substring filter on title or comment.
    pub search: Option<String>,
    /// Maximum number of tasks returned.
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            date: None,
            search: None,
            limit: 50,
        }
    }
}

/// Outcome of completing a task.
#[derive(Debug)]
pub enum CompletionResult {
    /// One-shot task: removed from the store.
    Finished(Task),
    /// Recurring task: due date advanced to the next occurrence.
    Rescheduled(Task),
}

/// Checks that `date` is a real calendar date in `YYYYMMDD` form.
pub fn validate_date(date: &str) -> Result<(), CoreError> {
    parse_date(date).map(|_| ())
}

/// Parses a `YYYYMMDD` string into a [`NaiveDate`].
pub fn parse_date(date: &str) -> Result<NaiveDate, CoreError> {
    if date.len() != 8 {
        return Err(CoreError::InvalidDate(format!(
            "expected 8 digits (YYYYMMDD), got '{date}'"
        )));
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(format!("'{date}' is not a calendar date")))
}

/// Formats a [`NaiveDate`] as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        let date = parse_date("20240126").unwrap();
        assert_eq!(format_date(date), "20240126");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(parse_date("2024126"), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date("202401260"), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date(""), Err(CoreError::InvalidDate(_))));
    }

    #[test]
    fn parse_rejects_non_calendar_dates() {
        assert!(matches!(parse_date("20240230"), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date("20241301"), Err(CoreError::InvalidDate(_))));
        assert!(matches!(parse_date("2024ab01"), Err(CoreError::InvalidDate(_))));
    }

    #[test]
    fn leap_day_parses_only_in_leap_years() {
        assert!(parse_date("20240229").is_ok());
        assert!(parse_date("20230229").is_err());
    }
}
