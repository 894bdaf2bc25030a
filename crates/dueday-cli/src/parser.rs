use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};
use dueday_core::models::{format_date, DATE_FORMAT};

/// Parses a user-supplied date into `YYYYMMDD` form.
///
/// An 8-digit input is taken literally; anything else goes through
/// chrono-english, so 'today', 'tomorrow' and 'next friday' all work.
pub fn parse_task_date(input: &str) -> Result<String> {
    if input.len() == 8 && input.bytes().all(|b| b.is_ascii_digit()) {
        let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map_err(|_| anyhow!("'{input}' is not a calendar date"))?;
        return Ok(format_date(date));
    }

    let parsed = parse_date_string(input, Local::now(), Dialect::Us)
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", input, e))?;
    Ok(format_date(parsed.date_naive()))
}

/// The wall-clock date. The core never reads the clock itself; this is the
/// single place the CLI turns "now" into an explicit parameter.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
