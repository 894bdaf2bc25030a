use anyhow::Result;
use dueday_core::models::parse_date;
use dueday_core::recurrence::next_date;

use crate::cli::NextCommand;
use crate::parser;

/// Probe the recurrence engine directly: print the next occurrence of a
/// rule without touching the task store.
pub fn next_occurrence(command: NextCommand) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => parser::today(),
    };

    let next = next_date(now, &command.date, &command.repeat)?;
    println!("{next}");
    Ok(())
}
