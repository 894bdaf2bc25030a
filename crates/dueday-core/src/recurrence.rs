//! Repeat-rule engine: parsing the compact rule grammar and computing the
//! next occurrence of a task relative to an explicit reference date.
//!
//! Both halves are pure functions over their inputs. The reference date
//! ("now") is always a parameter; nothing in this module reads the clock,
//! performs I/O, or keeps state between calls, so everything here is safe to
//! call concurrently and trivial to test.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::CoreError;
use crate::models::{format_date, parse_date};

/// Largest allowed `d N` interval.
pub const MAX_DAYS_INTERVAL: i64 = 400;

const DAYS_IN_WEEK: u32 = 7;
const MONTHS_IN_YEAR: i32 = 12;

/// Bound on the monthly day-walk: roughly two years of calendar days.
/// A safety net against inputs with no reachable occurrence (e.g. `m 30 2`),
/// not a performance knob.
const MONTHLY_SEARCH_LIMIT: u32 = 24 * 31;

/// A parsed, validated repeat rule.
///
/// Families are mutually exclusive, so the rule is a sum type: a weekly rule
/// carrying month-days is unrepresentable by construction. Rules are
/// immutable once parsed and carry no reference to any task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatRule {
    /// `d N`: repeat every N calendar days, 1 <= N <= 400.
    Interval { days: i64 },
    /// `y`: repeat on the same month/day each year.
    Yearly,
    /// `w D[,D...]`: repeat on the given ISO weekdays (1 = Monday .. 7 = Sunday).
    Weekly { weekdays: Vec<u32> },
    /// `m D[,D...] [M[,M...]]`: repeat on the given days of the given months.
    /// Negative days count back from the end of the month (-1 = last day,
    /// -2 = second-to-last). An empty month list means every month.
    Monthly { month_days: Vec<i32>, months: Vec<u32> },
}

impl FromStr for RepeatRule {
    type Err = CoreError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = rule.split_whitespace().collect();
        let Some((&kind, args)) = parts.split_first() else {
            return Err(CoreError::InvalidRule("empty repeat rule".to_string()));
        };

        match kind {
            "d" => parse_interval_rule(args),
            "y" => {
                if !args.is_empty() {
                    return Err(CoreError::InvalidRule(
                        "rule 'y' takes no parameters".to_string(),
                    ));
                }
                Ok(RepeatRule::Yearly)
            }
            "w" => parse_weekly_rule(args),
            "m" => parse_monthly_rule(args),
            other => Err(CoreError::InvalidRule(format!(
                "unsupported rule type: '{other}'"
            ))),
        }
    }
}

fn parse_interval_rule(args: &[&str]) -> Result<RepeatRule, CoreError> {
    let [raw] = args else {
        return Err(CoreError::InvalidRule(
            "rule 'd' requires exactly one day interval".to_string(),
        ));
    };
    let days: i64 = raw
        .parse()
        .map_err(|_| CoreError::InvalidRule(format!("invalid day interval: '{raw}'")))?;
    if !(1..=MAX_DAYS_INTERVAL).contains(&days) {
        return Err(CoreError::InvalidRule(format!(
            "day interval must be between 1 and {MAX_DAYS_INTERVAL}: {days}"
        )));
    }
    Ok(RepeatRule::Interval { days })
}

fn parse_weekly_rule(args: &[&str]) -> Result<RepeatRule, CoreError> {
    let [raw] = args else {
        return Err(CoreError::InvalidRule(
            "rule 'w' requires a comma-separated list of weekdays".to_string(),
        ));
    };
    let mut weekdays = Vec::new();
    for token in raw.split(',') {
        let day: u32 = token
            .parse()
            .map_err(|_| CoreError::InvalidRule(format!("invalid weekday: '{token}'")))?;
        if !(1..=DAYS_IN_WEEK).contains(&day) {
            return Err(CoreError::InvalidRule(format!(
                "weekday must be between 1 and 7: {day}"
            )));
        }
        weekdays.push(day);
    }
    Ok(RepeatRule::Weekly { weekdays })
}

fn parse_monthly_rule(args: &[&str]) -> Result<RepeatRule, CoreError> {
    let (raw_days, raw_months) = match args {
        [days] => (days, None),
        [days, months] => (days, Some(months)),
        _ => {
            return Err(CoreError::InvalidRule(
                "rule 'm' requires a day list and an optional month list".to_string(),
            ))
        }
    };

    let mut month_days = Vec::new();
    for token in raw_days.split(',') {
        let day: i32 = token
            .parse()
            .map_err(|_| CoreError::InvalidRule(format!("invalid month day: '{token}'")))?;
        if !(1..=31).contains(&day) && !(-2..=-1).contains(&day) {
            return Err(CoreError::InvalidRule(format!(
                "month day must be 1..31 or -1/-2: {day}"
            )));
        }
        month_days.push(day);
    }

    let mut months = Vec::new();
    if let Some(raw_months) = raw_months {
        for token in raw_months.split(',') {
            let month: i32 = token
                .parse()
                .map_err(|_| CoreError::InvalidRule(format!("invalid month: '{token}'")))?;
            if !(1..=MONTHS_IN_YEAR).contains(&month) {
                return Err(CoreError::InvalidRule(format!(
                    "month must be between 1 and 12: {month}"
                )));
            }
            months.push(month as u32);
        }
    }

    Ok(RepeatRule::Monthly { month_days, months })
}

/// Computes the next due date for a task.
///
/// Validates `date` as an 8-digit calendar date, parses `repeat`, and
/// dispatches to [`next_occurrence`]. This is the string-level entry point
/// used by the repository and the CLI; callers decide what "now" is.
pub fn next_date(now: NaiveDate, date: &str, repeat: &str) -> Result<String, CoreError> {
    let base = parse_date(date)?;
    if repeat.trim().is_empty() {
        return Err(CoreError::InvalidRule("empty repeat rule".to_string()));
    }
    let rule: RepeatRule = repeat.parse()?;
    let next = next_occurrence(now, base, &rule)?;
    Ok(format_date(next))
}

/// Computes the next occurrence of `rule` anchored at `base`, relative to `now`.
///
/// The comparison semantics differ by family and are deliberate:
/// intervals fast-forward an overdue base to the first step at-or-after
/// `now`, while the calendar families return a date strictly after `now`.
pub fn next_occurrence(
    now: NaiveDate,
    base: NaiveDate,
    rule: &RepeatRule,
) -> Result<NaiveDate, CoreError> {
    match rule {
        RepeatRule::Interval { days } => Ok(next_interval(now, base, *days)),
        RepeatRule::Yearly => Ok(next_yearly(now, base)),
        RepeatRule::Weekly { weekdays } => next_weekly(now, base, weekdays),
        RepeatRule::Monthly { month_days, months } => {
            next_monthly(now, base, month_days, months)
        }
    }
}

/// `d N`: a still-future base advances by exactly one period; an overdue base
/// is stepped forward until it is no longer before `now` (may land on `now`).
/// Repeated addition, not division: termination is bounded by N ≥ 1.
fn next_interval(now: NaiveDate, base: NaiveDate, days: i64) -> NaiveDate {
    let step = Duration::days(days);
    let mut next = base;
    if next < now {
        while next < now {
            next += step;
        }
    } else {
        next += step;
    }
    next
}

/// `y`: one year ahead of a still-future base; an overdue base is stepped a
/// year at a time until strictly after `now`.
fn next_yearly(now: NaiveDate, base: NaiveDate) -> NaiveDate {
    let mut next = base;
    if next >= now {
        next = add_year(next);
    } else {
        while next <= now {
            next = add_year(next);
        }
    }
    next
}

/// Adds one calendar year. A February 29 source in a non-leap target year
/// rolls over to March 1 rather than clamping to February 28.
fn add_year(date: NaiveDate) -> NaiveDate {
    let year = date.year() + 1;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .unwrap_or_else(|| first_of_month(year, 3))
}

/// `w ...`: scan forward day by day from the later of `base`/`now` and return
/// the first date whose ISO weekday is in the set and is strictly after `now`.
/// Every weekday set matches within 7 days, so running out of the 8-day bound
/// means the invariant was violated; report it instead of looping.
fn next_weekly(now: NaiveDate, base: NaiveDate, weekdays: &[u32]) -> Result<NaiveDate, CoreError> {
    let mut next = if base < now { now } else { base };

    for _ in 0..=DAYS_IN_WEEK {
        let weekday = next.weekday().number_from_monday();
        if weekdays.contains(&weekday) && next > now {
            return Ok(next);
        }
        next = next.succ_opt().ok_or(CoreError::NoOccurrenceFound)?;
    }

    Err(CoreError::NoOccurrenceFound)
}

/// `m ...`: walk forward one day at a time from the later of `base`/`now`,
/// bounded to ~2 years. Months excluded by a non-empty month set are skipped
/// wholesale. Within an eligible month, negative day values resolve against
/// the month's last day, out-of-range values are discarded for that month,
/// and the earliest candidate strictly after `now` wins immediately.
fn next_monthly(
    now: NaiveDate,
    base: NaiveDate,
    month_days: &[i32],
    months: &[u32],
) -> Result<NaiveDate, CoreError> {
    let mut next = if base < now { now } else { base };

    for _ in 0..MONTHLY_SEARCH_LIMIT {
        let (year, month) = (next.year(), next.month());

        if !months.is_empty() && !months.contains(&month) {
            next = if month == 12 {
                first_of_month(year + 1, 1)
            } else {
                first_of_month(year, month + 1)
            };
            continue;
        }

        let last_day = last_day_of_month(year, month) as i32;
        let mut earliest: Option<NaiveDate> = None;
        for &day in month_days {
            let target = if day < 0 { last_day + day + 1 } else { day };
            if !(1..=last_day).contains(&target) {
                continue;
            }
            let candidate = NaiveDate::from_ymd_opt(year, month, target as u32)
                .ok_or(CoreError::NoOccurrenceFound)?;
            if candidate > now && earliest.map_or(true, |e| candidate < e) {
                earliest = Some(candidate);
            }
        }
        if let Some(found) = earliest {
            return Ok(found);
        }

        next = next.succ_opt().ok_or(CoreError::NoOccurrenceFound)?;
    }

    Err(CoreError::NoOccurrenceFound)
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Month is always 1..=12 here and years stay far from chrono's limits.
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid first-of-month date")
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    next_month.pred_opt().expect("month start has a predecessor").day()
}
