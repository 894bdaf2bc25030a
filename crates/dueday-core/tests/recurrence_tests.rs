use chrono::{Duration, NaiveDate};
use dueday_core::error::CoreError;
use dueday_core::recurrence::{next_date, next_occurrence, RepeatRule};
use proptest::prelude::*;

fn d(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y%m%d").expect("valid test date")
}

fn next(now: &str, base: &str, rule: &str) -> Result<NaiveDate, CoreError> {
    let rule: RepeatRule = rule.parse().expect("valid test rule");
    next_occurrence(d(now), d(base), &rule)
}

// ---------------------------------------------------------------------------
// Interval family (`d N`)
// ---------------------------------------------------------------------------

#[test]
fn interval_future_base_advances_exactly_one_period() {
    assert_eq!(next("20240126", "20240201", "d 7").unwrap(), d("20240208"));
}

#[test]
fn interval_base_equal_to_now_still_advances() {
    // A base on `now` is not overdue, so it takes a single full step.
    assert_eq!(next("20240126", "20240126", "d 5").unwrap(), d("20240131"));
}

#[test]
fn interval_overdue_base_fast_forwards_past_now() {
    assert_eq!(next("20240126", "20231225", "d 5").unwrap(), d("20240129"));
}

#[test]
fn interval_fast_forward_may_land_exactly_on_now() {
    // 20240101 + 5 * 5d == 20240126: at-or-after `now` is accepted.
    assert_eq!(next("20240126", "20240101", "d 5").unwrap(), d("20240126"));
}

#[test]
fn interval_maximum_step() {
    assert_eq!(next("20240101", "20230101", "d 400").unwrap(), d("20240205"));
}

proptest! {
    // For every interval and every overdue base, the result is the first
    // multiple-of-N step at or after `now`, anchored on the base.
    #[test]
    fn interval_lands_on_first_step_at_or_after_now(
        days in 1i64..=400,
        offset in 1i64..=2000,
    ) {
        let now = d("20240601");
        let base = now - Duration::days(offset);
        let rule = RepeatRule::Interval { days };

        let result = next_occurrence(now, base, &rule).unwrap();

        prop_assert!(result >= now);
        prop_assert!(result - Duration::days(days) < now);
        prop_assert_eq!((result - base).num_days() % days, 0);
    }
}

// ---------------------------------------------------------------------------
// Yearly family (`y`)
// ---------------------------------------------------------------------------

#[test]
fn yearly_future_base_advances_one_year() {
    assert_eq!(next("20240101", "20240315", "y").unwrap(), d("20250315"));
}

#[test]
fn yearly_base_equal_to_now_advances_once() {
    assert_eq!(next("20240101", "20240101", "y").unwrap(), d("20250101"));
}

#[test]
fn yearly_overdue_base_steps_until_strictly_after_now() {
    // 20230101 -> 20240101 equals `now`, which is not "after": keep going.
    assert_eq!(next("20240101", "20230101", "y").unwrap(), d("20250101"));
}

#[test]
fn yearly_leap_day_rolls_to_march_first() {
    assert_eq!(next("20240101", "20240229", "y").unwrap(), d("20250301"));
}

#[test]
fn yearly_overdue_leap_day_rolls_then_steps_forward() {
    // 20200229 -> 20210301 -> 20220301 -> 20230301 -> 20240301
    assert_eq!(next("20240101", "20200229", "y").unwrap(), d("20240301"));
}

// ---------------------------------------------------------------------------
// Weekly family (`w ...`)
// ---------------------------------------------------------------------------

#[test]
fn weekly_returns_first_matching_weekday_strictly_after_now() {
    // 2024-01-01 is a Monday; Monday itself is excluded, Wednesday wins.
    assert_eq!(next("20240101", "20240101", "w 1,3,5").unwrap(), d("20240103"));
}

#[test]
fn weekly_matching_day_equal_to_now_is_skipped() {
    assert_eq!(next("20240101", "20240101", "w 1").unwrap(), d("20240108"));
}

#[test]
fn weekly_overdue_base_scans_from_now() {
    // 2024-01-26 is a Friday; next Sunday is the 28th.
    assert_eq!(next("20240126", "20231212", "w 7").unwrap(), d("20240128"));
}

#[test]
fn weekly_future_base_is_inclusive_starting_cursor() {
    // 2024-01-30 is a Tuesday and already past `now`: it matches itself.
    assert_eq!(next("20240126", "20240130", "w 2").unwrap(), d("20240130"));
}

#[test]
fn weekly_full_set_returns_next_day() {
    assert_eq!(
        next("20240126", "20240126", "w 1,2,3,4,5,6,7").unwrap(),
        d("20240127")
    );
}

// ---------------------------------------------------------------------------
// Monthly family (`m ...`)
// ---------------------------------------------------------------------------

#[test]
fn monthly_last_day_of_month() {
    assert_eq!(next("20240115", "20240101", "m -1").unwrap(), d("20240131"));
}

#[test]
fn monthly_second_to_last_day() {
    assert_eq!(next("20240115", "20240101", "m -2").unwrap(), d("20240130"));
}

#[test]
fn monthly_day_31_skips_short_months() {
    // April has 30 days; the walk carries into May.
    assert_eq!(next("20240401", "20240301", "m 31").unwrap(), d("20240531"));
}

#[test]
fn monthly_rolls_into_next_month() {
    assert_eq!(next("20240126", "20240101", "m 1").unwrap(), d("20240201"));
}

#[test]
fn monthly_respects_month_set() {
    // Only January and June are eligible; January 15 is already past.
    assert_eq!(next("20240126", "20240101", "m 15 1,6").unwrap(), d("20240615"));
}

#[test]
fn monthly_february_29_waits_for_leap_year() {
    // No candidate exists in February 2023; the next one is 2024-02-29,
    // inside the two-year search window.
    assert_eq!(next("20230115", "20230101", "m 29,30,31 2").unwrap(), d("20240229"));
}

#[test]
fn monthly_unreachable_day_exhausts_search_window() {
    assert!(matches!(
        next("20240115", "20240101", "m 30 2"),
        Err(CoreError::NoOccurrenceFound)
    ));
}

#[test]
fn monthly_future_base_may_yield_candidate_before_base() {
    // The cursor starts at the base, but candidates only need to be after
    // `now`: March 1 precedes the base date and is still returned.
    assert_eq!(next("20240115", "20240320", "m 1,15").unwrap(), d("20240301"));
}

#[test]
fn monthly_earliest_candidate_in_month_wins() {
    assert_eq!(next("20240105", "20240101", "m 20,10,15").unwrap(), d("20240110"));
}

// ---------------------------------------------------------------------------
// String-level entry point
// ---------------------------------------------------------------------------

#[test]
fn next_date_formats_result() {
    assert_eq!(
        next_date(d("20240126"), "20240126", "d 5").unwrap(),
        "20240131"
    );
}

#[test]
fn next_date_rejects_invalid_dates() {
    assert!(matches!(
        next_date(d("20240126"), "20240230", "d 5"),
        Err(CoreError::InvalidDate(_))
    ));
    assert!(matches!(
        next_date(d("20240126"), "2024", "d 5"),
        Err(CoreError::InvalidDate(_))
    ));
}

#[test]
fn next_date_rejects_empty_or_blank_rule() {
    assert!(matches!(
        next_date(d("20240126"), "20240126", ""),
        Err(CoreError::InvalidRule(_))
    ));
    assert!(matches!(
        next_date(d("20240126"), "20240126", "   "),
        Err(CoreError::InvalidRule(_))
    ));
}

#[test]
fn next_date_rejects_unknown_rule_family() {
    assert!(matches!(
        next_date(d("20240126"), "20240126", "k 3"),
        Err(CoreError::InvalidRule(_))
    ));
}
