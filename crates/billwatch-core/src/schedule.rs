//! Due-date recurrence arithmetic
//!
//! Advancing a due date is always calendar-aware: weekly/biweekly step by
//! whole days, monthly/yearly step by calendar months. When the source
//! day-of-month does not exist in the target month, the day is clamped to
//! the last valid day of that month (Jan 31 + 1 month = Feb 29 in a leap
//! year, Feb 28 otherwise; Feb 29 + 1 year = Feb 28).

use chrono::{Duration, Months, NaiveDate};

use crate::models::Frequency;

/// Advance a due date by exactly one billing period.
///
/// This is the only way a bill's `next_due_date` moves forward: callers
/// feed it the bill's own prior due date, never "today", so a bill paid
/// early or late keeps its original cadence anchor.
pub fn next_due_date(current: NaiveDate, frequency: Frequency) -> NaiveDate {
    match frequency {
        Frequency::Weekly => current + Duration::days(7),
        Frequency::Biweekly => current + Duration::days(14),
        // checked_add_months clamps the day to the end of the target month
        // and returns None only past the end of chrono's representable range
        Frequency::Monthly => current
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX),
        Frequency::Yearly => current
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX),
    }
}

/// The infinite forward sequence of due dates starting at `start`.
///
/// The first item is `start` itself; each subsequent item advances by one
/// period. Monthly cadences anchored past the 28th re-anchor on the clamped
/// day (Jan 31 -> Feb 28 -> Mar 28), matching how the one-step advance
/// behaves when applied repeatedly.
pub fn occurrences(start: NaiveDate, frequency: Frequency) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), move |&d| Some(next_due_date(d, frequency)))
}

/// Due dates of a cadence falling inside an inclusive window.
pub fn due_dates_within(
    start: NaiveDate,
    frequency: Frequency,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<NaiveDate> {
    occurrences(start, frequency)
        .skip_while(|&d| d < from)
        .take_while(|&d| d <= to)
        .collect()
}
