//! Day-count conventions used by the settlement formulas.
//!
//! Colombian labor practice counts accrual days inclusively on both ends and
//! uses a commercial calendar of 30-day months and 360-day years. Delay days
//! for late-payment penalties are a plain (exclusive) date difference.

use chrono::NaiveDate;

/// Days in a commercial month.
pub const COMMERCIAL_MONTH_DAYS: i64 = 30;

/// Days in a commercial (legal) year.
pub const COMMERCIAL_YEAR_DAYS: i64 = 360;

/// Counts the days between two dates, inclusive of both ends.
///
/// Returns `0` when `start` is after `end`, so every date range has a
/// defined length.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::inclusive_days;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2023, 4, 17).unwrap();
/// assert_eq!(inclusive_days(day, day), 1);
///
/// let start = NaiveDate::from_ymd_opt(2023, 4, 16).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 4, 30).unwrap();
/// assert_eq!(inclusive_days(start, end), 15);
/// assert_eq!(inclusive_days(end, start), 0);
/// ```
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    if start > end {
        return 0;
    }
    (end - start).num_days() + 1
}

/// Days elapsed between two dates, excluding the start date.
///
/// Negative differences clamp to zero.
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(0)
}

/// Days of delay accrued past `deadline` as of `evaluation_date`.
///
/// An evaluation date on or before the deadline yields zero delay, never a
/// negative count.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::delay_days;
/// use chrono::NaiveDate;
///
/// let deadline = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
/// assert_eq!(delay_days(deadline, as_of), 10);
/// assert_eq!(delay_days(as_of, deadline), 0);
/// ```
pub fn delay_days(deadline: NaiveDate, evaluation_date: NaiveDate) -> i64 {
    elapsed_days(deadline, evaluation_date)
}
