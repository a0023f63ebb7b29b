//! Inclusive calendar date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::inclusive_days;

/// An inclusive range of calendar dates.
///
/// A range whose `start` is after its `end` is degenerate: it has zero days
/// and overlaps nothing. Such ranges are representable on purpose so that
/// every calculation stays total over malformed input.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 4, 17).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
/// );
/// assert_eq!(range.days(), 75);
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range from its two inclusive bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days in the range, counting both ends. Zero when degenerate.
    pub fn days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }

    /// Returns true if the range has no days.
    pub fn is_degenerate(&self) -> bool {
        self.start > self.end
    }

    /// Checks if a date falls within the range (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The intersection of two ranges, or `None` if they share no day.
    ///
    /// # Example
    ///
    /// ```
    /// use liquidacion_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let pay = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2023, 4, 16).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 4, 30).unwrap(),
    /// );
    /// let accrual = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2023, 4, 17).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
    /// );
    /// let overlap = pay.overlap(&accrual).unwrap();
    /// assert_eq!(overlap.days(), 14);
    /// ```
    pub fn overlap(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            Some(DateRange { start, end })
        } else {
            None
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
