//! Overlap apportionment of a pay period's earnings.
//!
//! A pay stub that straddles an accrual boundary contributes to each side in
//! proportion to the days it shares with that side.

use rust_decimal::Decimal;

use crate::models::{DateRange, PayPeriodRecord};

/// The share of one pay period attributable to a target date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apportionment {
    /// Days the pay period shares with the target range.
    pub overlap: DateRange,
    /// Inclusive length of the overlap.
    pub overlap_days: i64,
    /// Inclusive length of the whole pay period.
    pub period_days: i64,
    /// Apportioned base salary.
    pub base_salary: Decimal,
    /// Apportioned surcharges.
    pub extras: Decimal,
    /// Apportioned transport subsidy.
    pub aux_transport: Decimal,
}

impl Apportionment {
    /// Fraction of the pay period inside the target range, in `(0, 1]`.
    pub fn ratio(&self) -> Decimal {
        Decimal::from(self.overlap_days) / Decimal::from(self.period_days)
    }
}

/// Apportions a pay period's earnings to a target date range.
///
/// Each earnings field contributes `value * overlap_days / period_days`. The
/// multiplication happens before the division so whole-day fractions of whole
/// peso amounts stay exact; nothing is rounded.
///
/// Returns `None` when the pay period contributes nothing: the ranges do not
/// overlap, or the pay period itself is degenerate (zero days).
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::apportion;
/// use liquidacion_engine::models::{BonusFields, DateRange, PayPeriodRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = PayPeriodRecord {
///     period_start: NaiveDate::from_ymd_opt(2023, 4, 16).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2023, 4, 30).unwrap(),
///     base_salary: 1_050_000,
///     aux_transport: 70_303,
///     bonuses: BonusFields::default(),
/// };
/// let target = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 4, 17).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 4, 30).unwrap(),
/// );
///
/// let share = apportion(&record, &target).unwrap();
/// assert_eq!(share.overlap_days, 14);
/// assert_eq!(share.period_days, 15);
/// assert_eq!(share.base_salary, Decimal::from(980_000));
/// ```
pub fn apportion(record: &PayPeriodRecord, target: &DateRange) -> Option<Apportionment> {
    let period_days = record.days();
    if period_days == 0 {
        return None;
    }

    let overlap = record.range().overlap(target)?;
    let overlap_days = overlap.days();

    let share = |value: u64| {
        Decimal::from(value) * Decimal::from(overlap_days) / Decimal::from(period_days)
    };

    Some(Apportionment {
        overlap,
        overlap_days,
        period_days,
        base_salary: share(record.base_salary),
        extras: share(record.total_extras()),
        aux_transport: share(record.aux_transport),
    })
}
