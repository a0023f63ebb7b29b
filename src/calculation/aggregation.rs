//! Aggregation of apportioned earnings over an accrual period.
//!
//! This module turns the pay stubs overlapping an accrual period into the
//! monthly-equivalent averages the benefit formulas expect.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{ApportionmentResult, DateRange, PayPeriodRecord};

use super::apportionment::{Apportionment, apportion};
use super::day_count::COMMERCIAL_MONTH_DAYS;

/// Running totals of apportioned earnings.
#[derive(Debug, Clone, Copy, Default)]
struct ProportionalSums {
    base_salary: Decimal,
    extras: Decimal,
    aux_transport: Decimal,
    periods: usize,
}

impl ProportionalSums {
    fn add(self, share: &Apportionment) -> Self {
        Self {
            base_salary: self.base_salary + share.base_salary,
            extras: self.extras + share.extras,
            aux_transport: self.aux_transport + share.aux_transport,
            periods: self.periods + 1,
        }
    }
}

/// Aggregates every pay period overlapping `accrual` into monthly averages.
///
/// Each pay period contributes its apportioned share (see
/// [`apportion`](super::apportion)). The sums are then normalized to a daily
/// rate and re-expanded to a 30-day commercial month, so a 17-day period and a
/// 259-day period both yield a comparable monthly figure. The expansion is
/// computed as `sum * 30 / accrual_days`.
///
/// A degenerate accrual period (zero days) yields all-zero averages.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::aggregate_period;
/// use liquidacion_engine::models::{BonusFields, DateRange, PayPeriodRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let stubs = vec![
///     PayPeriodRecord {
///         period_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         period_end: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///         base_salary: 1_050_000,
///         aux_transport: 81_000,
///         bonuses: BonusFields::default(),
///     },
///     PayPeriodRecord {
///         period_start: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
///         period_end: NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
///         base_salary: 1_050_000,
///         aux_transport: 81_000,
///         bonuses: BonusFields::default(),
///     },
/// ];
/// let january = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
/// );
///
/// let result = aggregate_period(&january, &stubs);
/// assert_eq!(result.accrual_days, 30);
/// assert_eq!(result.base_only_avg, Decimal::from(2_100_000));
/// assert_eq!(result.aux_avg, Decimal::from(162_000));
/// ```
pub fn aggregate_period(accrual: &DateRange, records: &[PayPeriodRecord]) -> ApportionmentResult {
    let accrual_days = accrual.days();
    if accrual_days == 0 {
        debug!(accrual = %accrual, "Degenerate accrual period, averages are zero");
        return ApportionmentResult::zero();
    }

    let sums = records
        .iter()
        .filter_map(|record| apportion(record, accrual))
        .fold(ProportionalSums::default(), |acc, share| acc.add(&share));

    let days = Decimal::from(accrual_days);
    let month = Decimal::from(COMMERCIAL_MONTH_DAYS);
    let monthly = |total: Decimal| total * month / days;

    debug!(
        accrual = %accrual,
        accrual_days,
        contributing_periods = sums.periods,
        "Aggregated pay periods over accrual period"
    );

    ApportionmentResult {
        salary_plus_extras_avg: monthly(sums.base_salary + sums.extras),
        aux_avg: monthly(sums.aux_transport),
        base_only_avg: monthly(sums.base_salary),
        accrual_days,
        contributing_periods: sums.periods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BonusFields;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stub(start: NaiveDate, end: NaiveDate, base: u64, aux: u64, extras: u64) -> PayPeriodRecord {
        PayPeriodRecord {
            period_start: start,
            period_end: end,
            base_salary: base,
            aux_transport: aux,
            bonuses: BonusFields {
                night: extras,
                ..Default::default()
            },
        }
    }

    /// Semi-monthly stubs from mid-April to end of June 2023.
    fn first_semester_stubs() -> Vec<PayPeriodRecord> {
        vec![
            stub(date(2023, 4, 16), date(2023, 4, 30), 1_050_000, 70_303, 0),
            stub(date(2023, 5, 1), date(2023, 5, 15), 1_050_000, 70_303, 0),
            stub(date(2023, 5, 16), date(2023, 5, 31), 1_050_000, 70_303, 0),
            stub(date(2023, 6, 1), date(2023, 6, 15), 1_050_000, 70_303, 0),
            stub(date(2023, 6, 16), date(2023, 6, 30), 1_050_000, 70_303, 0),
        ]
    }

    #[test]
    fn test_partial_first_stub_is_apportioned() {
        let accrual = DateRange::new(date(2023, 4, 17), date(2023, 6, 30));
        let result = aggregate_period(&accrual, &first_semester_stubs());

        assert_eq!(result.accrual_days, 75);
        assert_eq!(result.contributing_periods, 5);
        // (980,000 + 4 * 1,050,000) * 30 / 75
        assert_eq!(result.base_only_avg, Decimal::from(2_072_000));
        assert_eq!(result.salary_plus_extras_avg, result.base_only_avg);
    }

    #[test]
    fn test_extras_only_affect_salary_plus_extras() {
        let accrual = DateRange::new(date(2023, 5, 1), date(2023, 5, 30));
        let records = vec![stub(date(2023, 5, 1), date(2023, 5, 30), 2_100_000, 140_606, 300_000)];
        let result = aggregate_period(&accrual, &records);

        assert_eq!(result.base_only_avg, Decimal::from(2_100_000));
        assert_eq!(result.salary_plus_extras_avg, Decimal::from(2_400_000));
        assert_eq!(result.aux_avg, Decimal::from(140_606));
    }

    #[test]
    fn test_degenerate_accrual_period_is_all_zero() {
        let accrual = DateRange::new(date(2023, 6, 30), date(2023, 4, 17));
        let result = aggregate_period(&accrual, &first_semester_stubs());
        assert_eq!(result, ApportionmentResult::zero());
    }

    #[test]
    fn test_empty_source_yields_zero_averages() {
        let accrual = DateRange::new(date(2023, 4, 17), date(2023, 6, 30));
        let result = aggregate_period(&accrual, &[]);
        assert_eq!(result.accrual_days, 75);
        assert_eq!(result.salary_plus_extras_avg, Decimal::ZERO);
        assert_eq!(result.aux_avg, Decimal::ZERO);
        assert_eq!(result.base_only_avg, Decimal::ZERO);
        assert_eq!(result.contributing_periods, 0);
    }

    #[test]
    fn test_degenerate_stub_is_ignored() {
        let accrual = DateRange::new(date(2023, 5, 1), date(2023, 5, 30));
        let records = vec![
            stub(date(2023, 5, 1), date(2023, 5, 30), 2_100_000, 0, 0),
            stub(date(2023, 5, 20), date(2023, 5, 10), 9_999_999, 0, 0),
        ];
        let result = aggregate_period(&accrual, &records);
        assert_eq!(result.contributing_periods, 1);
        assert_eq!(result.base_only_avg, Decimal::from(2_100_000));
    }

    #[test]
    fn test_aggregation_is_repeatable() {
        let accrual = DateRange::new(date(2023, 4, 17), date(2023, 6, 30));
        let records = first_semester_stubs();
        let first = aggregate_period(&accrual, &records);
        let second = aggregate_period(&accrual, &records);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_aggregation_is_pure(
            start in 0i64..300,
            len in 0i64..200,
            salary in 0u64..5_000_000,
        ) {
            let base = date(2023, 1, 1);
            let accrual = DateRange::new(
                base + chrono::Duration::days(start),
                base + chrono::Duration::days(start + len),
            );
            let records = vec![
                stub(base, base + chrono::Duration::days(14), salary, 70_000, 1_000),
                stub(base + chrono::Duration::days(15), base + chrono::Duration::days(180), salary, 70_000, 0),
            ];
            prop_assert_eq!(
                aggregate_period(&accrual, &records),
                aggregate_period(&accrual, &records)
            );
        }
    }
}
