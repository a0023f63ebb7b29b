//! Monthly earnings summary.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{DateRange, MonthlySummaryRow, PayPeriodRecord};

use super::round_pesos;

/// Pension contribution rate on the contribution base, 12%.
pub fn pension_contribution_rate() -> Decimal {
    Decimal::new(12, 2)
}

#[derive(Debug, Clone, Copy, Default)]
struct MonthTotals {
    base_salary: Decimal,
    extras: Decimal,
    aux_transport: Decimal,
}

impl MonthTotals {
    fn add(mut self, record: &PayPeriodRecord) -> Self {
        self.base_salary += Decimal::from(record.base_salary);
        self.extras += Decimal::from(record.total_extras());
        self.aux_transport += Decimal::from(record.aux_transport);
        self
    }
}

/// Summarizes pay stubs per calendar month within the contract span.
///
/// Stubs are grouped by the month their period starts in, not apportioned.
/// Months of the contract with no stubs are omitted. Only the pension
/// contribution is rounded.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::{BonusFields, DateRange, PayPeriodRecord};
/// use liquidacion_engine::report::monthly_summary;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 17).unwrap(),
/// );
/// let stubs = vec![PayPeriodRecord {
///     period_start: NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2024, 2, 17).unwrap(),
///     base_salary: 140_000,
///     aux_transport: 10_800,
///     bonuses: BonusFields::default(),
/// }];
///
/// let rows = monthly_summary(&contract, &stubs);
/// assert_eq!(rows[0].month, "2024-02");
/// assert_eq!(rows[0].contribution_base, Decimal::from(150_800));
/// assert_eq!(rows[0].pension_contribution, Decimal::from(18_096));
/// ```
pub fn monthly_summary(contract: &DateRange, records: &[PayPeriodRecord]) -> Vec<MonthlySummaryRow> {
    if contract.is_degenerate() {
        return Vec::new();
    }

    let first = (contract.start.year(), contract.start.month());
    let last = (contract.end.year(), contract.end.month());

    let months = records
        .iter()
        .map(|record| {
            let key = (record.period_start.year(), record.period_start.month());
            (key, record)
        })
        .filter(|(key, _)| *key >= first && *key <= last)
        .fold(
            BTreeMap::<(i32, u32), MonthTotals>::new(),
            |mut months, (key, record)| {
                let totals = months.entry(key).or_default();
                *totals = totals.add(record);
                months
            },
        );

    months
        .into_iter()
        .map(|((year, month), totals)| {
            let MonthTotals {
                base_salary,
                extras,
                aux_transport,
            } = totals;
            let total_salary = base_salary + extras;
            let contribution_base = total_salary + aux_transport;

            MonthlySummaryRow {
                month: format!("{:04}-{:02}", year, month),
                base_salary,
                extras,
                total_salary,
                aux_transport,
                contribution_base,
                pension_contribution: round_pesos(contribution_base * pension_contribution_rate()),
            }
        })
        .collect()
}
