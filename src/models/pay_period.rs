//! Pay-period records loaded from payroll stubs.
//!
//! This module contains the [`PayPeriodRecord`] and [`BonusFields`] types that
//! carry one pay stub's earnings into the apportionment calculations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Largest amount, in whole pesos, a single pay-stub field may carry.
///
/// Ingestion and the HTTP API reject anything above it, which keeps every
/// per-record sum far inside `u64`.
pub const MAX_AMOUNT: u64 = 1_000_000_000_000;

/// Salary surcharges paid on top of the base salary in a pay period.
///
/// All amounts are whole pesos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusFields {
    /// Sunday work surcharge.
    #[serde(default)]
    pub sunday: u64,
    /// Public holiday work surcharge.
    #[serde(default)]
    pub holiday: u64,
    /// Night-shift surcharge.
    #[serde(default)]
    pub night: u64,
    /// Daytime overtime.
    #[serde(default)]
    pub day_overtime: u64,
    /// Night-time overtime.
    #[serde(default)]
    pub night_overtime: u64,
}

impl BonusFields {
    /// Sum of every surcharge, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [self.holiday, self.night, self.day_overtime, self.night_overtime]
            .into_iter()
            .fold(self.sunday, u64::saturating_add)
    }

    /// The first field above [`MAX_AMOUNT`], by name.
    pub fn oversized_field(&self) -> Option<&'static str> {
        [
            ("sunday", self.sunday),
            ("holiday", self.holiday),
            ("night", self.night),
            ("day_overtime", self.day_overtime),
            ("night_overtime", self.night_overtime),
        ]
        .into_iter()
        .find(|(_, amount)| *amount > MAX_AMOUNT)
        .map(|(name, _)| name)
    }
}

/// One payroll pay period and what was paid for it.
///
/// Records are immutable once loaded; every calculation reads them through a
/// shared slice.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::{BonusFields, PayPeriodRecord};
/// use chrono::NaiveDate;
///
/// let record = PayPeriodRecord {
///     period_start: NaiveDate::from_ymd_opt(2023, 4, 16).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2023, 4, 30).unwrap(),
///     base_salary: 1_050_000,
///     aux_transport: 70_303,
///     bonuses: BonusFields { sunday: 40_000, night: 12_500, ..Default::default() },
/// };
///
/// assert_eq!(record.days(), 15);
/// assert_eq!(record.total_extras(), 52_500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodRecord {
    /// First day covered by the pay stub (inclusive).
    pub period_start: NaiveDate,
    /// Last day covered by the pay stub (inclusive).
    pub period_end: NaiveDate,
    /// Base salary paid for the period.
    #[serde(default)]
    pub base_salary: u64,
    /// Transport subsidy (auxilio de transporte) paid for the period.
    #[serde(default)]
    pub aux_transport: u64,
    /// Surcharges paid for the period.
    #[serde(default)]
    pub bonuses: BonusFields,
}

impl PayPeriodRecord {
    /// The pay period as a date range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.period_start, self.period_end)
    }

    /// Inclusive length of the pay period in days.
    pub fn days(&self) -> i64 {
        self.range().days()
    }

    /// Total surcharges paid in the period.
    pub fn total_extras(&self) -> u64 {
        self.bonuses.total()
    }

    /// Salary in the period: base plus surcharges, saturating at `u64::MAX`.
    pub fn total_salary(&self) -> u64 {
        self.base_salary.saturating_add(self.total_extras())
    }

    /// The first amount above [`MAX_AMOUNT`], by field name.
    pub fn oversized_field(&self) -> Option<&'static str> {
        if self.base_salary > MAX_AMOUNT {
            Some("base_salary")
        } else if self.aux_transport > MAX_AMOUNT {
            Some("aux_transport")
        } else {
            self.bonuses.oversized_field()
        }
    }
}
