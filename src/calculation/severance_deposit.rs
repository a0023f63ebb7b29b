//! Sanction for failing to deposit severance into a fund.
//!
//! Ley 50 de 1990 Art. 99 requires each year's severance to be deposited in
//! the employee's fund by mid-February of the following year. Every day past
//! that deadline costs one day of the salary in force at year end.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AuditStep, AuditWarning, DateRange, PayPeriodRecord, ValueSource};

use super::day_count::{COMMERCIAL_MONTH_DAYS, delay_days};

/// Statute reference for the non-deposit sanction.
pub const NON_DEPOSIT_LEGAL_REF: &str = "Ley 50 de 1990 Art. 99";

/// Warning code raised when December pay stubs are missing.
pub const REFERENCE_SALARY_FALLBACK: &str = "REFERENCE_SALARY_FALLBACK";

/// The result of a non-deposit sanction calculation.
#[derive(Debug, Clone)]
pub struct NonDepositSanctionResult {
    /// Last lawful deposit day.
    pub deadline: NaiveDate,
    /// Days past the deadline as of the evaluation date.
    pub delay_days: i64,
    /// Monthly salary the sanction is based on.
    pub monthly_salary: Decimal,
    /// Where `monthly_salary` came from.
    pub salary_source: ValueSource,
    /// Monthly salary / 30.
    pub daily_rate: Decimal,
    /// Unrounded sanction in pesos.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when the reference salary fallback was used.
    pub warning: Option<AuditWarning>,
}

/// Sums the base salary of every pay period starting in December of `year`.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::december_base_salary;
/// use liquidacion_engine::models::{BonusFields, PayPeriodRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let stubs = vec![
///     PayPeriodRecord {
///         period_start: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
///         period_end: NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
///         base_salary: 1_050_000,
///         aux_transport: 70_303,
///         bonuses: BonusFields::default(),
///     },
///     PayPeriodRecord {
///         period_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         period_end: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///         base_salary: 1_050_000,
///         aux_transport: 81_000,
///         bonuses: BonusFields::default(),
///     },
/// ];
/// assert_eq!(december_base_salary(&stubs, 2023), Decimal::from(1_050_000));
/// ```
pub fn december_base_salary(records: &[PayPeriodRecord], year: i32) -> Decimal {
    let december = match (
        NaiveDate::from_ymd_opt(year, 12, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) {
        (Some(start), Some(end)) => DateRange::new(start, end),
        _ => return Decimal::ZERO,
    };

    records
        .iter()
        .filter(|record| december.contains_date(record.period_start))
        .map(|record| Decimal::from(record.base_salary))
        .sum()
}

/// Calculates the sanction for undeposited severance.
///
/// The daily salary is the base salary of the December before `deadline`
/// divided by 30. When the pay stubs carry no December base salary the
/// configured `reference_monthly_salary` is used instead; the result is then
/// tagged [`ValueSource::FallbackConstant`] and carries a warning.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::calculate_non_deposit_sanction;
/// use liquidacion_engine::models::ValueSource;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_non_deposit_sanction(
///     NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 24).unwrap(),
///     &[],
///     Decimal::from(2_100_000),
///     1,
/// );
/// assert_eq!(result.delay_days, 10);
/// assert_eq!(result.value, Decimal::from(700_000));
/// assert_eq!(result.salary_source, ValueSource::FallbackConstant);
/// assert!(result.warning.is_some());
/// ```
pub fn calculate_non_deposit_sanction(
    deadline: NaiveDate,
    evaluation_date: NaiveDate,
    records: &[PayPeriodRecord],
    reference_monthly_salary: Decimal,
    step_number: u32,
) -> NonDepositSanctionResult {
    let accrual_year = deadline.year() - 1;
    let december_salary = december_base_salary(records, accrual_year);

    let (monthly_salary, salary_source, warning) = if december_salary > Decimal::ZERO {
        (december_salary, ValueSource::Actual, None)
    } else {
        warn!(
            accrual_year,
            reference_monthly_salary = %reference_monthly_salary,
            "No December base salary in pay stubs, using reference monthly salary"
        );
        let warning = AuditWarning::new(
            REFERENCE_SALARY_FALLBACK,
            format!(
                "No December {} base salary found in pay stubs; sanction uses reference monthly salary ${}",
                accrual_year, reference_monthly_salary
            ),
            "medium",
        );
        (
            reference_monthly_salary,
            ValueSource::FallbackConstant,
            Some(warning),
        )
    };

    let delay = delay_days(deadline, evaluation_date);
    let month_days = Decimal::from(COMMERCIAL_MONTH_DAYS);
    let daily_rate = monthly_salary / month_days;
    let value = monthly_salary * Decimal::from(delay) / month_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_non_deposit".to_string(),
        rule_name: "Severance Non-Deposit Sanction".to_string(),
        legal_ref: NON_DEPOSIT_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "deadline": deadline.to_string(),
            "evaluation_date": evaluation_date.to_string(),
            "accrual_year": accrual_year,
            "december_base_salary": december_salary.to_string(),
            "reference_monthly_salary": reference_monthly_salary.to_string()
        }),
        output: serde_json::json!({
            "monthly_salary": monthly_salary.to_string(),
            "salary_source": salary_source,
            "delay_days": delay,
            "daily_rate": daily_rate.to_string(),
            "value": value.to_string()
        }),
        reasoning: format!(
            "{} days past deposit deadline {} x ${} per day ({} salary) = ${}",
            delay,
            deadline,
            daily_rate.round_dp(2),
            salary_source,
            value.round_dp(2)
        ),
    };

    NonDepositSanctionResult {
        deadline,
        delay_days: delay,
        monthly_salary,
        salary_source,
        daily_rate,
        value,
        audit_step,
        warning,
    }
}
