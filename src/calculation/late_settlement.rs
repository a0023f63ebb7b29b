//! Late-settlement penalty (indemnización moratoria).
//!
//! When the final settlement is not paid on termination, CST Art. 65 makes the
//! employer owe one day of salary for every day of delay.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::day_count::{COMMERCIAL_MONTH_DAYS, delay_days};

/// Statute reference for the late-settlement penalty.
pub const LATE_SETTLEMENT_LEGAL_REF: &str = "CST Art. 65";

/// Days after termination before the penalty starts accruing.
pub const DEFAULT_GRACE_PERIOD_DAYS: u32 = 15;

/// The result of a late-settlement penalty calculation.
#[derive(Debug, Clone)]
pub struct LateSettlementResult {
    /// Last day the settlement could be paid without penalty.
    pub deadline: NaiveDate,
    /// Days past the deadline as of the evaluation date.
    pub delay_days: i64,
    /// Reference monthly salary / 30.
    pub daily_rate: Decimal,
    /// Unrounded penalty in pesos.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the late-settlement penalty.
///
/// The deadline is `contract_end + grace_period_days`. Delay is counted from
/// the deadline to `evaluation_date` and clamped at zero, so an evaluation
/// date before the deadline yields no penalty.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::calculate_late_settlement;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_late_settlement(
///     NaiveDate::from_ymd_opt(2024, 2, 17).unwrap(),
///     15,
///     NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
///     Decimal::from(2_100_000),
///     1,
/// );
/// assert_eq!(result.deadline, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
/// assert_eq!(result.delay_days, 432);
/// assert_eq!(result.value, Decimal::from(30_240_000));
/// ```
pub fn calculate_late_settlement(
    contract_end: NaiveDate,
    grace_period_days: u32,
    evaluation_date: NaiveDate,
    reference_monthly_salary: Decimal,
    step_number: u32,
) -> LateSettlementResult {
    let deadline = contract_end
        .checked_add_days(Days::new(u64::from(grace_period_days)))
        .unwrap_or(NaiveDate::MAX);
    let delay = delay_days(deadline, evaluation_date);

    let month_days = Decimal::from(COMMERCIAL_MONTH_DAYS);
    let daily_rate = reference_monthly_salary / month_days;
    let value = reference_monthly_salary * Decimal::from(delay) / month_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "late_settlement".to_string(),
        rule_name: "Late Settlement Penalty".to_string(),
        legal_ref: LATE_SETTLEMENT_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "contract_end": contract_end.to_string(),
            "grace_period_days": grace_period_days,
            "evaluation_date": evaluation_date.to_string(),
            "reference_monthly_salary": reference_monthly_salary.to_string()
        }),
        output: serde_json::json!({
            "deadline": deadline.to_string(),
            "delay_days": delay,
            "daily_rate": daily_rate.to_string(),
            "value": value.to_string()
        }),
        reasoning: if delay == 0 {
            format!(
                "Evaluated on {} before settlement deadline {}; no penalty",
                evaluation_date, deadline
            )
        } else {
            format!(
                "{} days late since {} x ${} per day = ${}",
                delay,
                deadline,
                daily_rate.round_dp(2),
                value.round_dp(2)
            )
        },
    };

    LateSettlementResult {
        deadline,
        delay_days: delay,
        daily_rate,
        value,
        audit_step,
    }
}
