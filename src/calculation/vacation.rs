//! Vacation pay calculation.
//!
//! Fifteen working days of paid vacation per year of service (CST Art. 186),
//! valued on base salary alone.

use rust_decimal::Decimal;

use crate::models::{ApportionmentResult, AuditStep};

/// Statute reference for vacation pay.
pub const VACATION_LEGAL_REF: &str = "CST Art. 186";

/// Divisor for vacation pay: half a month per 360-day year.
pub const VACATION_DIVISOR: i64 = 720;

/// The result of a vacation pay calculation.
#[derive(Debug, Clone)]
pub struct VacationResult {
    /// Unrounded vacation pay in pesos.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates vacation pay owed for an accrual period.
///
/// `base_only_avg * accrual_days / 720`
///
/// Surcharges and the transport subsidy are excluded from the base.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::calculate_vacation;
/// use liquidacion_engine::models::ApportionmentResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let averages = ApportionmentResult {
///     salary_plus_extras_avg: Decimal::from(2_250_000),
///     aux_avg: Decimal::from(150_000),
///     base_only_avg: Decimal::from(2_100_000),
///     accrual_days: 307,
///     contributing_periods: 21,
/// };
///
/// let result = calculate_vacation(&averages, 1);
/// assert_eq!(result.value.round_dp(2), Decimal::from_str("895416.67").unwrap());
/// ```
pub fn calculate_vacation(averages: &ApportionmentResult, step_number: u32) -> VacationResult {
    let value = averages.base_only_avg * Decimal::from(averages.accrual_days)
        / Decimal::from(VACATION_DIVISOR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation".to_string(),
        rule_name: "Vacation Pay".to_string(),
        legal_ref: VACATION_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "base_only_avg": averages.base_only_avg.to_string(),
            "accrual_days": averages.accrual_days
        }),
        output: serde_json::json!({
            "value": value.to_string()
        }),
        reasoning: format!(
            "${} x {} days / {} = ${}",
            averages.base_only_avg.round_dp(2),
            averages.accrual_days,
            VACATION_DIVISOR,
            value.round_dp(2)
        ),
    };

    VacationResult { value, audit_step }
}
