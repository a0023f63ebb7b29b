//! Service bonus (prima de servicios) calculation.
//!
//! Article 306 of the Código Sustantivo del Trabajo grants one month of salary
//! per year of service, paid in two semesters and prorated by days worked.

use rust_decimal::Decimal;

use crate::models::{ApportionmentResult, AuditStep};

use super::day_count::COMMERCIAL_YEAR_DAYS;

/// Statute reference for the service bonus.
pub const SERVICE_BONUS_LEGAL_REF: &str = "CST Art. 306";

/// The result of a service bonus calculation.
#[derive(Debug, Clone)]
pub struct ServiceBonusResult {
    /// Unrounded bonus in pesos.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the service bonus for one accrual period.
///
/// `(salary_plus_extras_avg + aux_avg) * accrual_days / 360`
///
/// The transport subsidy is part of the base for this benefit.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::calculate_service_bonus;
/// use liquidacion_engine::models::ApportionmentResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let averages = ApportionmentResult {
///     salary_plus_extras_avg: Decimal::from(2_100_000),
///     aux_avg: Decimal::from(140_606),
///     base_only_avg: Decimal::from(2_100_000),
///     accrual_days: 75,
///     contributing_periods: 5,
/// };
///
/// let result = calculate_service_bonus(&averages, 1);
/// assert_eq!(result.value.round_dp(2), Decimal::from_str("466792.92").unwrap());
/// ```
pub fn calculate_service_bonus(
    averages: &ApportionmentResult,
    step_number: u32,
) -> ServiceBonusResult {
    let monthly_base = averages.salary_plus_extras_avg + averages.aux_avg;
    let value =
        monthly_base * Decimal::from(averages.accrual_days) / Decimal::from(COMMERCIAL_YEAR_DAYS);

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_bonus".to_string(),
        rule_name: "Service Bonus".to_string(),
        legal_ref: SERVICE_BONUS_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "salary_plus_extras_avg": averages.salary_plus_extras_avg.to_string(),
            "aux_avg": averages.aux_avg.to_string(),
            "accrual_days": averages.accrual_days
        }),
        output: serde_json::json!({
            "value": value.to_string()
        }),
        reasoning: format!(
            "(${} + ${}) x {} days / {} = ${}",
            averages.salary_plus_extras_avg.round_dp(2),
            averages.aux_avg.round_dp(2),
            averages.accrual_days,
            COMMERCIAL_YEAR_DAYS,
            value.round_dp(2)
        ),
    };

    ServiceBonusResult { value, audit_step }
}
