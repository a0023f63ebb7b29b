//! Severance (cesantías) and severance interest calculations.
//!
//! Severance accrues one month of salary per year of service (CST Art. 249).
//! The employer also owes 12% annual interest on the accrued balance
//! (Ley 52 de 1975), prorated by the days the balance accrued.

use rust_decimal::Decimal;

use crate::models::{ApportionmentResult, AuditStep};

use super::day_count::COMMERCIAL_YEAR_DAYS;

/// Statute reference for severance.
pub const SEVERANCE_LEGAL_REF: &str = "CST Art. 249";

/// Statute reference for severance interest.
pub const SEVERANCE_INTEREST_LEGAL_REF: &str = "Ley 52 de 1975";

/// Annual interest rate on severance, 12%.
pub fn severance_interest_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// The result of a severance calculation.
#[derive(Debug, Clone)]
pub struct SeveranceResult {
    /// Unrounded severance in pesos.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of a severance interest calculation.
#[derive(Debug, Clone)]
pub struct SeveranceInterestResult {
    /// Unrounded interest in pesos.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates severance for one accrual period.
///
/// Same base as the service bonus:
/// `(salary_plus_extras_avg + aux_avg) * accrual_days / 360`.
pub fn calculate_severance(averages: &ApportionmentResult, step_number: u32) -> SeveranceResult {
    let monthly_base = averages.salary_plus_extras_avg + averages.aux_avg;
    let value =
        monthly_base * Decimal::from(averages.accrual_days) / Decimal::from(COMMERCIAL_YEAR_DAYS);

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance".to_string(),
        rule_name: "Severance".to_string(),
        legal_ref: SEVERANCE_LEGAL_REF.to_string(),
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

    SeveranceResult { value, audit_step }
}

/// Calculates the interest owed on a severance balance.
///
/// `severance * accrual_days * 0.12 / 360`
///
/// Takes the unrounded severance value so rounding never compounds.
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::calculate_severance_interest;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let severance = Decimal::from_str("1611991.54").unwrap();
/// let result = calculate_severance_interest(severance, 259, 1);
/// assert_eq!(result.value.round_dp(2), Decimal::from_str("139168.60").unwrap());
/// ```
pub fn calculate_severance_interest(
    severance: Decimal,
    accrual_days: i64,
    step_number: u32,
) -> SeveranceInterestResult {
    let rate = severance_interest_rate();
    let value =
        severance * Decimal::from(accrual_days) * rate / Decimal::from(COMMERCIAL_YEAR_DAYS);

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_interest".to_string(),
        rule_name: "Severance Interest".to_string(),
        legal_ref: SEVERANCE_INTEREST_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "severance": severance.to_string(),
            "accrual_days": accrual_days,
            "annual_rate": rate.to_string()
        }),
        output: serde_json::json!({
            "value": value.to_string()
        }),
        reasoning: format!(
            "${} x {} days x {} / {} = ${}",
            severance.round_dp(2),
            accrual_days,
            rate,
            COMMERCIAL_YEAR_DAYS,
            value.round_dp(2)
        ),
    };

    SeveranceInterestResult { value, audit_step }
}
