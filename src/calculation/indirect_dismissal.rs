//! Indemnity for indirect dismissal (despido indirecto).
//!
//! When the employee terminates because of the employer's breach, the
//! termination is treated as unjustified dismissal (CST Art. 64).

use rust_decimal::Decimal;

use crate::models::{AuditStep, DateRange};

use super::day_count::{COMMERCIAL_YEAR_DAYS, elapsed_days};

/// Statute reference for the dismissal indemnity.
pub const INDIRECT_DISMISSAL_LEGAL_REF: &str = "CST Art. 64";

/// The result of an indirect-dismissal indemnity calculation.
#[derive(Debug, Clone)]
pub struct IndirectDismissalResult {
    /// Calendar days between contract start and end, start excluded.
    pub service_days: i64,
    /// Reference monthly salary / 360.
    pub daily_rate: Decimal,
    /// Unrounded indemnity in pesos.
    pub value: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the indirect-dismissal indemnity.
///
/// `reference_monthly_salary / 360 * service_days`, where service days are the
/// plain date difference of the contract span (no inclusive +1).
///
/// # Example
///
/// ```
/// use liquidacion_engine::calculation::calculate_indirect_dismissal;
/// use liquidacion_engine::models::DateRange;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 4, 17).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 17).unwrap(),
/// );
/// let result = calculate_indirect_dismissal(&contract, Decimal::from(2_100_000), 1);
/// assert_eq!(result.service_days, 306);
/// assert_eq!(result.value, Decimal::from(1_785_000));
/// ```
pub fn calculate_indirect_dismissal(
    contract: &DateRange,
    reference_monthly_salary: Decimal,
    step_number: u32,
) -> IndirectDismissalResult {
    let service_days = elapsed_days(contract.start, contract.end);
    let year_days = Decimal::from(COMMERCIAL_YEAR_DAYS);
    let daily_rate = reference_monthly_salary / year_days;
    let value = reference_monthly_salary * Decimal::from(service_days) / year_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "indirect_dismissal".to_string(),
        rule_name: "Indirect Dismissal Indemnity".to_string(),
        legal_ref: INDIRECT_DISMISSAL_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "contract_start": contract.start.to_string(),
            "contract_end": contract.end.to_string(),
            "reference_monthly_salary": reference_monthly_salary.to_string()
        }),
        output: serde_json::json!({
            "service_days": service_days,
            "value": value.to_string()
        }),
        reasoning: format!(
            "${} / {} x {} service days = ${}",
            reference_monthly_salary,
            COMMERCIAL_YEAR_DAYS,
            service_days,
            value.round_dp(2)
        ),
    };

    IndirectDismissalResult {
        service_days,
        daily_rate,
        value,
        audit_step,
    }
}
