//! Benefit liquidation across every configured accrual period.
//!
//! Each accrual period is aggregated against the pay stubs once, then fed to
//! the formula for its benefit kind. Periods are independent of each other.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CaseConfig;
use crate::models::{
    AccrualPeriod, ApportionmentResult, AuditStep, BenefitKind, BenefitLineItem, LineItemKind,
    PayPeriodRecord, PaymentStatus,
};

use super::aggregation::aggregate_period;
use super::service_bonus::calculate_service_bonus;
use super::severance::{calculate_severance, calculate_severance_interest};
use super::vacation::calculate_vacation;

/// Benefit line items plus the audit steps that produced them.
#[derive(Debug, Clone, Default)]
pub struct BenefitEvaluation {
    /// Line items in configuration order; severance periods yield two.
    pub line_items: Vec<BenefitLineItem>,
    /// One aggregation step and one step per formula, numbered sequentially.
    pub audit_steps: Vec<AuditStep>,
}

impl BenefitEvaluation {
    fn next_step(&self, first_step: u32) -> u32 {
        first_step + self.audit_steps.len() as u32
    }

    fn push(
        &mut self,
        period: &AccrualPeriod,
        concept: String,
        kind: LineItemKind,
        averages: &ApportionmentResult,
        value: Decimal,
        status: PaymentStatus,
    ) {
        self.line_items.push(BenefitLineItem {
            concept,
            kind,
            period: period.range,
            accrual_days: averages.accrual_days,
            value,
            status,
        });
    }
}

/// Records the averages an accrual period was aggregated to.
fn aggregation_step(
    period: &AccrualPeriod,
    averages: &ApportionmentResult,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "period_aggregation".to_string(),
        rule_name: "Monthly-Equivalent Averages".to_string(),
        legal_ref: "CST Art. 253".to_string(),
        input: serde_json::json!({
            "concept": period.concept,
            "start": period.range.start.to_string(),
            "end": period.range.end.to_string()
        }),
        output: serde_json::json!({
            "accrual_days": averages.accrual_days,
            "contributing_periods": averages.contributing_periods,
            "salary_plus_extras_avg": averages.salary_plus_extras_avg.to_string(),
            "aux_avg": averages.aux_avg.to_string(),
            "base_only_avg": averages.base_only_avg.to_string()
        }),
        reasoning: format!(
            "{} pay periods apportioned over {} days ({}), normalized to a 30-day month",
            averages.contributing_periods, averages.accrual_days, period.range
        ),
    }
}

/// Evaluates every accrual period in `config` against the pay stubs.
///
/// Steps are numbered from `first_step`. Payment status is copied from the
/// configuration; severance interest uses the period's interest status.
///
/// # Example
///
/// ```no_run
/// use liquidacion_engine::calculation::evaluate_benefits;
/// use liquidacion_engine::config::ConfigLoader;
/// use liquidacion_engine::ingest::PaystubLoader;
///
/// let config = ConfigLoader::load("./config/colombia_2023")?;
/// let outcome = PaystubLoader::load("./data/paystubs-summary.csv")?;
/// let benefits = evaluate_benefits(&config, &outcome.records, 1);
/// for item in &benefits.line_items {
///     println!("{}: {}", item.concept, item.value.round());
/// }
/// # Ok::<(), liquidacion_engine::error::EngineError>(())
/// ```
pub fn evaluate_benefits(
    config: &CaseConfig,
    records: &[PayPeriodRecord],
    first_step: u32,
) -> BenefitEvaluation {
    let mut evaluation = BenefitEvaluation::default();

    for period in config.accrual_periods() {
        let averages = aggregate_period(&period.range, records);
        let step = aggregation_step(period, &averages, evaluation.next_step(first_step));
        evaluation.audit_steps.push(step);

        match period.kind {
            BenefitKind::ServiceBonus => {
                let bonus =
                    calculate_service_bonus(&averages, evaluation.next_step(first_step));
                evaluation.audit_steps.push(bonus.audit_step);
                evaluation.push(
                    period,
                    period.concept.clone(),
                    LineItemKind::ServiceBonus,
                    &averages,
                    bonus.value,
                    period.status,
                );
            }
            BenefitKind::Severance => {
                let severance = calculate_severance(&averages, evaluation.next_step(first_step));
                evaluation.audit_steps.push(severance.audit_step);
                let interest = calculate_severance_interest(
                    severance.value,
                    averages.accrual_days,
                    evaluation.next_step(first_step),
                );
                evaluation.audit_steps.push(interest.audit_step);

                evaluation.push(
                    period,
                    period.concept.clone(),
                    LineItemKind::Severance,
                    &averages,
                    severance.value,
                    period.status,
                );
                evaluation.push(
                    period,
                    format!("Intereses {}", period.concept),
                    LineItemKind::SeveranceInterest,
                    &averages,
                    interest.value,
                    period.effective_interest_status(),
                );
            }
            BenefitKind::Vacation => {
                let vacation = calculate_vacation(&averages, evaluation.next_step(first_step));
                evaluation.audit_steps.push(vacation.audit_step);
                evaluation.push(
                    period,
                    period.concept.clone(),
                    LineItemKind::Vacation,
                    &averages,
                    vacation.value,
                    period.status,
                );
            }
        }

        debug!(
            concept = %period.concept,
            kind = ?period.kind,
            accrual_days = averages.accrual_days,
            "Evaluated accrual period"
        );
    }

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BenefitsConfig, ContractConfig, PenaltiesConfig};
    use crate::models::{BonusFields, DateRange};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(
        concept: &str,
        kind: BenefitKind,
        start: NaiveDate,
        end: NaiveDate,
        status: PaymentStatus,
        interest_status: Option<PaymentStatus>,
    ) -> AccrualPeriod {
        AccrualPeriod {
            concept: concept.to_string(),
            kind,
            range: DateRange::new(start, end),
            status,
            interest_status,
        }
    }

    fn config(periods: Vec<AccrualPeriod>) -> CaseConfig {
        CaseConfig::new(
            ContractConfig {
                employee_name: None,
                contract_start: date(2024, 1, 1),
                contract_end: date(2024, 2, 17),
                evaluation_date: date(2025, 5, 9),
                reference_monthly_salary: Decimal::from(2_100_000),
            },
            BenefitsConfig {
                accrual_periods: periods,
            },
            PenaltiesConfig::default(),
        )
        .unwrap()
    }

    /// January and February 2024 stubs at 2,100,000 a month.
    fn stubs_2024() -> Vec<PayPeriodRecord> {
        let stub = |start, end, base, aux| PayPeriodRecord {
            period_start: start,
            period_end: end,
            base_salary: base,
            aux_transport: aux,
            bonuses: BonusFields::default(),
        };
        vec![
            stub(date(2024, 1, 1), date(2024, 1, 15), 1_050_000, 81_000),
            stub(date(2024, 1, 16), date(2024, 1, 31), 1_050_000, 81_000),
            stub(date(2024, 2, 1), date(2024, 2, 15), 1_050_000, 81_000),
            stub(date(2024, 2, 16), date(2024, 2, 17), 140_000, 10_800),
        ]
    }

    #[test]
    fn test_severance_yields_two_items() {
        let cfg = config(vec![period(
            "Cesantías 2024",
            BenefitKind::Severance,
            date(2024, 1, 1),
            date(2024, 2, 17),
            PaymentStatus::UnpaidUndeposited,
            Some(PaymentStatus::Unpaid),
        )]);
        let evaluation = evaluate_benefits(&cfg, &stubs_2024(), 1);

        assert_eq!(evaluation.line_items.len(), 2);
        let severance = &evaluation.line_items[0];
        let interest = &evaluation.line_items[1];
        assert_eq!(severance.kind, LineItemKind::Severance);
        assert_eq!(severance.status, PaymentStatus::UnpaidUndeposited);
        assert_eq!(severance.accrual_days, 48);
        assert_eq!(interest.kind, LineItemKind::SeveranceInterest);
        assert_eq!(interest.status, PaymentStatus::Unpaid);
        assert_eq!(interest.concept, "Intereses Cesantías 2024");
    }

    #[test]
    fn test_values_for_2024_partial_year() {
        let cfg = config(vec![
            period(
                "Prima 2024",
                BenefitKind::ServiceBonus,
                date(2024, 1, 1),
                date(2024, 2, 17),
                PaymentStatus::Unpaid,
                None,
            ),
            period(
                "Cesantías 2024",
                BenefitKind::Severance,
                date(2024, 1, 1),
                date(2024, 2, 17),
                PaymentStatus::Unpaid,
                None,
            ),
            period(
                "Vacaciones 2024",
                BenefitKind::Vacation,
                date(2024, 1, 1),
                date(2024, 2, 17),
                PaymentStatus::Unpaid,
                None,
            ),
        ]);
        let evaluation = evaluate_benefits(&cfg, &stubs_2024(), 1);
        let values: Vec<Decimal> = evaluation
            .line_items
            .iter()
            .map(|i| i.value.round_dp(2))
            .collect();

        // 48 days: base sum 3,290,000 -> 2,056,250 avg; aux 253,800 -> 158,625 avg
        assert_eq!(values[0], Decimal::new(29531667, 2));
        assert_eq!(values[1], Decimal::new(29531667, 2));
        assert_eq!(values[2], Decimal::new(472507, 2));
        assert_eq!(values[3], Decimal::new(13708333, 2));
    }

    #[test]
    fn test_steps_are_sequential() {
        let cfg = config(vec![
            period(
                "Cesantías 2024",
                BenefitKind::Severance,
                date(2024, 1, 1),
                date(2024, 2, 17),
                PaymentStatus::Unpaid,
                None,
            ),
            period(
                "Vacaciones 2024",
                BenefitKind::Vacation,
                date(2024, 1, 1),
                date(2024, 2, 17),
                PaymentStatus::Unpaid,
                None,
            ),
        ]);
        let evaluation = evaluate_benefits(&cfg, &stubs_2024(), 5);
        let numbers: Vec<u32> = evaluation.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![5, 6, 7, 8, 9]);

        let rules: Vec<&str> = evaluation
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rules,
            vec![
                "period_aggregation",
                "severance",
                "severance_interest",
                "period_aggregation",
                "vacation"
            ]
        );
    }

    #[test]
    fn test_no_pay_stubs_yields_zero_values() {
        let cfg = config(vec![period(
            "Prima 2024",
            BenefitKind::ServiceBonus,
            date(2024, 1, 1),
            date(2024, 2, 17),
            PaymentStatus::Unpaid,
            None,
        )]);
        let evaluation = evaluate_benefits(&cfg, &[], 1);
        assert_eq!(evaluation.line_items[0].value, Decimal::ZERO);
        assert_eq!(evaluation.line_items[0].accrual_days, 48);
    }

    #[test]
    fn test_degenerate_period_is_zero() {
        let cfg = config(vec![period(
            "Inverted",
            BenefitKind::Vacation,
            date(2024, 2, 17),
            date(2024, 1, 1),
            PaymentStatus::Unpaid,
            None,
        )]);
        let evaluation = evaluate_benefits(&cfg, &stubs_2024(), 1);
        assert_eq!(evaluation.line_items[0].value, Decimal::ZERO);
        assert_eq!(evaluation.line_items[0].accrual_days, 0);
    }
}
