//! Indemnity evaluation for a case.

use tracing::{debug, info};

use crate::config::CaseConfig;
use crate::models::{
    AuditStep, AuditWarning, IndemnityKind, IndemnityLineItem, PayPeriodRecord, ValueSource,
};

use super::indirect_dismissal::calculate_indirect_dismissal;
use super::late_settlement::calculate_late_settlement;
use super::severance_deposit::calculate_non_deposit_sanction;

/// Label for the late-settlement penalty line.
pub const LATE_SETTLEMENT_CONCEPT: &str = "Indemnización moratoria (Art. 65 CST)";

/// Label for the indirect-dismissal line.
pub const INDIRECT_DISMISSAL_CONCEPT: &str = "Indemnización por despido indirecto (Art. 64 CST)";

/// Indemnity line items plus the audit steps and warnings that produced them.
#[derive(Debug, Clone, Default)]
pub struct IndemnityEvaluation {
    /// Late settlement first, then one sanction per deposit deadline, then dismissal.
    pub line_items: Vec<IndemnityLineItem>,
    /// One step per line item, numbered sequentially.
    pub audit_steps: Vec<AuditStep>,
    /// Fallbacks taken while evaluating.
    pub warnings: Vec<AuditWarning>,
}

impl IndemnityEvaluation {
    fn next_step(&self, first_step: u32) -> u32 {
        first_step + self.audit_steps.len() as u32
    }
}

/// Evaluates every penalty the case configures, as of its evaluation date.
///
/// The late-settlement penalty is always evaluated. Deposit sanctions need the
/// pay stubs for their December salary lookup.
pub fn evaluate_indemnities(
    config: &CaseConfig,
    records: &[PayPeriodRecord],
    first_step: u32,
) -> IndemnityEvaluation {
    let mut evaluation = IndemnityEvaluation::default();
    let contract = config.contract_range();
    let evaluation_date = config.evaluation_date();
    let reference_salary = config.reference_monthly_salary();

    let late = calculate_late_settlement(
        contract.end,
        config.grace_period_days(),
        evaluation_date,
        reference_salary,
        evaluation.next_step(first_step),
    );
    debug!(
        deadline = %late.deadline,
        delay_days = late.delay_days,
        "Evaluated late-settlement penalty"
    );
    evaluation.line_items.push(IndemnityLineItem {
        concept: LATE_SETTLEMENT_CONCEPT.to_string(),
        kind: IndemnityKind::LateSettlement,
        value: late.value,
        days: late.delay_days,
        daily_rate: late.daily_rate,
        rate_source: ValueSource::Configured,
    });
    evaluation.audit_steps.push(late.audit_step);

    for deposit in &config.penalties().severance_deposits {
        let sanction = calculate_non_deposit_sanction(
            deposit.deadline,
            evaluation_date,
            records,
            reference_salary,
            evaluation.next_step(first_step),
        );
        debug!(
            concept = %deposit.concept,
            delay_days = sanction.delay_days,
            salary_source = %sanction.salary_source,
            "Evaluated non-deposit sanction"
        );
        evaluation.line_items.push(IndemnityLineItem {
            concept: deposit.concept.clone(),
            kind: IndemnityKind::SeveranceNonDeposit,
            value: sanction.value,
            days: sanction.delay_days,
            daily_rate: sanction.daily_rate,
            rate_source: sanction.salary_source,
        });
        evaluation.audit_steps.push(sanction.audit_step);
        evaluation.warnings.extend(sanction.warning);
    }

    if config.penalties().indirect_dismissal.enabled {
        let dismissal = calculate_indirect_dismissal(
            &contract,
            reference_salary,
            evaluation.next_step(first_step),
        );
        evaluation.line_items.push(IndemnityLineItem {
            concept: INDIRECT_DISMISSAL_CONCEPT.to_string(),
            kind: IndemnityKind::IndirectDismissal,
            value: dismissal.value,
            days: dismissal.service_days,
            daily_rate: dismissal.daily_rate,
            rate_source: ValueSource::Configured,
        });
        evaluation.audit_steps.push(dismissal.audit_step);
    }

    info!(
        evaluation_date = %evaluation_date,
        indemnities = evaluation.line_items.len(),
        fallbacks = evaluation.warnings.len(),
        "Evaluated indemnities"
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        BenefitsConfig, ContractConfig, IndirectDismissalConfig, LateSettlementConfig,
        PenaltiesConfig, SeveranceDeposit,
    };
    use crate::models::BonusFields;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(penalties: PenaltiesConfig, evaluation_date: NaiveDate) -> CaseConfig {
        CaseConfig::new(
            ContractConfig {
                employee_name: None,
                contract_start: date(2023, 4, 17),
                contract_end: date(2024, 2, 17),
                evaluation_date,
                reference_monthly_salary: Decimal::from(2_100_000),
            },
            BenefitsConfig {
                accrual_periods: vec![],
            },
            penalties,
        )
        .unwrap()
    }

    fn full_penalties() -> PenaltiesConfig {
        PenaltiesConfig {
            late_settlement: LateSettlementConfig::default(),
            severance_deposits: vec![SeveranceDeposit {
                concept: "Sanción cesantías 2023".to_string(),
                deadline: date(2024, 2, 14),
            }],
            indirect_dismissal: IndirectDismissalConfig { enabled: true },
        }
    }

    fn december_stubs() -> Vec<PayPeriodRecord> {
        [(1, 15), (16, 31)]
            .into_iter()
            .map(|(start, end)| PayPeriodRecord {
                period_start: date(2023, 12, start),
                period_end: date(2023, 12, end),
                base_salary: 1_050_000,
                aux_transport: 70_303,
                bonuses: BonusFields::default(),
            })
            .collect()
    }

    #[test]
    fn test_order_and_values() {
        let cfg = config(full_penalties(), date(2025, 5, 9));
        let evaluation = evaluate_indemnities(&cfg, &december_stubs(), 1);

        let kinds: Vec<IndemnityKind> = evaluation.line_items.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IndemnityKind::LateSettlement,
                IndemnityKind::SeveranceNonDeposit,
                IndemnityKind::IndirectDismissal
            ]
        );

        let late = &evaluation.line_items[0];
        assert_eq!(late.days, 432);
        assert_eq!(late.value, Decimal::from(30_240_000));
        assert_eq!(late.rate_source, ValueSource::Configured);

        let sanction = &evaluation.line_items[1];
        assert_eq!(sanction.concept, "Sanción cesantías 2023");
        assert_eq!(sanction.days, 450);
        assert_eq!(sanction.value, Decimal::from(31_500_000));
        assert_eq!(sanction.rate_source, ValueSource::Actual);

        let dismissal = &evaluation.line_items[2];
        assert_eq!(dismissal.days, 306);
        assert_eq!(dismissal.value, Decimal::from(1_785_000));

        assert!(evaluation.warnings.is_empty());
        let numbers: Vec<u32> = evaluation.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_december_surfaces_warning() {
        let cfg = config(full_penalties(), date(2025, 5, 9));
        let evaluation = evaluate_indemnities(&cfg, &[], 1);

        assert_eq!(
            evaluation.line_items[1].rate_source,
            ValueSource::FallbackConstant
        );
        assert_eq!(evaluation.warnings.len(), 1);
        assert_eq!(evaluation.warnings[0].code, "REFERENCE_SALARY_FALLBACK");
    }

    #[test]
    fn test_only_late_settlement_by_default() {
        let cfg = config(PenaltiesConfig::default(), date(2025, 5, 9));
        let evaluation = evaluate_indemnities(&cfg, &[], 1);
        assert_eq!(evaluation.line_items.len(), 1);
        assert_eq!(evaluation.line_items[0].kind, IndemnityKind::LateSettlement);
    }

    #[test]
    fn test_evaluation_before_deadlines_has_no_delay() {
        let cfg = config(full_penalties(), date(2024, 2, 1));
        let evaluation = evaluate_indemnities(&cfg, &december_stubs(), 1);
        assert_eq!(evaluation.line_items[0].value, Decimal::ZERO);
        assert_eq!(evaluation.line_items[1].value, Decimal::ZERO);
        // dismissal does not depend on the evaluation date
        assert_eq!(evaluation.line_items[2].value, Decimal::from(1_785_000));
    }
}
