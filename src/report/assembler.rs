//! Builds a [`CaseReport`] from a case configuration and its pay stubs.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::calculation::{evaluate_benefits, evaluate_indemnities};
use crate::config::CaseConfig;
use crate::models::{
    AuditTrace, AuditWarning, CaseReport, IndemnityDetail, IndemnityLine, LiquidationDetail,
    LiquidationLine, PayPeriodRecord,
};

use super::monthly_summary::monthly_summary;
use super::round_pesos;

/// Evaluates a case and assembles the full report.
///
/// `warnings` carries anomalies found before evaluation (usually from
/// ingestion); they lead the report's warning list.
///
/// Totals:
/// - liquidation: sum of the rounded values of every line not yet paid
/// - indemnities: the unrounded values summed, then rounded
/// - claim: unpaid liquidation plus the unrounded indemnity sum, rounded
///
/// # Example
///
/// ```no_run
/// use liquidacion_engine::config::ConfigLoader;
/// use liquidacion_engine::ingest::PaystubLoader;
/// use liquidacion_engine::report::assemble_report;
///
/// let config = ConfigLoader::load("./config/colombia_2023")?;
/// let outcome = PaystubLoader::load("./data/paystubs-summary.csv")?;
/// let report = assemble_report(&config, &outcome.records, outcome.warnings);
/// println!("Total claim: {}", report.total_claim);
/// # Ok::<(), liquidacion_engine::error::EngineError>(())
/// ```
pub fn assemble_report(
    config: &CaseConfig,
    records: &[PayPeriodRecord],
    mut warnings: Vec<AuditWarning>,
) -> CaseReport {
    let start_time = Instant::now();
    let report_id = Uuid::new_v4();

    if records.is_empty() {
        warnings.push(AuditWarning::new(
            "NO_PAY_PERIODS",
            "No pay periods available; every benefit average is zero",
            "high",
        ));
    }

    let benefits = evaluate_benefits(config, records, 1);
    let next_step = 1 + benefits.audit_steps.len() as u32;
    let indemnities = evaluate_indemnities(config, records, next_step);

    let liquidation_lines: Vec<LiquidationLine> = benefits
        .line_items
        .iter()
        .map(|item| LiquidationLine {
            concept: item.concept.clone(),
            kind: item.kind,
            accrual_days: item.accrual_days,
            value: round_pesos(item.value),
            status: item.status,
        })
        .collect();
    let total_unpaid: Decimal = liquidation_lines
        .iter()
        .filter(|line| line.status.is_owed())
        .map(|line| line.value)
        .sum();

    let indemnity_sum: Decimal = indemnities.line_items.iter().map(|item| item.value).sum();
    let indemnity_lines: Vec<IndemnityLine> = indemnities
        .line_items
        .iter()
        .map(|item| IndemnityLine {
            concept: item.concept.clone(),
            kind: item.kind,
            value: round_pesos(item.value),
            days: item.days,
            daily_rate: round_pesos(item.daily_rate),
            rate_source: item.rate_source,
        })
        .collect();

    let total_claim = round_pesos(total_unpaid + indemnity_sum);

    let contract = config.contract_range();
    let monthly = monthly_summary(&contract, records);

    let mut steps = benefits.audit_steps;
    steps.extend(indemnities.audit_steps);
    warnings.extend(indemnities.warnings);

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        report_id = %report_id,
        pay_periods = records.len(),
        months = monthly.len(),
        total_unpaid = %total_unpaid,
        total_claim = %total_claim,
        warnings = warnings.len(),
        duration_us,
        "Case report assembled"
    );

    CaseReport {
        report_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_name: config.contract().employee_name.clone(),
        contract,
        evaluation_date: config.evaluation_date(),
        monthly_summary: monthly,
        liquidation: LiquidationDetail {
            lines: liquidation_lines,
            total_unpaid,
        },
        indemnities: IndemnityDetail {
            lines: indemnity_lines,
            total: round_pesos(indemnity_sum),
        },
        total_claim,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        BenefitsConfig, ContractConfig, IndirectDismissalConfig, PenaltiesConfig,
        SeveranceDeposit,
    };
    use crate::models::{
        AccrualPeriod, BenefitKind, BonusFields, DateRange, IndemnityKind, PaymentStatus,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(concept: &str, kind: BenefitKind, status: PaymentStatus) -> AccrualPeriod {
        AccrualPeriod {
            concept: concept.to_string(),
            kind,
            range: DateRange::new(date(2024, 1, 1), date(2024, 2, 17)),
            status,
            interest_status: None,
        }
    }

    fn config(periods: Vec<AccrualPeriod>, penalties: PenaltiesConfig) -> CaseConfig {
        CaseConfig::new(
            ContractConfig {
                employee_name: Some("Test employee".to_string()),
                contract_start: date(2023, 4, 17),
                contract_end: date(2024, 2, 17),
                evaluation_date: date(2025, 5, 9),
                reference_monthly_salary: Decimal::from(2_100_000),
            },
            BenefitsConfig {
                accrual_periods: periods,
            },
            penalties,
        )
        .unwrap()
    }

    fn stubs() -> Vec<PayPeriodRecord> {
        let stub = |start, end, base, aux| PayPeriodRecord {
            period_start: start,
            period_end: end,
            base_salary: base,
            aux_transport: aux,
            bonuses: BonusFields::default(),
        };
        vec![
            stub(date(2023, 12, 1), date(2023, 12, 15), 1_050_000, 70_303),
            stub(date(2023, 12, 16), date(2023, 12, 31), 1_050_000, 70_303),
            stub(date(2024, 1, 1), date(2024, 1, 15), 1_050_000, 81_000),
            stub(date(2024, 1, 16), date(2024, 1, 31), 1_050_000, 81_000),
            stub(date(2024, 2, 1), date(2024, 2, 15), 1_050_000, 81_000),
            stub(date(2024, 2, 16), date(2024, 2, 17), 140_000, 10_800),
        ]
    }

    #[test]
    fn test_paid_lines_are_excluded_from_total() {
        let cfg = config(
            vec![
                period("Prima 2024", BenefitKind::ServiceBonus, PaymentStatus::Paid),
                period("Vacaciones 2024", BenefitKind::Vacation, PaymentStatus::Unpaid),
            ],
            PenaltiesConfig::default(),
        );
        let report = assemble_report(&cfg, &stubs(), vec![]);

        let lines = &report.liquidation.lines;
        // 295,316.67 and 137,083.33
        assert_eq!(lines[0].value, Decimal::from(295_317));
        assert_eq!(lines[1].value, Decimal::from(137_083));
        assert_eq!(report.liquidation.total_unpaid, Decimal::from(137_083));
    }

    #[test]
    fn test_claim_total_adds_unrounded_indemnities() {
        let penalties = PenaltiesConfig {
            severance_deposits: vec![SeveranceDeposit {
                concept: "Sanción 2023".to_string(),
                deadline: date(2024, 2, 14),
            }],
            indirect_dismissal: IndirectDismissalConfig { enabled: true },
            ..PenaltiesConfig::default()
        };
        let cfg = config(
            vec![period(
                "Cesantías 2024",
                BenefitKind::Severance,
                PaymentStatus::Unpaid,
            )],
            penalties,
        );
        let report = assemble_report(&cfg, &stubs(), vec![]);

        // 295,316.67 and 4,725.07
        assert_eq!(report.liquidation.total_unpaid, Decimal::from(300_042));
        // 30,240,000 + 31,500,000 + 1,785,000
        assert_eq!(report.indemnities.total, Decimal::from(63_525_000));
        assert_eq!(report.total_claim, Decimal::from(63_825_042));

        let kinds: Vec<IndemnityKind> = report.indemnities.lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IndemnityKind::LateSettlement,
                IndemnityKind::SeveranceNonDeposit,
                IndemnityKind::IndirectDismissal
            ]
        );
        assert_eq!(report.indemnities.lines[0].daily_rate, Decimal::from(70_000));
        assert_eq!(report.indemnities.lines[2].daily_rate, Decimal::from(5_833));
    }

    #[test]
    fn test_audit_trace_is_numbered_across_sections() {
        let cfg = config(
            vec![period("Vacaciones 2024", BenefitKind::Vacation, PaymentStatus::Unpaid)],
            PenaltiesConfig::default(),
        );
        let report = assemble_report(&cfg, &stubs(), vec![]);
        let numbers: Vec<u32> = report
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(report.audit_trace.steps[2].rule_id, "late_settlement");
    }

    #[test]
    fn test_warnings_are_carried_in_order() {
        let penalties = PenaltiesConfig {
            severance_deposits: vec![SeveranceDeposit {
                concept: "Sanción 2022".to_string(),
                deadline: date(2023, 2, 14),
            }],
            ..PenaltiesConfig::default()
        };
        let cfg = config(vec![], penalties);
        let ingest = AuditWarning::new("FIELDS_COERCED", "1 field coerced", "low");
        let report = assemble_report(&cfg, &stubs(), vec![ingest]);

        let codes: Vec<&str> = report
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["FIELDS_COERCED", "REFERENCE_SALARY_FALLBACK"]);
    }

    #[test]
    fn test_empty_source_still_produces_report() {
        let cfg = config(
            vec![period("Prima 2024", BenefitKind::ServiceBonus, PaymentStatus::Unpaid)],
            PenaltiesConfig::default(),
        );
        let report = assemble_report(&cfg, &[], vec![]);
        assert_eq!(report.liquidation.total_unpaid, Decimal::ZERO);
        assert!(report.monthly_summary.is_empty());
        assert_eq!(report.audit_trace.warnings[0].code, "NO_PAY_PERIODS");
        assert_eq!(report.total_claim, Decimal::from(30_240_000));
    }

    #[test]
    fn test_report_metadata() {
        let cfg = config(vec![], PenaltiesConfig::default());
        let report = assemble_report(&cfg, &stubs(), vec![]);
        assert_eq!(report.employee_name.as_deref(), Some("Test employee"));
        assert_eq!(report.contract.days(), 307);
        assert_eq!(report.evaluation_date, date(2025, 5, 9));
        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.monthly_summary.len(), 3);
    }
}
