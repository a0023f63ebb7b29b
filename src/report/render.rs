//! Plain-text rendering of a [`CaseReport`].

use crate::models::CaseReport;

const RULE_WIDTH: usize = 100;

/// Renders the three report tables and the claim total.
///
/// Amounts are printed as whole pesos without locale formatting.
pub fn render_text(report: &CaseReport) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "LIQUIDACIÓN {}",
        report.employee_name.as_deref().unwrap_or("")
    ));
    lines.push(format!("Contract: {}", report.contract));
    lines.push(format!("Evaluated as of: {}", report.evaluation_date));
    lines.push(String::new());

    lines.push("MONTHLY FINANCIAL SUMMARY".to_string());
    lines.push(format!(
        "{:<8} {:>12} {:>10} {:>12} {:>10} {:>12} {:>10}",
        "Month", "Base", "Extras", "Total", "Aux", "IBC", "Pension"
    ));
    lines.push(rule.clone());
    lines.extend(report.monthly_summary.iter().map(|row| {
        format!(
            "{:<8} {:>12} {:>10} {:>12} {:>10} {:>12} {:>10}",
            row.month,
            row.base_salary,
            row.extras,
            row.total_salary,
            row.aux_transport,
            row.contribution_base,
            row.pension_contribution
        )
    }));
    lines.push(String::new());

    lines.push("LIQUIDATION DETAIL".to_string());
    lines.push(format!(
        "{:<50} {:>6} {:>14}  {}",
        "Concept", "Days", "Value", "Status"
    ));
    lines.push(rule.clone());
    lines.extend(report.liquidation.lines.iter().map(|line| {
        format!(
            "{:<50} {:>6} {:>14}  {}",
            line.concept, line.accrual_days, line.value, line.status
        )
    }));
    lines.push(format!(
        "{:<50} {:>6} {:>14}",
        "TOTAL UNPAID", "", report.liquidation.total_unpaid
    ));
    lines.push(String::new());

    lines.push("INDEMNITY DETAIL".to_string());
    lines.push(format!(
        "{:<50} {:>6} {:>10} {:>14}  {}",
        "Concept", "Days", "Daily", "Value", "Source"
    ));
    lines.push(rule);
    lines.extend(report.indemnities.lines.iter().map(|line| {
        format!(
            "{:<50} {:>6} {:>10} {:>14}  {}",
            line.concept, line.days, line.daily_rate, line.value, line.rate_source
        )
    }));
    lines.push(format!(
        "{:<50} {:>6} {:>10} {:>14}",
        "TOTAL", "", "", report.indemnities.total
    ));
    lines.push(String::new());

    lines.push(format!("TOTAL CLAIM (PRETENSIONES): {}", report.total_claim));

    if !report.audit_trace.warnings.is_empty() {
        lines.push(String::new());
        lines.push("WARNINGS".to_string());
        lines.extend(report.audit_trace.warnings.iter().map(|warning| {
            format!(
                "[{}] {}: {}",
                warning.severity, warning.code, warning.message
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
