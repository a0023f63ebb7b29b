//! The assembled report for one settlement case.
//!
//! Every peso amount here is already rounded to a whole unit; the unrounded
//! figures live in the audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, DateRange, IndemnityKind, LineItemKind, PaymentStatus, ValueSource};

/// One calendar month of the earnings summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummaryRow {
    /// The month, formatted `YYYY-MM`.
    pub month: String,
    /// Base salary paid in pay periods starting that month.
    pub base_salary: Decimal,
    /// Surcharges paid in pay periods starting that month.
    pub extras: Decimal,
    /// Base salary plus surcharges.
    pub total_salary: Decimal,
    /// Transport subsidy paid.
    pub aux_transport: Decimal,
    /// Contribution base (IBC): total salary plus transport subsidy.
    pub contribution_base: Decimal,
    /// Combined employer and employee pension contribution (12% of IBC).
    pub pension_contribution: Decimal,
}

/// One row of the liquidation detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationLine {
    /// Name of the entitlement.
    pub concept: String,
    /// What kind of entitlement it is.
    pub kind: LineItemKind,
    /// Inclusive accrual days behind the value.
    pub accrual_days: i64,
    /// Value rounded to whole pesos.
    pub value: Decimal,
    /// Payment status.
    pub status: PaymentStatus,
}

/// Benefit entitlements and the unpaid total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationDetail {
    /// One line per entitlement, in configuration order.
    pub lines: Vec<LiquidationLine>,
    /// Sum of rounded values for every line not yet paid.
    pub total_unpaid: Decimal,
}

/// One row of the indemnity detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndemnityLine {
    /// Name of the penalty.
    pub concept: String,
    /// What kind of penalty it is.
    pub kind: IndemnityKind,
    /// Value rounded to whole pesos.
    pub value: Decimal,
    /// Delay days, or service days for the dismissal indemnity.
    pub days: i64,
    /// Daily salary rounded to whole pesos.
    pub daily_rate: Decimal,
    /// Where the salary came from.
    pub rate_source: ValueSource,
}

/// Late-payment penalties and their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndemnityDetail {
    /// One line per penalty.
    pub lines: Vec<IndemnityLine>,
    /// Rounded sum of the unrounded penalty values.
    pub total: Decimal,
}

/// The complete output for one settlement case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Unique identifier for this evaluation.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced it.
    pub engine_version: String,
    /// Optional name of the employee, from configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// The contract span.
    pub contract: DateRange,
    /// The "as of" date penalties are accrued to.
    pub evaluation_date: NaiveDate,
    /// Earnings per calendar month within the contract span.
    pub monthly_summary: Vec<MonthlySummaryRow>,
    /// Benefit entitlements.
    pub liquidation: LiquidationDetail,
    /// Late-payment penalties.
    pub indemnities: IndemnityDetail,
    /// Unpaid liquidation plus indemnities (pretensiones).
    pub total_claim: Decimal,
    /// How every figure was reached.
    pub audit_trace: AuditTrace,
}
