//! Calculation result models for the liquidation engine.
//!
//! This module contains the intermediate [`ApportionmentResult`], the
//! [`BenefitLineItem`] and [`IndemnityLineItem`] outputs of the calculators,
//! and the audit types that record how each figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DateRange, PaymentStatus};

/// Monthly-equivalent earnings for one accrual period.
///
/// Produced by aggregating every pay period that overlaps the accrual range.
/// All averages are normalized to a 30-day month regardless of how long the
/// accrual period is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApportionmentResult {
    /// Average monthly base salary plus surcharges.
    pub salary_plus_extras_avg: Decimal,
    /// Average monthly transport subsidy.
    pub aux_avg: Decimal,
    /// Average monthly base salary alone.
    pub base_only_avg: Decimal,
    /// Inclusive day count of the accrual period.
    pub accrual_days: i64,
    /// How many pay periods contributed to the sums.
    pub contributing_periods: usize,
}

impl ApportionmentResult {
    /// The all-zero result of a degenerate or empty accrual period.
    pub fn zero() -> Self {
        Self {
            salary_plus_extras_avg: Decimal::ZERO,
            aux_avg: Decimal::ZERO,
            base_only_avg: Decimal::ZERO,
            accrual_days: 0,
            contributing_periods: 0,
        }
    }
}

/// The kind of entitlement a [`BenefitLineItem`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    /// Service bonus (prima de servicios).
    ServiceBonus,
    /// Severance (cesantías).
    Severance,
    /// 12% annual interest on severance.
    SeveranceInterest,
    /// Vacation pay.
    Vacation,
}

/// A computed benefit entitlement, before report rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitLineItem {
    /// Human-readable name of the entitlement.
    pub concept: String,
    /// What kind of entitlement this is.
    pub kind: LineItemKind,
    /// The accrual period the value was computed over.
    pub period: DateRange,
    /// Inclusive accrual day count used by the formula.
    pub accrual_days: i64,
    /// Unrounded value in pesos.
    pub value: Decimal,
    /// Whether the entitlement has been paid.
    pub status: PaymentStatus,
}

/// The penalty a [`IndemnityLineItem`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndemnityKind {
    /// One day of salary per day of delay in paying the final settlement.
    LateSettlement,
    /// One day of salary per day severance went undeposited.
    SeveranceNonDeposit,
    /// Indemnity for indirect dismissal.
    IndirectDismissal,
}

/// Where a reference salary came from.
///
/// Every fallback is explicit so callers and tests can tell which path
/// produced a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    /// Derived from pay-stub data.
    Actual,
    /// Taken directly from the case configuration.
    Configured,
    /// Pay-stub data was missing, so the configured reference salary was used.
    FallbackConstant,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Actual => write!(f, "actual"),
            ValueSource::Configured => write!(f, "configured"),
            ValueSource::FallbackConstant => write!(f, "fallback_constant"),
        }
    }
}

/// A computed penalty, before report rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndemnityLineItem {
    /// Human-readable name of the penalty.
    pub concept: String,
    /// What kind of penalty this is.
    pub kind: IndemnityKind,
    /// Unrounded value in pesos.
    pub value: Decimal,
    /// Delay days for late-payment penalties; service days for dismissal.
    pub days: i64,
    /// Daily salary the day count was multiplied by.
    pub daily_rate: Decimal,
    /// Where the salary behind `daily_rate` came from.
    pub rate_source: ValueSource,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute behind the rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while loading data or calculating.
///
/// Warnings flag anomalies that were absorbed with a safe default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a case evaluation.
///
/// # Example
///
/// ```
/// use liquidacion_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated along the way.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
