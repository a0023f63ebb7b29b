//! Configuration types for a settlement case.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a case directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_GRACE_PERIOD_DAYS;
use crate::error::{EngineError, EngineResult};
use crate::models::{AccrualPeriod, DateRange, MAX_AMOUNT};

/// Contract facts from `contract.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Optional label for report headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// First day of the contract.
    pub contract_start: NaiveDate,
    /// Last day of the contract.
    pub contract_end: NaiveDate,
    /// The "as of" date penalties are evaluated on.
    pub evaluation_date: NaiveDate,
    /// Last known monthly salary, used for penalties and fallbacks.
    pub reference_monthly_salary: Decimal,
}

/// Accrual periods from `benefits.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsConfig {
    /// Every accrual period to liquidate, in report order.
    pub accrual_periods: Vec<AccrualPeriod>,
}

/// Late-settlement penalty settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateSettlementConfig {
    /// Days after contract end before the penalty starts; may be zero.
    pub grace_period_days: i64,
}

impl Default for LateSettlementConfig {
    fn default() -> Self {
        Self {
            grace_period_days: i64::from(DEFAULT_GRACE_PERIOD_DAYS),
        }
    }
}

/// A statutory severance deposit deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceDeposit {
    /// Label for the sanction line.
    pub concept: String,
    /// Last lawful deposit day.
    pub deadline: NaiveDate,
}

/// Indirect-dismissal settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndirectDismissalConfig {
    /// Whether the case claims the dismissal indemnity.
    pub enabled: bool,
}

/// Penalty settings from `penalties.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltiesConfig {
    /// Late-settlement penalty settings.
    #[serde(default)]
    pub late_settlement: LateSettlementConfig,
    /// One entry per severance deposit that was missed.
    #[serde(default)]
    pub severance_deposits: Vec<SeveranceDeposit>,
    /// Indirect-dismissal settings.
    #[serde(default)]
    pub indirect_dismissal: IndirectDismissalConfig,
}

/// The complete, immutable configuration of one case.
///
/// Built by [`ConfigLoader`](super::ConfigLoader) from a case directory, or
/// deserialized directly (e.g. from an API request). Every constructor path
/// goes through [`CaseConfig::validate`].
///
/// # Example
///
/// ```
/// use liquidacion_engine::config::{BenefitsConfig, CaseConfig, ContractConfig, PenaltiesConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = CaseConfig::new(
///     ContractConfig {
///         employee_name: None,
///         contract_start: NaiveDate::from_ymd_opt(2023, 4, 17).unwrap(),
///         contract_end: NaiveDate::from_ymd_opt(2024, 2, 17).unwrap(),
///         evaluation_date: NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
///         reference_monthly_salary: Decimal::from(2_100_000),
///     },
///     BenefitsConfig { accrual_periods: vec![] },
///     PenaltiesConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(config.grace_period_days(), 15);
/// assert_eq!(config.contract_range().days(), 307);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseConfig {
    contract: ContractConfig,
    accrual_periods: Vec<AccrualPeriod>,
    #[serde(default)]
    penalties: PenaltiesConfig,
}

impl CaseConfig {
    /// Creates a validated case configuration from its component parts.
    pub fn new(
        contract: ContractConfig,
        benefits: BenefitsConfig,
        penalties: PenaltiesConfig,
    ) -> EngineResult<Self> {
        let config = Self {
            contract,
            accrual_periods: benefits.accrual_periods,
            penalties,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the values serde cannot.
    ///
    /// Degenerate date ranges are not rejected; they contribute zero. The
    /// reference salary is capped at [`MAX_AMOUNT`] so the indemnity
    /// products stay inside `Decimal` for any representable date.
    pub fn validate(&self) -> EngineResult<()> {
        let salary = self.contract.reference_monthly_salary;
        if salary < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "reference_monthly_salary".to_string(),
                message: format!("must not be negative, got {}", salary),
            });
        }
        if salary > Decimal::from(MAX_AMOUNT) {
            return Err(EngineError::InvalidConfig {
                field: "reference_monthly_salary".to_string(),
                message: format!("must not exceed {}, got {}", MAX_AMOUNT, salary),
            });
        }

        let grace = self.penalties.late_settlement.grace_period_days;
        if grace < 0 || grace > i64::from(u32::MAX) {
            return Err(EngineError::InvalidConfig {
                field: "late_settlement.grace_period_days".to_string(),
                message: format!("must be between 0 and {}, got {}", u32::MAX, grace),
            });
        }

        if let Some(index) = self
            .accrual_periods
            .iter()
            .position(|period| period.concept.trim().is_empty())
        {
            return Err(EngineError::InvalidConfig {
                field: format!("accrual_periods[{}].concept", index),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(index) = self
            .penalties
            .severance_deposits
            .iter()
            .position(|deposit| deposit.concept.trim().is_empty())
        {
            return Err(EngineError::InvalidConfig {
                field: format!("severance_deposits[{}].concept", index),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns a copy evaluated on a different "as of" date.
    pub fn with_evaluation_date(&self, evaluation_date: NaiveDate) -> Self {
        let mut config = self.clone();
        config.contract.evaluation_date = evaluation_date;
        config
    }

    /// Returns the contract facts.
    pub fn contract(&self) -> &ContractConfig {
        &self.contract
    }

    /// Returns the contract span.
    pub fn contract_range(&self) -> DateRange {
        DateRange::new(self.contract.contract_start, self.contract.contract_end)
    }

    /// Returns the evaluation date.
    pub fn evaluation_date(&self) -> NaiveDate {
        self.contract.evaluation_date
    }

    /// Returns the reference monthly salary.
    pub fn reference_monthly_salary(&self) -> Decimal {
        self.contract.reference_monthly_salary
    }

    /// Returns every configured accrual period.
    pub fn accrual_periods(&self) -> &[AccrualPeriod] {
        &self.accrual_periods
    }

    /// Returns the penalty settings.
    pub fn penalties(&self) -> &PenaltiesConfig {
        &self.penalties
    }

    /// Returns the late-settlement grace period.
    pub fn grace_period_days(&self) -> u32 {
        // validate() bounds the value
        u32::try_from(self.penalties.late_settlement.grace_period_days).unwrap_or_default()
    }
}
