//! Core data models for the liquidation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod accrual_period;
mod calculation_result;
mod case_report;
mod date_range;
mod pay_period;

pub use accrual_period::{AccrualPeriod, BenefitKind, PaymentStatus};
pub use calculation_result::{
    ApportionmentResult, AuditStep, AuditTrace, AuditWarning, BenefitLineItem, IndemnityKind,
    IndemnityLineItem, LineItemKind, ValueSource,
};
pub use case_report::{
    CaseReport, IndemnityDetail, IndemnityLine, LiquidationDetail, LiquidationLine,
    MonthlySummaryRow,
};
pub use date_range::DateRange;
pub use pay_period::{BonusFields, MAX_AMOUNT, PayPeriodRecord};
