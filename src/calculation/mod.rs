//! Calculation logic for the liquidation engine.
//!
//! The core is the proportional-earnings allocator: [`apportion`] splits a pay
//! period's earnings across an arbitrary date range and [`aggregate_period`]
//! turns the shares into monthly-equivalent averages. The benefit formulas
//! (service bonus, severance, severance interest, vacation) consume those
//! averages; the indemnity formulas (late settlement, non-deposit sanction,
//! indirect dismissal) are driven by dates and the reference salary.
//! [`evaluate_benefits`] and [`evaluate_indemnities`] run them for a whole case.
//!
//! Every calculator is a pure function returning its unrounded value together
//! with an [`AuditStep`](crate::models::AuditStep).

mod aggregation;
mod apportionment;
mod day_count;
mod indemnities;
mod indirect_dismissal;
mod late_settlement;
mod liquidation;
mod service_bonus;
mod severance;
mod severance_deposit;
mod vacation;

pub use aggregation::aggregate_period;
pub use apportionment::{Apportionment, apportion};
pub use day_count::{
    COMMERCIAL_MONTH_DAYS, COMMERCIAL_YEAR_DAYS, delay_days, elapsed_days, inclusive_days,
};
pub use indemnities::{
    INDIRECT_DISMISSAL_CONCEPT, IndemnityEvaluation, LATE_SETTLEMENT_CONCEPT,
    evaluate_indemnities,
};
pub use indirect_dismissal::{
    INDIRECT_DISMISSAL_LEGAL_REF, IndirectDismissalResult, calculate_indirect_dismissal,
};
pub use late_settlement::{
    DEFAULT_GRACE_PERIOD_DAYS, LATE_SETTLEMENT_LEGAL_REF, LateSettlementResult,
    calculate_late_settlement,
};
pub use liquidation::{BenefitEvaluation, evaluate_benefits};
pub use service_bonus::{SERVICE_BONUS_LEGAL_REF, ServiceBonusResult, calculate_service_bonus};
pub use severance::{
    SEVERANCE_INTEREST_LEGAL_REF, SEVERANCE_LEGAL_REF, SeveranceInterestResult, SeveranceResult,
    calculate_severance, calculate_severance_interest, severance_interest_rate,
};
pub use severance_deposit::{
    NON_DEPOSIT_LEGAL_REF, NonDepositSanctionResult, REFERENCE_SALARY_FALLBACK,
    calculate_non_deposit_sanction, december_base_salary,
};
pub use vacation::{VACATION_DIVISOR, VACATION_LEGAL_REF, VacationResult, calculate_vacation};
