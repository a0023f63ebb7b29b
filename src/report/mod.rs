//! Report assembly for a settlement case.
//!
//! Calculators keep full precision; this is the only place values are rounded
//! to whole pesos. [`assemble_report`] builds the [`CaseReport`](crate::models::CaseReport)
//! and [`render_text`] prints it as plain-text tables.

mod assembler;
mod monthly_summary;
mod render;

use rust_decimal::{Decimal, RoundingStrategy};

pub use assembler::assemble_report;
pub use monthly_summary::{monthly_summary, pension_contribution_rate};
pub use render::render_text;

/// Rounds to whole pesos, ties to even.
///
/// # Example
///
/// ```
/// use liquidacion_engine::report::round_pesos;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_pesos(Decimal::from_str("466792.92").unwrap()), Decimal::from(466_793));
/// assert_eq!(round_pesos(Decimal::from_str("4825.5").unwrap()), Decimal::from(4_826));
/// assert_eq!(round_pesos(Decimal::from_str("4824.5").unwrap()), Decimal::from(4_824));
/// ```
pub fn round_pesos(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}
