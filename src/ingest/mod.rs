//! Pay-stub ingestion.
//!
//! Loads the payroll summary export the calculators run over. See
//! [`PaystubLoader`] for the coercion rules.

mod paystubs;

pub use paystubs::{
    AMOUNT_COLUMNS, IngestOutcome, PERIOD_END_COLUMN, PERIOD_START_COLUMN, PaystubLoader,
};
