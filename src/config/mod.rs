//! Case configuration for the liquidation engine.
//!
//! A case is described by a directory of YAML files: contract facts, the
//! accrual periods to liquidate, and penalty settings. The loaded
//! [`CaseConfig`] is immutable and passed by reference into every calculator.
//!
//! # Example
//!
//! ```no_run
//! use liquidacion_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/colombia_2023").unwrap();
//! println!("Contract: {}", config.contract_range());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BenefitsConfig, CaseConfig, ContractConfig, IndirectDismissalConfig, LateSettlementConfig,
    PenaltiesConfig, SeveranceDeposit,
};
