//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a case
//! configuration from a directory of YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{BenefitsConfig, CaseConfig, ContractConfig, PenaltiesConfig};

/// Loads a [`CaseConfig`] from a case directory.
///
/// # Directory Structure
///
/// ```text
/// config/colombia_2023/
/// ├── contract.yaml   # Contract dates, evaluation date, reference salary
/// ├── benefits.yaml   # Accrual periods and their payment status
/// └── penalties.yaml  # Grace period, deposit deadlines, dismissal flag
/// ```
///
/// `penalties.yaml` is optional; without it the defaults apply (15-day
/// grace period, no deposit sanctions, no dismissal indemnity).
///
/// # Example
///
/// ```no_run
/// use liquidacion_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/colombia_2023")?;
/// println!("Evaluating as of {}", config.evaluation_date());
/// # Ok::<(), liquidacion_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing
    /// - [`EngineError::ConfigParseError`] if a file is not valid YAML for its type
    /// - [`EngineError::InvalidConfig`] if a value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<CaseConfig> {
        let path = path.as_ref();

        let contract = Self::load_yaml::<ContractConfig>(&path.join("contract.yaml"))?;
        let benefits = Self::load_yaml::<BenefitsConfig>(&path.join("benefits.yaml"))?;

        let penalties_path = path.join("penalties.yaml");
        let penalties = if penalties_path.exists() {
            Self::load_yaml::<PenaltiesConfig>(&penalties_path)?
        } else {
            PenaltiesConfig::default()
        };

        let config = CaseConfig::new(contract, benefits, penalties)?;

        info!(
            path = %path.display(),
            accrual_periods = config.accrual_periods().len(),
            severance_deposits = config.penalties().severance_deposits.len(),
            evaluation_date = %config.evaluation_date(),
            "Loaded case configuration"
        );

        Ok(config)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
