//! Error types for the liquidation engine.
//!
//! Only conditions that make a report impossible are errors. Malformed rows,
//! degenerate periods and missing reference data are absorbed by the
//! calculators and surfaced as [`AuditWarning`](crate::models::AuditWarning)s.

use thiserror::Error;

/// The main error type for the liquidation engine.
///
/// # Example
///
/// ```
/// use liquidacion_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/contract.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/contract.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What made the value invalid.
        message: String,
    },

    /// The pay-stub source could not be opened or its header could not be read.
    #[error("Pay-stub source unavailable '{path}': {message}")]
    SourceUnavailable {
        /// The path (or description) of the source.
        path: String,
        /// The underlying I/O or CSV failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/contract.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/contract.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/benefits.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/benefits.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "reference_monthly_salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'reference_monthly_salary': must not be negative"
        );
    }

    #[test]
    fn test_source_unavailable_displays_path_and_message() {
        let error = EngineError::SourceUnavailable {
            path: "paystubs-summary.csv".to_string(),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Pay-stub source unavailable 'paystubs-summary.csv': No such file or directory"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let error = EngineError::ConfigNotFound {
            path: "test".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigNotFound"));
    }
}
