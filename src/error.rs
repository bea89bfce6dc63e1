//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! running a payroll calculation. The pure calculators never fail; only the
//! configuration layer and the orchestrated payroll run return these errors.

use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax_brackets.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/tax_brackets.yaml"
/// );
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

    /// A tax bracket schedule broke one of the schedule invariants.
    #[error("Invalid tax schedule at bracket {index}: {message}")]
    InvalidTaxSchedule {
        /// Zero-based position of the offending bracket.
        index: usize,
        /// A description of the violated invariant.
        message: String,
    },

    /// A pay frequency name was not recognised.
    #[error("Unknown pay frequency: {value}")]
    UnknownPayFrequency {
        /// The value that failed to parse.
        value: String,
    },

    /// A payroll record failed validation before calculation.
    #[error("Invalid payroll data for worker '{worker_id}': {}", .errors.join("; "))]
    InvalidPayrollData {
        /// The worker the record belongs to (may be empty).
        worker_id: String,
        /// Every validation error found in the record, in order.
        errors: Vec<String>,
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
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_tax_schedule_displays_index_and_message() {
        let error = EngineError::InvalidTaxSchedule {
            index: 2,
            message: "rate must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tax schedule at bracket 2: rate must be between 0 and 1"
        );
    }

    #[test]
    fn test_unknown_pay_frequency_displays_value() {
        let error = EngineError::UnknownPayFrequency {
            value: "fortnightly".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown pay frequency: fortnightly");
    }

    #[test]
    fn test_invalid_payroll_data_joins_errors() {
        let error = EngineError::InvalidPayrollData {
            worker_id: "w-17".to_string(),
            errors: vec![
                "Compensation amount must be greater than zero".to_string(),
                "Regular hours are required for hourly workers".to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll data for worker 'w-17': Compensation amount must be greater than zero; \
             Regular hours are required for hourly workers"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
