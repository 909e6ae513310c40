//! Error types for the salary slip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a calculation, the zone lookup, or configuration loading
//! can produce.

use thiserror::Error;

use crate::zone::ZoneServiceError;

/// The main error type for the salary slip engine.
///
/// # Example
///
/// ```
/// use salary_slip::error::PayrollError;
///
/// let error = PayrollError::MissingArgument {
///     argument: "employee".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required argument missing: employee");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A required argument (the employee record) was not supplied.
    #[error("Required argument missing: {argument}")]
    MissingArgument {
        /// The name of the missing argument.
        argument: String,
    },

    /// A quantity was negative, or too large for decimal arithmetic.
    #[error("Value out of range for '{field}' ({value}): {message}")]
    OutOfRange {
        /// The offending field.
        field: String,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The zone service failed. The underlying error is passed through untouched.
    #[error(transparent)]
    ZoneService(#[from] ZoneServiceError),

    /// A danger zone lookup was needed but no zone service was configured.
    #[error("No zone service configured to classify duty station '{station}'")]
    ZoneServiceUnavailable {
        /// The duty station that needed classifying.
        station: String,
    },

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

    /// The policy table loaded but holds values the rules cannot use.
    #[error("Invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for the absent-employee error every operation raises.
    pub fn missing_employee() -> Self {
        PayrollError::MissingArgument {
            argument: "employee".to_string(),
        }
    }

    /// An amount derived from `field` exceeded the decimal range.
    pub fn overflow(field: &str, value: impl ToString) -> Self {
        PayrollError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            message: "amount exceeds the representable range".to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_displays_argument() {
        let error = PayrollError::missing_employee();
        assert_eq!(error.to_string(), "Required argument missing: employee");
    }

    #[test]
    fn test_out_of_range_displays_field_value_and_message() {
        let error = PayrollError::OutOfRange {
            field: "total_dependencies".to_string(),
            value: "-1".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Value out of range for 'total_dependencies' (-1): must not be negative"
        );
    }

    #[test]
    fn test_overflow_is_out_of_range_on_field() {
        let error = PayrollError::overflow("wage", "50000000000000000000000000000");
        assert_eq!(
            error.to_string(),
            "Value out of range for 'wage' (50000000000000000000000000000): \
             amount exceeds the representable range"
        );
    }

    #[test]
    fn test_zone_service_error_is_transparent() {
        let error: PayrollError = ZoneServiceError::Lookup {
            station: "North Ridge".to_string(),
            message: "registry offline".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Zone lookup failed for 'North Ridge': registry offline"
        );
    }

    #[test]
    fn test_zone_service_unavailable_displays_station() {
        let error = PayrollError::ZoneServiceUnavailable {
            station: "Harbour Depot".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No zone service configured to classify duty station 'Harbour Depot'"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = PayrollError::InvalidPolicy {
            field: "pension_rate".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy value 'pension_rate': must be between 0 and 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn lookup() -> Result<bool, ZoneServiceError> {
            Err(ZoneServiceError::Lookup {
                station: "x".to_string(),
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<bool> {
            Ok(lookup()?)
        }

        assert!(matches!(
            propagates_error(),
            Err(PayrollError::ZoneService(ZoneServiceError::Lookup { .. }))
        ));
    }
}
