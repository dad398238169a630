//! Detector error types.

use thiserror::Error;

/// Streaming anomaly detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectorError {
    /// Supplied value was NaN or infinite.
    #[error("Invalid input: value {0} is not finite")]
    InvalidInput(f64),

    /// Construction-time parameter violation.
    #[error("Invalid configuration: {name} - {reason}")]
    InvalidConfiguration { name: String, reason: String },
}

impl DetectorError {
    /// Shorthand for an [`DetectorError::InvalidConfiguration`] error.
    pub fn invalid_configuration(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for streaming detection operations.
pub type Result<T> = std::result::Result<T, DetectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = DetectorError::InvalidInput(f64::NAN);
        assert_eq!(error.to_string(), "Invalid input: value NaN is not finite");
    }

    #[test]
    fn test_invalid_input_infinity_display() {
        let error = DetectorError::InvalidInput(f64::INFINITY);
        assert_eq!(error.to_string(), "Invalid input: value inf is not finite");
    }

    #[test]
    fn test_invalid_configuration_display() {
        let error = DetectorError::InvalidConfiguration {
            name: "threshold".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: threshold - must be positive"
        );
    }

    #[test]
    fn test_invalid_configuration_shorthand() {
        let error = DetectorError::invalid_configuration("alpha", "must be in (0, 1]");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: alpha - must be in (0, 1]"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let error = DetectorError::InvalidInput(f64::NEG_INFINITY);
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidInput"));
    }

    #[test]
    fn test_result_type_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(DetectorError::InvalidInput(f64::NAN));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DetectorError::InvalidInput(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(DetectorError::invalid_configuration("window_size", "must be >= 1"));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DetectorError>();
    }
}
