//! Error types for clarity-core

use thiserror::Error;

/// Errors that can occur while evaluating a quality gate
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid threshold for metric {metric}: {value:?}")]
    InvalidThreshold { metric: String, value: String },

    #[error("Unknown gate operator: {0}")]
    UnknownOperator(String),

    #[error("Condition on metric {0} has no threshold")]
    MissingThreshold(String),
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_display() {
        let err = CoreError::InvalidThreshold {
            metric: "bugs".to_string(),
            value: "abc".to_string(),
        };
        assert!(format!("{}", err).contains("Invalid threshold"));
        assert!(format!("{}", err).contains("bugs"));
        assert!(format!("{}", err).contains("abc"));

        let err = CoreError::UnknownOperator("EQ".to_string());
        assert!(format!("{}", err).contains("Unknown gate operator"));
        assert!(format!("{}", err).contains("EQ"));

        let err = CoreError::MissingThreshold("coverage".to_string());
        assert!(format!("{}", err).contains("no threshold"));
        assert!(format!("{}", err).contains("coverage"));
    }

    #[test]
    fn test_core_error_debug() {
        // Ensure Debug is implemented and doesn't panic
        let err = CoreError::UnknownOperator("??".to_string());
        let debug_str = format!("{:?}", err);
        assert!(!debug_str.is_empty());
    }
}
