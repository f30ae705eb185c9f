//! Error types for the CAM tools crate.
//!
//! CAM tools only fail on bad input, reported as a `ParameterError`.

use thiserror::Error;

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl ParameterError {
    /// Reject values that are not finite and strictly positive.
    pub fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ParameterError::InvalidValue {
                name: name.to_string(),
                reason: format!("must be a positive number, got {}", value),
            })
        }
    }
}

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
