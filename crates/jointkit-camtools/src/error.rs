//! Error types for the box generators.
//!
//! Kernel failures (edge configuration, path stitching, quantity algebra) are
//! wrapped from [`JointError`]; parameter validation and export failures are
//! reported with their own variants.

use jointkit_core::JointError;
use std::io;
use thiserror::Error;

/// Errors that can occur while generating or exporting a box.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A geometry kernel operation failed.
    #[error(transparent)]
    Joint(#[from] JointError),

    /// I/O error while writing a drawing.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to box parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl CamToolError {
    /// The kernel error behind this failure, if any
    pub fn as_joint_error(&self) -> Option<&JointError> {
        match self {
            CamToolError::Joint(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for box generation.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err: CamToolError =
            ParameterError::Incompatible("k_factor must be at least 1".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Parameter error: Incompatible parameters: k_factor must be at least 1"
        );
    }

    #[test]
    fn test_joint_error_is_transparent() {
        let inner = JointError::unsolvable("finger count must be greater than 1");
        let err: CamToolError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.as_joint_error(), Some(&inner));
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "kerf".to_string(),
            value: 5.0,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'kerf' out of range: 5 (valid: 0..3)"
        );

        let err: CamToolError = ParameterError::InvalidDimensions("length".to_string()).into();
        assert_eq!(err.to_string(), "Parameter error: Invalid dimensions: length");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "out.svg");
        let err: CamToolError = io_err.into();
        assert!(matches!(err, CamToolError::IoError(_)));
        assert!(err.to_string().contains("out.svg"));
    }
}
