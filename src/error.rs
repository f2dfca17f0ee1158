//! Error types
//!
//! The pure compute path (grid + closed-form evaluation) cannot fail over the
//! valid parameter domain. Everything around it can: rejected inputs,
//! malformed series handed to the exporters, file-system and backend
//! failures while rendering.

use thiserror::Error;

/// Errors raised by controls, solvers, exporters and renderers.
#[derive(Error, Debug)]
pub enum PhotolysisError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid time grid: {0}")]
    InvalidGrid(String),

    #[error("Empty data: {0} must not be empty")]
    EmptySeries(String),

    #[error("Data length mismatch: {left} {left_name} versus {right} {right_name}")]
    LengthMismatch {
        left_name: String,
        left: usize,
        right_name: String,
        right: usize,
    },

    #[error("Invalid data: NaN or Inf detected in {0}")]
    NonFinite(String),

    #[error("{solver} does not support {configuration} configuration")]
    UnsupportedConfiguration { solver: String, configuration: String },

    #[error("Unknown command '{0}' (type 'help' for the command list)")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}

impl PhotolysisError {
    /// Shorthand for [`PhotolysisError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`PhotolysisError::LengthMismatch`]
    pub fn length_mismatch(
        left_name: impl Into<String>,
        left: usize,
        right_name: impl Into<String>,
        right: usize,
    ) -> Self {
        Self::LengthMismatch {
            left_name: left_name.into(),
            left,
            right_name: right_name.into(),
            right,
        }
    }
}

pub type PhotolysisResult<T> = Result<T, PhotolysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = PhotolysisError::invalid_parameter("rate_constant", "value is NaN");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'rate_constant': value is NaN"
        );
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = PhotolysisError::length_mismatch("time points", 100, "concentrations", 99);
        assert_eq!(
            err.to_string(),
            "Data length mismatch: 100 time points versus 99 concentrations"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PhotolysisError = io.into();
        assert!(matches!(err, PhotolysisError::Io(_)));
    }
}
