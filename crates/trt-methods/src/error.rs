//! Analysis method errors.

use thiserror::Error;
use trt_core::TrtError;
use trt_data::DataError;

/// Result type for method evaluation.
pub type EstimateResult<T> = Result<T, MethodError>;

/// Errors that can occur while evaluating an analysis method.
#[derive(Error, Debug)]
pub enum MethodError {
    /// Invalid method parameter (non-positive length, radius, ...).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// Incomplete configuration of the data or the method.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// Data is numerically degenerate for this method.
    #[error("Numeric error: {what}")]
    Numeric { what: String },

    /// Any other data failure.
    #[error("Data error: {0}")]
    Data(#[source] DataError),
}

impl MethodError {
    pub fn invalid_arg(what: impl Into<String>) -> Self {
        Self::InvalidArg { what: what.into() }
    }

    pub fn configuration(what: impl Into<String>) -> Self {
        Self::Configuration { what: what.into() }
    }

    pub fn numeric(what: impl Into<String>) -> Self {
        Self::Numeric { what: what.into() }
    }
}

impl From<DataError> for MethodError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::Configuration { what } => MethodError::Configuration { what },
            DataError::Numeric { what } => MethodError::Numeric { what },
            other => MethodError::Data(other),
        }
    }
}

impl From<TrtError> for MethodError {
    fn from(err: TrtError) -> Self {
        match err {
            TrtError::Configuration { what } => MethodError::Configuration { what },
            TrtError::Numeric { what } => MethodError::Numeric { what },
            other => MethodError::Numeric {
                what: other.to_string(),
            },
        }
    }
}
