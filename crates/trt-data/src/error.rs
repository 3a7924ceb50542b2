//! Measurement data errors.

use thiserror::Error;
use trt_core::TrtError;

/// Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading or windowing measurement data.
#[derive(Error, Debug)]
pub enum DataError {
    /// Incomplete or contradictory column/parameter configuration.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// Data is numerically degenerate for the requested computation.
    #[error("Numeric error: {what}")]
    Numeric { what: String },

    /// Column arrays that must be aligned differ in length.
    #[error("Column '{column}' has {got} samples, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// Requested column is not in the table header.
    #[error("Missing column: {name}")]
    MissingColumn { name: String },

    /// A cell could not be read as a number.
    #[error("Cannot parse '{value}' in column '{column}' (row {row})")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    pub fn configuration(what: impl Into<String>) -> Self {
        Self::Configuration { what: what.into() }
    }

    pub fn numeric(what: impl Into<String>) -> Self {
        Self::Numeric { what: what.into() }
    }
}

impl From<TrtError> for DataError {
    fn from(err: TrtError) -> Self {
        match err {
            TrtError::Configuration { what } => DataError::Configuration { what },
            TrtError::Numeric { what } => DataError::Numeric { what },
            other => DataError::Numeric {
                what: other.to_string(),
            },
        }
    }
}
