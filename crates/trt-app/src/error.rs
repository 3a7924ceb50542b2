//! Error types for the trt-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives frontends one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read analysis file: {path}")]
    AnalysisFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write analysis file: {path}")]
    AnalysisFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Analysis file error: {0}")]
    AnalysisFile(String),

    #[error("Analysis validation failed: {0}")]
    Validation(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Method error: {0}")]
    Method(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for trt-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<trt_data::DataError> for AppError {
    fn from(err: trt_data::DataError) -> Self {
        AppError::Data(err.to_string())
    }
}

impl From<trt_methods::MethodError> for AppError {
    fn from(err: trt_methods::MethodError) -> Self {
        AppError::Method(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON error: {err}"))
    }
}
