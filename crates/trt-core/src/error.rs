use thiserror::Error;

pub type TrtResult<T> = Result<T, TrtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrtError {
    /// Incomplete or contradictory configuration supplied by the caller.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// Loaded data is numerically degenerate for the requested computation.
    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Length mismatch: {what} (expected={expected}, got={got})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

impl TrtError {
    pub fn configuration(what: impl Into<String>) -> Self {
        Self::Configuration { what: what.into() }
    }

    pub fn numeric(what: impl Into<String>) -> Self {
        Self::Numeric { what: what.into() }
    }
}
