use crate::TrtError;

/// Floating point type used throughout system
pub type Real = f64;

/// Euler-Mascheroni constant as used by the line-source solution.
pub const EULER_GAMMA: Real = 0.5772156649;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TrtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TrtError::NonFinite { what, value: v })
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[Real]) -> Option<Real> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<Real>() / values.len() as Real)
}
