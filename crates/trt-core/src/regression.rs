//! Ordinary least-squares fit of a straight line.

use crate::error::{TrtError, TrtResult};
use crate::numeric::{Real, ensure_finite, mean};

/// Coefficients of `y ≈ slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: Real,
    pub intercept: Real,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn eval(&self, x: Real) -> Real {
        self.slope * x + self.intercept
    }
}

/// Fit `y ≈ a·x + b` minimizing the total squared residual.
///
/// Sums are taken about the sample means, which keeps the fit accurate when
/// `x` is clustered far from zero (log-time typically sits around 10..13).
///
/// # Errors
/// - `LengthMismatch` if `x` and `y` differ in length
/// - `Numeric` if fewer than two samples are given or all `x` coincide
pub fn linear_fit(x: &[Real], y: &[Real]) -> TrtResult<LinearFit> {
    if x.len() != y.len() {
        return Err(TrtError::LengthMismatch {
            what: "regression samples",
            expected: x.len(),
            got: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(TrtError::numeric(format!(
            "linear regression needs at least 2 samples, got {}",
            x.len()
        )));
    }

    // Non-empty per the check above.
    let x_mean = mean(x).unwrap_or(Real::NAN);
    let y_mean = mean(y).unwrap_or(Real::NAN);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        sxx += dx * dx;
        sxy += dx * (yi - y_mean);
    }

    if sxx == 0.0 {
        return Err(TrtError::numeric(
            "linear regression is undefined for constant abscissa",
        ));
    }
    let sxx = ensure_finite(sxx, "regression sum of squares")?;
    let sxy = ensure_finite(sxy, "regression cross products")?;

    let slope = sxy / sxx;
    Ok(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}
