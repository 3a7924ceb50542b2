//! Infinite line source (ILS) analysis.
//!
//! Once early transients have decayed, the line-source solution makes the mean
//! fluid temperature linear in the logarithm of time:
//!
//! ```text
//! Tf(t) ≈ a·ln(t) + b
//! ks = Q / (4·π·L·a)
//! Rb = (b − T0)·L/Q − 1/(4·π·ks) · (ln(4·ks / (ρc·rb²)) − γ)
//! ```
//!
//! with `Q` the average injected power, `L` the borehole length, `rb` the
//! borehole radius, `ρc` the volumetric heat capacity of the ground, `T0` the
//! undisturbed ground temperature and `γ` the Euler-Mascheroni constant
//! (Gehlin, 2002).

use std::f64::consts::PI;

use trt_core::numeric::EULER_GAMMA;
use trt_core::regression::{LinearFit, linear_fit};
use trt_core::units::{Length, in_m};
use trt_data::TrtData;

use crate::error::{EstimateResult, MethodError};
use crate::result::MethodResult;
use crate::traits::Method;

/// Borehole and ground constants required by the line-source model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlsParameters {
    borehole_length: Length,
    borehole_radius: Length,
    /// J/(m³·K)
    volumetric_heat_capacity: f64,
}

impl IlsParameters {
    /// Create line-source parameters.
    ///
    /// # Arguments
    ///
    /// * `borehole_length` - Active length of the borehole heat exchanger
    /// * `borehole_radius` - Borehole radius
    /// * `volumetric_heat_capacity` - Ground volumetric heat capacity in J/(m³·K)
    ///
    /// # Errors
    ///
    /// `InvalidArg` unless every value is finite and strictly positive.
    pub fn new(
        borehole_length: Length,
        borehole_radius: Length,
        volumetric_heat_capacity: f64,
    ) -> EstimateResult<Self> {
        check_positive("borehole length", in_m(borehole_length))?;
        check_positive("borehole radius", in_m(borehole_radius))?;
        check_positive("volumetric heat capacity", volumetric_heat_capacity)?;
        Ok(Self {
            borehole_length,
            borehole_radius,
            volumetric_heat_capacity,
        })
    }

    /// Same as [`IlsParameters::new`] with lengths in meters.
    pub fn from_si(
        borehole_length_m: f64,
        borehole_radius_m: f64,
        volumetric_heat_capacity: f64,
    ) -> EstimateResult<Self> {
        Self::new(
            trt_core::units::m(borehole_length_m),
            trt_core::units::m(borehole_radius_m),
            volumetric_heat_capacity,
        )
    }

    pub fn borehole_length(&self) -> Length {
        self.borehole_length
    }

    pub fn borehole_radius(&self) -> Length {
        self.borehole_radius
    }

    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.volumetric_heat_capacity
    }
}

fn check_positive(what: &str, value: f64) -> EstimateResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MethodError::invalid_arg(format!(
            "{what} must be finite and positive, got {value}"
        )))
    }
}

/// Infinite line source estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ils {
    params: IlsParameters,
}

impl Ils {
    pub fn new(params: IlsParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IlsParameters {
        &self.params
    }

    /// Least-squares line of windowed temperature over log-time.
    ///
    /// # Errors
    /// `Numeric` if the window holds fewer than two samples, a windowed time is
    /// not positive, or the log-times are all equal.
    pub fn fit(&self, data: &TrtData) -> EstimateResult<LinearFit> {
        let x = data.log_time_window()?;
        let y = data.temperature_window();
        if x.len() < 2 {
            return Err(MethodError::numeric(format!(
                "steady-state window holds {} samples, the regression needs at least 2",
                x.len()
            )));
        }
        Ok(linear_fit(&x, y)?)
    }

    /// Estimate ground thermal conductivity and borehole thermal resistance.
    ///
    /// # Errors
    /// - `Configuration` if the store has no undisturbed ground temperature
    /// - `Numeric` for a degenerate window, a zero slope, or non-finite outputs
    pub fn estimate(&self, data: &TrtData) -> EstimateResult<MethodResult> {
        let t0 = data.undisturbed_ground_temperature().ok_or_else(|| {
            MethodError::configuration("the ILS method needs the undisturbed ground temperature")
        })?;

        let LinearFit { slope, intercept } = self.fit(data)?;
        if slope == 0.0 {
            return Err(MethodError::numeric(
                "temperature shows no trend over log-time (zero slope)",
            ));
        }

        let q = data.average_power()?;
        let length = in_m(self.params.borehole_length);
        let radius = in_m(self.params.borehole_radius);
        let rho_c = self.params.volumetric_heat_capacity;

        let ks = q / (4.0 * PI * length * slope);
        let rb = (intercept - t0) * length / q
            - 1.0 / (4.0 * PI * ks) * ((4.0 * ks / rho_c / (radius * radius)).ln() - EULER_GAMMA);

        tracing::debug!(
            start_index = data.start_index(),
            samples = data.window_len(),
            slope,
            intercept,
            average_power = q,
            thermal_conductivity = ks,
            borehole_resistance = rb,
            "ILS estimate"
        );

        if !ks.is_finite() || !rb.is_finite() {
            return Err(MethodError::numeric(format!(
                "ILS produced non-finite properties (ks={ks}, Rb={rb})"
            )));
        }

        Ok(MethodResult::new(rb, ks))
    }
}

impl Method for Ils {
    fn name(&self) -> &str {
        "ILS"
    }

    fn evaluate(&self, data: &TrtData) -> EstimateResult<MethodResult> {
        self.estimate(data)
    }
}
