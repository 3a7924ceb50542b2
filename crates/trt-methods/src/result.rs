//! Output record shared by all analysis methods.

use serde::{Deserialize, Serialize};
use trt_core::units::{ThermalConductivity, w_per_mk};

/// Borehole thermal resistance and ground thermal conductivity.
///
/// Created once by a method; read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    borehole_resistance: f64,
    thermal_conductivity: f64,
}

impl MethodResult {
    pub fn new(borehole_resistance: f64, thermal_conductivity: f64) -> Self {
        Self {
            borehole_resistance,
            thermal_conductivity,
        }
    }

    /// Effective borehole thermal resistance (m·K/W).
    pub fn borehole_resistance(&self) -> f64 {
        self.borehole_resistance
    }

    /// Effective ground thermal conductivity (W/(m·K)).
    pub fn thermal_conductivity(&self) -> f64 {
        self.thermal_conductivity
    }

    pub fn thermal_conductivity_si(&self) -> ThermalConductivity {
        w_per_mk(self.thermal_conductivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;

    #[test]
    fn accessors() {
        let r = MethodResult::new(0.11, 2.2);
        assert_eq!(r.borehole_resistance(), 0.11);
        assert_eq!(r.thermal_conductivity(), 2.2);
        assert!((r.thermal_conductivity_si().get::<watt_per_meter_kelvin>() - 2.2).abs() < 1e-12);
    }

    #[test]
    fn serializes_both_fields() {
        let value = serde_json::to_value(MethodResult::new(0.1, 2.0)).unwrap();
        assert_eq!(value["borehole_resistance"], 0.1);
        assert_eq!(value["thermal_conductivity"], 2.0);
    }
}
