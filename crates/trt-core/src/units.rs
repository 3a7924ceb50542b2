// trt-core/src/units.rs

use uom::si::f64::{Length as UomLength, ThermalConductivity as UomThermalConductivity};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type ThermalConductivity = UomThermalConductivity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn w_per_mk(v: f64) -> ThermalConductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalConductivity::new::<watt_per_meter_kelvin>(v)
}

/// Value of a length in meters.
#[inline]
pub fn in_m(v: Length) -> f64 {
    use uom::si::length::meter;
    v.get::<meter>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borehole_radius_in_meters() {
        assert!((in_m(m(0.0665)) - 0.0665).abs() < 1e-15);
    }

    #[test]
    fn conductivity_keeps_si_value() {
        use uom::si::thermal_conductivity::watt_per_meter_kelvin;
        assert_eq!(w_per_mk(2.2).get::<watt_per_meter_kelvin>(), 2.2);
    }
}
