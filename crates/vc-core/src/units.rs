// vc-core/src/units.rs
//
// The coupling model is calibrated in bar, °C, cm³ and g, so its public API
// takes plain `f64` in those units. These helpers convert at the edges.

use uom::si::f64::{
    Mass as UomMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Mass = UomMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn grams(v: f64) -> Mass {
    use uom::si::mass::gram;
    Mass::new::<gram>(v)
}

/// Absolute temperature in kelvin for a temperature in °C.
#[inline]
pub fn kelvin_from_celsius(t_c: f64) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    degc(t_c).get::<kelvin>()
}

/// Pressure in bar expressed in kPa.
#[inline]
pub fn kpa_from_bar(p_bar: f64) -> f64 {
    use uom::si::pressure::kilopascal;
    bar(p_bar).get::<kilopascal>()
}

/// Pressure in bar expressed in psi.
#[inline]
pub fn psi_from_bar(p_bar: f64) -> f64 {
    use uom::si::pressure::psi;
    bar(p_bar).get::<psi>()
}

/// Mass in g expressed in mg.
#[inline]
pub fn mg_from_grams(m_g: f64) -> f64 {
    use uom::si::mass::milligram;
    grams(m_g).get::<milligram>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = bar(2.0);
        let _t = degc(25.0);
        let _m = grams(85.0);
    }

    #[test]
    fn celsius_to_kelvin() {
        assert!((kelvin_from_celsius(25.0) - 298.15).abs() < 1e-9);
        assert!((kelvin_from_celsius(-KELVIN_OFFSET)).abs() < 1e-9);
    }

    #[test]
    fn bar_conversions() {
        assert!((kpa_from_bar(1.0) - 100.0).abs() < 1e-9);
        assert!((psi_from_bar(1.0) - 14.503_773_8).abs() < 1e-4);
    }

    #[test]
    fn gram_to_milligram() {
        assert!((mg_from_grams(0.64) - 640.0).abs() < 1e-9);
    }
}
