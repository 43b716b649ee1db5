//! Silicone oil filling the coupling.

use std::fmt;

use crate::error::{FluidError, FluidResult};

/// Silicone oil charge.
///
/// Volume follows the expansion curve published for Wacker AK silicone fluids:
///
/// ```text
/// V(t) = m / 0.97 * (1 + 0.00092 (t - 25) + 0.00000045 (t - 25)²)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiliconeOil {
    weight: f64,
    viscosity: f64,
}

impl SiliconeOil {
    /// Density at the reference temperature [g/mL].
    pub const REFERENCE_DENSITY: f64 = 0.97;
    /// Reference temperature of the expansion polynomial [°C].
    pub const REFERENCE_TEMPERATURE: f64 = 25.0;
    pub const EXPANSION_LINEAR: f64 = 0.00092;
    pub const EXPANSION_QUADRATIC: f64 = 0.00000045;

    /// Create an oil charge of `weight` grams.
    ///
    /// `viscosity` is descriptive only and does not enter any calculation.
    pub fn new(weight: f64, viscosity: f64) -> FluidResult<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(FluidError::InvalidArg {
                what: "oil weight must be positive",
            });
        }
        vc_core::ensure_non_negative(viscosity, "oil viscosity")?;
        Ok(Self { weight, viscosity })
    }

    /// Oil mass [g].
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn viscosity(&self) -> f64 {
        self.viscosity
    }

    /// Oil volume [cm³] at temperature `t` [°C].
    pub fn volume(&self, t: f64) -> f64 {
        let dt = t - Self::REFERENCE_TEMPERATURE;
        self.weight
            * (1.0 / Self::REFERENCE_DENSITY)
            * (1.0 + Self::EXPANSION_LINEAR * dt + Self::EXPANSION_QUADRATIC * dt.powi(2))
    }
}

impl fmt::Display for SiliconeOil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "silicone oil, {}g, {}vsc.", self.weight, self.viscosity)
    }
}
