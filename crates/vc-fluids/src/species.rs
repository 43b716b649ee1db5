//! Gas species definitions.

use std::fmt;

use crate::error::{FluidError, FluidResult};

/// A gas charged into the coupling.
///
/// The name is the identity key used for solubility lookups; it is stored
/// trimmed and lower-case so `"CO2"` and `"co2"` resolve to the same table.
#[derive(Debug, Clone, PartialEq)]
pub struct Gas {
    name: String,
    r_specific: f64,
    density: f64,
}

impl Gas {
    /// Identity key of carbon dioxide.
    pub const CO2: &'static str = "co2";

    /// Calibrated specific gas constant of CO₂ used by the coupling model.
    pub const CO2_R_SPECIFIC: f64 = 188.92;

    /// CO₂ density at reference conditions [g/mL].
    pub const CO2_DENSITY: f64 = 1.98 / 1000.0;

    /// Create a gas species.
    ///
    /// - `r_specific`: specific gas constant, must be positive
    /// - `density`: density at reference conditions [g/mL], must be non-negative
    pub fn new(name: impl AsRef<str>, r_specific: f64, density: f64) -> FluidResult<Self> {
        let name = normalize_name(name.as_ref());
        if name.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "gas name must not be empty",
            });
        }
        if !r_specific.is_finite() || r_specific <= 0.0 {
            return Err(FluidError::InvalidArg {
                what: "specific gas constant must be positive",
            });
        }
        vc_core::ensure_non_negative(density, "gas density")?;
        Ok(Self {
            name,
            r_specific,
            density,
        })
    }

    /// Carbon dioxide.
    pub fn co2() -> Self {
        Self {
            name: Self::CO2.to_string(),
            r_specific: Self::CO2_R_SPECIFIC,
            density: Self::CO2_DENSITY,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn r_specific(&self) -> f64 {
        self.r_specific
    }

    /// Density at reference conditions [g/mL].
    pub fn density(&self) -> f64 {
        self.density
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gas {}", self.name)
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn co2_constants() {
        let gas = Gas::co2();
        assert_eq!(gas.name(), "co2");
        assert_eq!(gas.r_specific(), 188.92);
        assert!((gas.density() - 0.00198).abs() < 1e-15);
    }

    #[test]
    fn names_are_normalized() {
        let gas = Gas::new("  CO2 ", 188.92, 0.00198).unwrap();
        assert_eq!(gas.name(), "co2");
        assert_eq!(gas, Gas::co2());
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(Gas::new("", 1.0, 0.0).is_err());
        assert!(Gas::new("x", 0.0, 0.0).is_err());
        assert!(Gas::new("x", f64::NAN, 0.0).is_err());
        assert!(Gas::new("x", 1.0, -0.1).is_err());
        assert!(Gas::new("x", 1.0, 0.0).is_ok());
    }

    #[test]
    fn display_name() {
        assert_eq!(Gas::co2().to_string(), "gas co2");
    }
}
