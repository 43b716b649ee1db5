//! Current operating conditions of a coupling.

use vc_core::{ensure_finite, ensure_non_negative};

use crate::error::CouplingResult;

/// Temperature, pressure and slip speed the coupling is currently at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// [°C]
    pub temperature: f64,
    /// [bar]
    pub pressure: f64,
    /// Speed difference across the coupling [rpm]
    pub slip_speed: f64,
}

impl OperatingPoint {
    /// 25 °C, atmospheric pressure, no slip.
    pub fn at_rest(atm_pressure: f64) -> Self {
        Self {
            temperature: 25.0,
            pressure: atm_pressure,
            slip_speed: 0.0,
        }
    }

    pub fn validate(&self) -> CouplingResult<()> {
        ensure_finite(self.temperature, "operating temperature")?;
        ensure_non_negative(self.pressure, "operating pressure")?;
        ensure_finite(self.slip_speed, "slip speed")?;
        Ok(())
    }
}
