//! Gas equilibrium between oil and headspace.
//!
//! At temperature `t` the gas charge `m` splits into a dissolved part,
//! proportional to pressure, and a free part obeying the ideal-gas law in the
//! headspace `V(p) - V_oil(t)`:
//!
//! ```text
//! m = s(t) · m_oil · p + p · (V(p) - V_oil) / (R · T)
//! ```
//!
//! Because `V` depends on `p`, the balance is solved by fixed-point iteration:
//! evaluate the headspace at the last pressure, solve the linear balance for a
//! new pressure, repeat. The pressure never drops below the floor set by the
//! oil's own expansion.

use vc_core::{ensure_finite, kelvin_from_celsius};
use vc_solver::{ConvergenceTest, IterationConfig, fixed_point};

use crate::coupling::FilledCoupling;
use crate::error::CouplingResult;
use crate::geometry::{ALMOST_VACUUM, LIMIT_ERROR, MAX_ITERATION};

/// Converged equilibrium and the quantities behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumState {
    /// [°C]
    pub temperature: f64,
    /// Equilibrium pressure [bar]
    pub pressure: f64,
    /// Minimum pressure forced by oil expansion [bar]
    pub floor_pressure: f64,
    /// [cm³]
    pub oil_volume: f64,
    /// Chamber volume at the equilibrium pressure [cm³]
    pub coupling_volume: f64,
    /// Headspace left to free gas [cm³]
    pub gas_volume: f64,
    /// Gas dissolved in the oil [g]
    pub gas_dissolved: f64,
    /// Free gas in the headspace [g]
    pub gas_free: f64,
    pub iterations: usize,
}

impl EquilibriumState {
    /// True when the oil's expansion, not the gas, sets the pressure.
    pub fn is_oil_limited(&self) -> bool {
        self.pressure == self.floor_pressure && self.floor_pressure > ALMOST_VACUUM
    }
}

impl FilledCoupling {
    /// Minimum pressure [bar] at `temperature`, set by the oil alone.
    ///
    /// If the expanded oil exceeds what the chamber offers at atmospheric
    /// pressure it must deform the housing, and the pressure doing so is the
    /// floor. Otherwise the floor is [`ALMOST_VACUUM`].
    pub fn pressure_gas_desolved(&self, temperature: f64) -> CouplingResult<f64> {
        let oil_volume = self.oil.volume(temperature);
        let oil_extra_volume = oil_volume - self.geometry.zero_pressure_volume();
        if oil_extra_volume > 0.0 {
            return self.geometry.pressure_from_volume(oil_volume);
        }
        Ok(ALMOST_VACUUM)
    }

    /// Equilibrium pressure [bar] at `temperature` [°C].
    pub fn pressure_equilibrium(&self, temperature: f64) -> CouplingResult<f64> {
        Ok(self.equilibrium_state(temperature)?.pressure)
    }

    /// Equilibrium pressure at `temperature` with its gas/volume breakdown.
    pub fn equilibrium_state(&self, temperature: f64) -> CouplingResult<EquilibriumState> {
        ensure_finite(temperature, "temperature")?;
        let gas_solvability = self.gas_solvability(temperature)?;
        let oil_volume = self.oil.volume(temperature);
        let floor_pressure = self.pressure_gas_desolved(temperature)?;
        let rt = self.gas.r_specific() * kelvin_from_celsius(temperature);
        let dissolved_per_bar = gas_solvability * self.oil.weight();
        let gas_weight = self.gas_weight();

        let config = IterationConfig {
            max_iterations: MAX_ITERATION,
            tolerance: LIMIT_ERROR,
            test: ConvergenceTest::Absolute,
        };
        let report = fixed_point(floor_pressure, &config, "gas equilibrium", |pressure_last| {
            let gas_volume = self.geometry.volume(pressure_last) - oil_volume;
            let candidate = gas_weight / (dissolved_per_bar + gas_volume / rt);
            tracing::debug!(pressure_last, candidate, gas_volume, "equilibrium candidate");
            if !candidate.is_finite() {
                return Ok(candidate);
            }
            Ok(candidate.max(floor_pressure))
        })?;

        let pressure = report.value;
        let coupling_volume = self.geometry.volume(pressure);
        let gas_volume = coupling_volume - oil_volume;
        Ok(EquilibriumState {
            temperature,
            pressure,
            floor_pressure,
            oil_volume,
            coupling_volume,
            gas_volume,
            gas_dissolved: dissolved_per_bar * pressure,
            gas_free: pressure * gas_volume / rt,
            iterations: report.iterations,
        })
    }
}
