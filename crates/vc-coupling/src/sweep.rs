//! Equilibrium pressure over a range of temperatures.

use vc_core::{ensure_finite, lerp};

use crate::coupling::FilledCoupling;
use crate::equilibrium::EquilibriumState;
use crate::error::{CouplingError, CouplingResult};

/// Options for a linear temperature sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepOptions {
    /// First temperature [°C]
    pub from: f64,
    /// Last temperature [°C]
    pub to: f64,
    /// Number of temperatures, end points included
    pub points: usize,
}

impl Default for SweepOptions {
    /// The full range of the CO₂ solubility table in 25 °C steps.
    fn default() -> Self {
        Self {
            from: -25.0,
            to: 200.0,
            points: 10,
        }
    }
}

impl SweepOptions {
    pub fn temperatures(&self) -> CouplingResult<Vec<f64>> {
        linear_temperatures(self.from, self.to, self.points)
    }
}

/// `points` evenly spaced temperatures from `start` to `end`, both included.
pub fn linear_temperatures(start: f64, end: f64, points: usize) -> CouplingResult<Vec<f64>> {
    ensure_finite(start, "sweep start")?;
    ensure_finite(end, "sweep end")?;
    if points < 2 {
        return Err(CouplingError::InvalidArg {
            what: "sweep needs at least two points",
        });
    }
    if start == end {
        return Err(CouplingError::InvalidArg {
            what: "sweep bounds must differ",
        });
    }
    let last = (points - 1) as f64;
    Ok((0..points)
        .map(|i| lerp(start, end, i as f64 / last))
        .collect())
}

impl FilledCoupling {
    /// Equilibrium state at each temperature, in order.
    ///
    /// Stops at the first temperature that fails.
    pub fn sweep(&self, temperatures: &[f64]) -> CouplingResult<Vec<EquilibriumState>> {
        let states = temperatures
            .iter()
            .map(|&t| self.equilibrium_state(t))
            .collect::<CouplingResult<Vec<_>>>()?;
        tracing::info!(points = states.len(), "temperature sweep done");
        Ok(states)
    }

    pub fn sweep_with(&self, opts: &SweepOptions) -> CouplingResult<Vec<EquilibriumState>> {
        self.sweep(&opts.temperatures()?)
    }
}
