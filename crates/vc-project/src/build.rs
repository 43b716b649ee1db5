//! Turning a scenario into model objects.

use vc_coupling::{
    CRingPlay, CouplingGeometry, FilledCoupling, SweepOptions, ViscousCoupling,
};
use vc_fluids::{Gas, SiliconeOil};

use crate::ProjectResult;
use crate::schema::{CouplingDef, GasDef, OilDef, Scenario, SweepDef};

/// Built-in gas for a species key, if there is one.
pub fn preset_gas(species: &str) -> Option<Gas> {
    match species.trim().to_ascii_lowercase().as_str() {
        Gas::CO2 => Some(Gas::co2()),
        _ => None,
    }
}

impl CouplingDef {
    /// Calibrated geometry with this definition's overrides applied.
    pub fn geometry(&self) -> CouplingGeometry {
        let base = CouplingGeometry::new(self.fixed_volume);
        CouplingGeometry {
            atm_pressure: self.atm_pressure.unwrap_or(base.atm_pressure),
            lid_play: self.lid_play.unwrap_or(base.lid_play),
            c_ring_play: self
                .c_ring_play
                .map(|r| CRingPlay {
                    amplitude: r.amplitude,
                    rate: r.rate,
                })
                .unwrap_or(base.c_ring_play),
            lid_bending_coef: self.lid_bending_coef.unwrap_or(base.lid_bending_coef),
            bottom_bending_coef: self
                .bottom_bending_coef
                .unwrap_or(base.bottom_bending_coef),
            ..base
        }
    }
}

impl OilDef {
    pub fn oil(&self) -> ProjectResult<SiliconeOil> {
        Ok(SiliconeOil::new(self.weight, self.viscosity)?)
    }
}

impl GasDef {
    pub fn gas(&self) -> ProjectResult<Gas> {
        match self {
            GasDef::Species { species } => preset_gas(species).ok_or_else(|| {
                crate::ValidationError::UnknownSpecies {
                    species: species.clone(),
                }
                .into()
            }),
            GasDef::Custom {
                name,
                r_specific,
                density,
            } => Ok(Gas::new(name, *r_specific, *density)?),
        }
    }
}

impl SweepDef {
    pub fn options(&self) -> SweepOptions {
        SweepOptions {
            from: self.from,
            to: self.to,
            points: self.points,
        }
    }
}

impl Scenario {
    /// The empty coupling described by this scenario.
    pub fn empty_coupling(&self) -> ProjectResult<ViscousCoupling> {
        Ok(ViscousCoupling::new(self.coupling.geometry())?)
    }

    /// The coupling charged as the fill block describes.
    pub fn filled_coupling(&self) -> ProjectResult<FilledCoupling> {
        let fill = &self.fill;
        Ok(self.empty_coupling()?.fill(
            self.oil.oil()?,
            self.gas.gas()?,
            fill.temperature,
            fill.pressure,
            fill.solved_gas_fraction,
        )?)
    }

    /// Sweep block, or the full CO₂ table range when absent.
    pub fn sweep_options(&self) -> SweepOptions {
        self.sweep.map(|s| s.options()).unwrap_or_default()
    }
}
