//! Runtime fill state for callers that cannot track it in the type.

use vc_fluids::{Gas, SiliconeOil};

use crate::coupling::{FilledCoupling, ViscousCoupling};
use crate::equilibrium::EquilibriumState;
use crate::error::{CouplingError, CouplingResult};
use crate::geometry::CouplingGeometry;
use crate::operating::OperatingPoint;

/// A coupling that may or may not be filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Coupling {
    Empty(ViscousCoupling),
    Filled(FilledCoupling),
}

impl From<ViscousCoupling> for Coupling {
    fn from(vc: ViscousCoupling) -> Self {
        Coupling::Empty(vc)
    }
}

impl From<FilledCoupling> for Coupling {
    fn from(vc: FilledCoupling) -> Self {
        Coupling::Filled(vc)
    }
}

impl Coupling {
    pub fn is_filled(&self) -> bool {
        matches!(self, Coupling::Filled(_))
    }

    pub fn geometry(&self) -> &CouplingGeometry {
        match self {
            Coupling::Empty(vc) => vc.geometry(),
            Coupling::Filled(vc) => vc.geometry(),
        }
    }

    pub fn operating_point(&self) -> &OperatingPoint {
        match self {
            Coupling::Empty(vc) => vc.operating_point(),
            Coupling::Filled(vc) => vc.operating_point(),
        }
    }

    pub fn set_operating_point(&mut self, operating: OperatingPoint) -> CouplingResult<()> {
        match self {
            Coupling::Empty(vc) => vc.set_operating_point(operating),
            Coupling::Filled(vc) => vc.set_operating_point(operating),
        }
    }

    /// Fill an empty coupling in place.
    ///
    /// A filled coupling is left untouched and [`CouplingError::AlreadyFilled`]
    /// is returned; [`drain`](Self::drain) first. On any other error the
    /// coupling stays empty.
    pub fn fill(
        &mut self,
        oil: SiliconeOil,
        gas: Gas,
        temperature: f64,
        pressure: f64,
        solved_gas_fraction: f64,
    ) -> CouplingResult<&FilledCoupling> {
        let Coupling::Empty(vc) = self else {
            return Err(CouplingError::AlreadyFilled);
        };
        let filled = vc
            .clone()
            .fill(oil, gas, temperature, pressure, solved_gas_fraction)?;
        *self = Coupling::Filled(filled);
        self.filled()
    }

    /// Empty the coupling. Draining an empty coupling does nothing.
    pub fn drain(&mut self) {
        if let Coupling::Filled(vc) = self {
            *self = Coupling::Empty(vc.clone().drain());
        }
    }

    pub fn filled(&self) -> CouplingResult<&FilledCoupling> {
        match self {
            Coupling::Filled(vc) => Ok(vc),
            Coupling::Empty(_) => Err(CouplingError::NotFilled),
        }
    }

    pub fn gas_weight(&self) -> CouplingResult<f64> {
        Ok(self.filled()?.gas_weight())
    }

    pub fn pressure_equilibrium(&self, temperature: f64) -> CouplingResult<f64> {
        self.filled()?.pressure_equilibrium(temperature)
    }

    pub fn equilibrium_state(&self, temperature: f64) -> CouplingResult<EquilibriumState> {
        self.filled()?.equilibrium_state(temperature)
    }

    pub fn pressure_gas_desolved(&self, temperature: f64) -> CouplingResult<f64> {
        self.filled()?.pressure_gas_desolved(temperature)
    }

    pub fn saturated_solved_gas(&self) -> CouplingResult<f64> {
        self.filled()?.saturated_solved_gas()
    }
}
