//! Error types for coupling operations.

use thiserror::Error;
use vc_core::error::VcError;
use vc_fluids::FluidError;
use vc_solver::SolverError;

/// Errors raised by the coupling model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CouplingError {
    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Coupling has not been filled")]
    NotFilled,

    #[error("Coupling is already filled; drain it before filling again")]
    AlreadyFilled,

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type CouplingResult<T> = Result<T, CouplingError>;

impl CouplingError {
    /// True when an iterative solver gave up.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, CouplingError::Solver(e) if e.is_convergence_failure())
    }
}

impl From<VcError> for CouplingError {
    fn from(e: VcError) -> Self {
        match e {
            VcError::NonFinite { what, .. }
            | VcError::InvalidArg { what }
            | VcError::OutOfRange { what, .. }
            | VcError::Invariant { what } => CouplingError::InvalidArg { what },
        }
    }
}

impl From<CouplingError> for VcError {
    fn from(e: CouplingError) -> Self {
        match e {
            CouplingError::Fluid(e) => e.into(),
            CouplingError::Solver(e) => e.into(),
            CouplingError::NotFilled => VcError::Invariant {
                what: "coupling not filled",
            },
            CouplingError::AlreadyFilled => VcError::Invariant {
                what: "coupling already filled",
            },
            CouplingError::InvalidArg { what } => VcError::InvalidArg { what },
        }
    }
}
