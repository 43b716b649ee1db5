//! Error types for solver operations.

use thiserror::Error;
use vc_core::error::VcError;

/// Errors that can occur while iterating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error(
        "{what} did not converge after {iterations} iterations (last iterate {last}, residual {residual})"
    )]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
        last: f64,
        residual: f64,
    },

    #[error("{what} produced a non-finite iterate at iteration {iteration}")]
    NonFinite { what: &'static str, iteration: usize },

    #[error("{what} has a degenerate gradient ({gradient}) at {at}")]
    DegenerateGradient {
        what: &'static str,
        at: f64,
        gradient: f64,
    },

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Model error: {message}")]
    Model { message: String },
}

impl SolverError {
    /// True for every way an iteration can fail to reach its tolerance.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(
            self,
            SolverError::ConvergenceFailed { .. }
                | SolverError::NonFinite { .. }
                | SolverError::DegenerateGradient { .. }
        )
    }
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for VcError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ConvergenceFailed { what, .. } => VcError::Invariant { what },
            SolverError::NonFinite { what, .. } => VcError::NonFinite {
                what,
                value: f64::NAN,
            },
            SolverError::DegenerateGradient { what, .. } => VcError::Invariant { what },
            SolverError::InvalidConfig { what } => VcError::InvalidArg { what },
            SolverError::Model { message: _ } => VcError::Invariant { what: "model" },
        }
    }
}
