//! Damped one-dimensional Newton iteration with a lower bound.

use crate::error::{SolverError, SolverResult};
use crate::iteration::{IterationConfig, IterationReport, Step, bounded_iterate};

/// Newton solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonConfig {
    pub iteration: IterationConfig,
    /// Forward-difference step for the gradient estimate
    pub fd_step: f64,
    /// Iterates are clamped to at least this value after every update
    pub lower_bound: Option<f64>,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            iteration: IterationConfig::default(),
            fd_step: 0.01,
            lower_bound: None,
        }
    }
}

/// Solve `model(x) = target` from `x0`.
///
/// Each step evaluates `error = target - model(x)`, stops if `error` passes
/// the convergence test, otherwise moves `x += error / gradient` with the
/// gradient taken as a forward difference of width `fd_step`, then clamps to
/// `lower_bound`.
pub fn damped_newton<M>(
    x0: f64,
    target: f64,
    config: &NewtonConfig,
    what: &'static str,
    mut model: M,
) -> SolverResult<IterationReport>
where
    M: FnMut(f64) -> SolverResult<f64>,
{
    config.iteration.validate()?;
    if !config.fd_step.is_finite() || config.fd_step <= 0.0 {
        return Err(SolverError::InvalidConfig {
            what: "fd_step must be positive",
        });
    }
    let tol = config.iteration.tolerance;
    let h = config.fd_step;

    bounded_iterate(x0, config.iteration.max_iterations, what, |x| {
        let y = model(x)?;
        let error = target - y;
        if config.iteration.test.passes(error, tol) {
            return Ok(Step::Done {
                value: x,
                residual: error,
            });
        }

        let gradient = (model(x + h)? - y) / h;
        if !gradient.is_finite() || gradient == 0.0 {
            return Err(SolverError::DegenerateGradient {
                what,
                at: x,
                gradient,
            });
        }

        let mut next = x + error / gradient;
        // f64::max would swallow a NaN, which must surface as NonFinite
        if let Some(lo) = config.lower_bound.filter(|_| next.is_finite()) {
            next = next.max(lo);
        }
        Ok(Step::Next {
            next,
            residual: error,
        })
    })
}
