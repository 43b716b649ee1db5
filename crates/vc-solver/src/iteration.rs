//! The bounded iteration loop shared by every solver in this crate.

use crate::error::{SolverError, SolverResult};

/// How a residual is compared against the tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConvergenceTest {
    /// `|residual| < tol`
    #[default]
    Absolute,
    /// `residual < tol`; any overshoot past the target counts as converged.
    OneSided,
}

impl ConvergenceTest {
    pub fn passes(self, residual: f64, tol: f64) -> bool {
        match self {
            ConvergenceTest::Absolute => residual.abs() < tol,
            ConvergenceTest::OneSided => residual < tol,
        }
    }
}

/// Iteration bound and stopping rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationConfig {
    /// Maximum number of step evaluations
    pub max_iterations: usize,
    /// Tolerance on the residual
    pub tolerance: f64,
    pub test: ConvergenceTest,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance: 1e-3,
            test: ConvergenceTest::Absolute,
        }
    }
}

impl IterationConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig {
                what: "max_iterations must be at least 1",
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SolverError::InvalidConfig {
                what: "tolerance must be positive",
            });
        }
        Ok(())
    }
}

/// Outcome of one step evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Accept `value` as the solution.
    Done { value: f64, residual: f64 },
    /// Carry on from `next`.
    Next { next: f64, residual: f64 },
}

/// Converged value and how it was reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationReport {
    pub value: f64,
    /// Step evaluations used, including the converging one
    pub iterations: usize,
    /// Residual reported by the converging step
    pub residual: f64,
}

/// Run `step` from `x0` until it reports [`Step::Done`], at most
/// `max_iterations` times.
///
/// Non-finite iterates end the loop immediately with
/// [`SolverError::NonFinite`]; running out of iterations yields
/// [`SolverError::ConvergenceFailed`].
pub fn bounded_iterate<F>(
    x0: f64,
    max_iterations: usize,
    what: &'static str,
    mut step: F,
) -> SolverResult<IterationReport>
where
    F: FnMut(f64) -> SolverResult<Step>,
{
    let mut x = x0;
    let mut residual = f64::NAN;

    for iteration in 1..=max_iterations {
        match step(x)? {
            Step::Done {
                value,
                residual: r,
            } => {
                if !value.is_finite() {
                    return Err(SolverError::NonFinite { what, iteration });
                }
                tracing::debug!(solver = what, iteration, value, residual = r, "converged");
                return Ok(IterationReport {
                    value,
                    iterations: iteration,
                    residual: r,
                });
            }
            Step::Next { next, residual: r } => {
                tracing::debug!(solver = what, iteration, x, next, residual = r, "step");
                if !next.is_finite() {
                    tracing::warn!(solver = what, iteration, x, "non-finite iterate");
                    return Err(SolverError::NonFinite { what, iteration });
                }
                x = next;
                residual = r;
            }
        }
    }

    tracing::warn!(
        solver = what,
        max_iterations,
        last = x,
        residual,
        "iteration limit reached"
    );
    Err(SolverError::ConvergenceFailed {
        what,
        iterations: max_iterations,
        last: x,
        residual,
    })
}
