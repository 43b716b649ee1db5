//! Plain fixed-point iteration `x ← g(x)`.

use crate::error::SolverResult;
use crate::iteration::{IterationConfig, IterationReport, Step, bounded_iterate};

/// Iterate `x ← g(x)` from `x0` until successive iterates differ by less than
/// the tolerance.
///
/// The residual handed to the convergence test is `g(x) - x`, and the
/// converged value is the last `g(x)`.
pub fn fixed_point<G>(
    x0: f64,
    config: &IterationConfig,
    what: &'static str,
    mut g: G,
) -> SolverResult<IterationReport>
where
    G: FnMut(f64) -> SolverResult<f64>,
{
    config.validate()?;
    bounded_iterate(x0, config.max_iterations, what, |x| {
        let next = g(x)?;
        let residual = next - x;
        if config.test.passes(residual, config.tolerance) {
            Ok(Step::Done {
                value: next,
                residual,
            })
        } else {
            Ok(Step::Next { next, residual })
        }
    })
}
