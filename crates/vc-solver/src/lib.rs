//! Bounded scalar solvers for the viscous coupling model.
//!
//! Both model solvers (pressure from volume, gas equilibrium) share one loop:
//! evaluate, compare against a tolerance, take a step, give up after a fixed
//! number of iterations. `bounded_iterate` is that loop; `fixed_point` and
//! `damped_newton` are the two step rules built on it.

pub mod error;
pub mod fixed_point;
pub mod iteration;
pub mod newton;

pub use error::{SolverError, SolverResult};
pub use fixed_point::fixed_point;
pub use iteration::{ConvergenceTest, IterationConfig, IterationReport, Step, bounded_iterate};
pub use newton::{NewtonConfig, damped_newton};
