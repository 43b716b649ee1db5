//! Gas/oil model of a viscous coupling.
//!
//! Provides:
//! - Pressure-dependent chamber volume and its inverse
//! - Oil and gas fill with the resulting gas charge
//! - Equilibrium pressure at any temperature, with the oil-expansion floor
//! - Temperature sweeps of the equilibrium
//!
//! ```
//! use vc_coupling::ViscousCoupling;
//! use vc_fluids::{Gas, SiliconeOil};
//!
//! let oil = SiliconeOil::new(85.0, 1000.0)?;
//! let vc = ViscousCoupling::with_fixed_volume(100.0)?.fill(oil, Gas::co2(), 25.0, 2.0, 1.0)?;
//! let p = vc.pressure_equilibrium(80.0)?;
//! assert!(p > 2.0);
//! # Ok::<(), vc_coupling::CouplingError>(())
//! ```

pub mod coupling;
pub mod equilibrium;
pub mod error;
pub mod geometry;
pub mod operating;
pub mod state;
pub mod sweep;

pub use coupling::{
    FillConditions, FillReport, FilledCoupling, REPORT_PRESSURE, REPORT_TEMPERATURE,
    ViscousCoupling,
};
pub use equilibrium::EquilibriumState;
pub use error::{CouplingError, CouplingResult};
pub use geometry::{ALMOST_VACUUM, CRingPlay, CouplingGeometry, LIMIT_ERROR, MAX_ITERATION};
pub use operating::OperatingPoint;
pub use state::Coupling;
pub use sweep::{SweepOptions, linear_temperatures};
