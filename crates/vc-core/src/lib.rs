//! vc-core: stable foundation for the viscous coupling model.
//!
//! Contains:
//! - units (uom SI types + constructors for the model's bar/°C/cm³/g units)
//! - numeric (finiteness and range checks, interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VcError, VcResult};
pub use numeric::*;
pub use units::*;
