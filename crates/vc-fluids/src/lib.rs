//! vc-fluids: fluid property provider for the viscous coupling model.
//!
//! Provides:
//! - Gas species definitions (`Gas`, with CO₂ built in)
//! - Silicone oil with its thermal volume expansion
//! - Solubility tables with piecewise-linear interpolation
//! - A solubility catalog keyed by gas name
//!
//! # Architecture
//!
//! Solubility is looked up through `SolubilityCatalog`, a map from gas name to
//! `SolubilityTable`. The coupling model only ever asks the catalog, so adding a
//! gas means registering one more table; no solver code changes.
//!
//! # Example
//!
//! ```
//! use vc_fluids::{Gas, SiliconeOil, solubility_coefficient};
//!
//! let oil = SiliconeOil::new(85.0, 1000.0).unwrap();
//! let gas = Gas::co2();
//!
//! let k = solubility_coefficient(gas.name(), 25.0).unwrap();
//! assert_eq!(k, 1.9);
//!
//! let ks = solubility_coefficient("co2", [0.0, 50.0]).unwrap();
//! assert_eq!(ks, [2.3, 1.55]);
//!
//! assert!(oil.volume(25.0) > 85.0);
//! ```

pub mod catalog;
pub mod error;
pub mod oil;
pub mod solubility;
pub mod species;

// Re-exports for ergonomics
pub use catalog::{SolubilityCatalog, solubility_coefficient, standard_catalog};
pub use error::{FluidError, FluidResult};
pub use oil::SiliconeOil;
pub use solubility::{SolubilityTable, TemperatureQuery};
pub use species::Gas;
