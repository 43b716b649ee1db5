//! Solubility catalog keyed by gas name.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{FluidError, FluidResult};
use crate::solubility::{SolubilityTable, TemperatureQuery};
use crate::species::{Gas, normalize_name};

/// Solubility tables for every gas the model knows about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolubilityCatalog {
    tables: BTreeMap<String, SolubilityTable>,
}

impl SolubilityCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in tables (CO₂).
    pub fn standard() -> Self {
        Self::new().with_table(Gas::CO2, SolubilityTable::co2())
    }

    /// Register (or replace) the table for `gas`.
    pub fn with_table(mut self, gas: &str, table: SolubilityTable) -> Self {
        self.insert(gas, table);
        self
    }

    pub fn insert(&mut self, gas: &str, table: SolubilityTable) {
        self.tables.insert(normalize_name(gas), table);
    }

    pub fn supports(&self, gas: &str) -> bool {
        self.tables.contains_key(&normalize_name(gas))
    }

    /// Names of all registered gases, sorted.
    pub fn gases(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn table(&self, gas: &str) -> FluidResult<&SolubilityTable> {
        self.tables
            .get(&normalize_name(gas))
            .ok_or_else(|| FluidError::UnsupportedSpecies {
                gas: gas.to_string(),
            })
    }

    /// Solubility coefficient of `gas` at a temperature or a sequence of them.
    pub fn coefficient<Q: TemperatureQuery>(&self, gas: &str, t: Q) -> FluidResult<Q::Output> {
        self.table(gas)?.lookup(t)
    }
}

/// Shared instance of [`SolubilityCatalog::standard`].
pub fn standard_catalog() -> &'static SolubilityCatalog {
    static STANDARD: OnceLock<SolubilityCatalog> = OnceLock::new();
    STANDARD.get_or_init(SolubilityCatalog::standard)
}

/// Solubility coefficient from the standard catalog.
///
/// Accepts a scalar temperature [°C] or a sequence of them and returns the
/// same shape.
pub fn solubility_coefficient<Q: TemperatureQuery>(gas: &str, t: Q) -> FluidResult<Q::Output> {
    standard_catalog().coefficient(gas, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn co2_knots() {
        assert_eq!(solubility_coefficient("co2", 25.0).unwrap(), 1.9);
        assert_eq!(solubility_coefficient("co2", -25.0).unwrap(), 2.7);
        assert_eq!(solubility_coefficient("co2", 200.0).unwrap(), 0.55);
    }

    #[test]
    fn unsupported_species() {
        let err = solubility_coefficient("nitrogen", 25.0).unwrap_err();
        assert_eq!(
            err,
            FluidError::UnsupportedSpecies {
                gas: "nitrogen".into()
            }
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(solubility_coefficient("CO2", 50.0).unwrap(), 1.55);
    }

    #[test]
    fn custom_tables_extend_the_catalog() {
        let n2 = SolubilityTable::new(vec![0.0, 100.0], vec![0.2, 0.1]).unwrap();
        let catalog = SolubilityCatalog::standard().with_table("n2", n2);
        assert!(catalog.supports("N2"));
        assert!(catalog.supports("co2"));
        assert!((catalog.coefficient("n2", 50.0).unwrap() - 0.15).abs() < 1e-12);
        assert_eq!(catalog.gases().collect::<Vec<_>>(), vec!["co2", "n2"]);
    }

    #[test]
    fn empty_catalog_supports_nothing() {
        let catalog = SolubilityCatalog::new();
        assert!(!catalog.supports("co2"));
        assert!(catalog.coefficient("co2", 25.0).is_err());
    }
}
