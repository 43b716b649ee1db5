//! Fluid property integration tests.
//!
//! Exercise the public surface the coupling model relies on: the standard
//! catalog, oil expansion and the gas presets.

use vc_fluids::{FluidError, Gas, SiliconeOil, SolubilityCatalog, solubility_coefficient};

#[test]
fn co2_table_is_exact_at_every_knot() {
    let temps = [-25.0, 0.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0];
    let expected = [2.7, 2.3, 1.9, 1.55, 1.22, 0.95, 0.8, 0.7, 0.6, 0.55];
    assert_eq!(solubility_coefficient("co2", temps).unwrap(), expected);
}

#[test]
fn range_boundaries_match_table_ends() {
    assert!(solubility_coefficient("co2", -25.0).is_ok());
    assert!(solubility_coefficient("co2", 200.0).is_ok());

    for t in [-25.0001, 200.0001] {
        match solubility_coefficient("co2", t) {
            Err(FluidError::OutOfRange { min, max, .. }) => {
                assert_eq!(min, -25.0);
                assert_eq!(max, 200.0);
            }
            other => panic!("expected OutOfRange for {t}, got {other:?}"),
        }
    }
}

#[test]
fn nitrogen_is_not_modelled() {
    assert!(matches!(
        solubility_coefficient("nitrogen", 25.0),
        Err(FluidError::UnsupportedSpecies { .. })
    ));
    assert!(matches!(
        solubility_coefficient("nitrogen", vec![25.0]),
        Err(FluidError::UnsupportedSpecies { .. })
    ));
}

#[test]
fn unsupported_species_wins_over_range() {
    // Species is resolved before the temperature is looked at
    assert!(matches!(
        solubility_coefficient("argon", 500.0),
        Err(FluidError::UnsupportedSpecies { .. })
    ));
}

#[test]
fn dissolved_capacity_of_a_typical_charge() {
    let oil = SiliconeOil::new(85.0, 1000.0).unwrap();
    let gas = Gas::co2();
    let catalog = SolubilityCatalog::standard();

    // g of CO2 per bar held by the whole oil charge at 25 °C
    let per_bar = catalog.coefficient(gas.name(), 25.0).unwrap() * gas.density() * oil.weight();
    assert!((per_bar - 1.9 * 0.00198 * 85.0).abs() < 1e-12);
}

#[test]
fn oil_volume_grows_across_the_table_range() {
    let oil = SiliconeOil::new(85.0, 1000.0).unwrap();
    let mut last = oil.volume(-25.0);
    for t in [0.0, 25.0, 50.0, 100.0, 150.0, 200.0] {
        let v = oil.volume(t);
        assert!(v > last, "oil volume must grow with temperature ({t} °C)");
        last = v;
    }
}
