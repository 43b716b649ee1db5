//! Scenario version migration.

use crate::ProjectError;
use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

fn migrate_one_version(scenario: Scenario) -> Result<Scenario, ProjectError> {
    match scenario.version {
        0 => migrate_v0_to_v1(scenario),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files carried the species key with arbitrary case and padding.
fn migrate_v0_to_v1(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    use crate::schema::GasDef;

    if let GasDef::Species { species } = &mut scenario.gas {
        *species = species.trim().to_ascii_lowercase();
    }
    scenario.version = 1;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CouplingDef, FillDef, GasDef, OilDef};

    fn scenario(version: u32, species: &str) -> Scenario {
        Scenario {
            version,
            name: "test".to_string(),
            coupling: CouplingDef::with_fixed_volume(100.0),
            oil: OilDef {
                weight: 85.0,
                viscosity: 1000.0,
            },
            gas: GasDef::Species {
                species: species.to_string(),
            },
            fill: FillDef {
                temperature: 25.0,
                pressure: 2.0,
                solved_gas_fraction: 1.0,
            },
            sweep: None,
        }
    }

    #[test]
    fn migrate_latest_is_noop() {
        let s = scenario(LATEST_VERSION, "co2");
        assert_eq!(migrate_to_latest(s.clone()).unwrap(), s);
    }

    #[test]
    fn migrate_v0_normalizes_species() {
        let migrated = migrate_to_latest(scenario(0, " CO2 ")).unwrap();
        assert_eq!(migrated.version, 1);
        assert_eq!(migrated.gas, GasDef::co2());
    }
}
