//! Scenario validation logic.

use crate::schema::{CouplingDef, FillDef, GasDef, OilDef, Scenario, SweepDef};
use vc_fluids::standard_catalog;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown gas species: {species}")]
    UnknownSpecies { species: String },

    #[error("No solubility data for gas: {gas}")]
    NoSolubility { gas: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, value, "must be positive and finite"));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, value, "must be non-negative and finite"));
    }
    Ok(())
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    Ok(())
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_coupling(&scenario.coupling)?;
    validate_oil(&scenario.oil)?;
    validate_gas(&scenario.gas)?;
    validate_fill(&scenario.fill)?;
    if let Some(sweep) = &scenario.sweep {
        validate_sweep(sweep)?;
    }
    Ok(())
}

fn validate_coupling(coupling: &CouplingDef) -> Result<(), ValidationError> {
    positive("coupling.fixed_volume", coupling.fixed_volume)?;
    if let Some(p) = coupling.atm_pressure {
        positive("coupling.atm_pressure", p)?;
    }
    if let Some(play) = coupling.lid_play {
        non_negative("coupling.lid_play", play)?;
    }
    if let Some(ring) = coupling.c_ring_play {
        finite("coupling.c_ring_play.amplitude", ring.amplitude)?;
        finite("coupling.c_ring_play.rate", ring.rate)?;
    }
    if let Some(k) = coupling.lid_bending_coef {
        finite("coupling.lid_bending_coef", k)?;
    }
    if let Some(k) = coupling.bottom_bending_coef {
        finite("coupling.bottom_bending_coef", k)?;
    }
    Ok(())
}

fn validate_oil(oil: &OilDef) -> Result<(), ValidationError> {
    positive("oil.weight", oil.weight)?;
    non_negative("oil.viscosity", oil.viscosity)
}

fn validate_gas(gas: &GasDef) -> Result<(), ValidationError> {
    match gas {
        GasDef::Species { species } => {
            if crate::build::preset_gas(species).is_none() {
                return Err(ValidationError::UnknownSpecies {
                    species: species.clone(),
                });
            }
        }
        GasDef::Custom {
            name,
            r_specific,
            density,
        } => {
            positive("gas.r_specific", *r_specific)?;
            non_negative("gas.density", *density)?;
            if !standard_catalog().supports(name) {
                return Err(ValidationError::NoSolubility { gas: name.clone() });
            }
        }
    }
    Ok(())
}

fn validate_fill(fill: &FillDef) -> Result<(), ValidationError> {
    finite("fill.temperature", fill.temperature)?;
    non_negative("fill.pressure", fill.pressure)?;
    let frac = fill.solved_gas_fraction;
    if !(0.0..=1.0).contains(&frac) {
        return Err(invalid(
            "fill.solved_gas_fraction",
            frac,
            "must be within [0, 1]",
        ));
    }
    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    finite("sweep.from", sweep.from)?;
    finite("sweep.to", sweep.to)?;
    if sweep.points < 2 {
        return Err(invalid(
            "sweep.points",
            sweep.points as f64,
            "at least two points are needed",
        ));
    }
    if sweep.from == sweep.to {
        return Err(invalid("sweep.to", sweep.to, "must differ from sweep.from"));
    }
    Ok(())
}
