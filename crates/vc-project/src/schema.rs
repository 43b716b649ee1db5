//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// One coupling, its charge and the conditions to evaluate it at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub coupling: CouplingDef,
    pub oil: OilDef,
    pub gas: GasDef,
    pub fill: FillDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
}

/// Chamber geometry. Unset fields take the calibrated defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouplingDef {
    /// [cm³]
    pub fixed_volume: f64,
    /// [bar]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atm_pressure: Option<f64>,
    /// [cm³]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lid_play: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_ring_play: Option<CRingPlayDef>,
    /// [cm³/bar]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lid_bending_coef: Option<f64>,
    /// [cm³/bar]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_bending_coef: Option<f64>,
}

impl CouplingDef {
    pub fn with_fixed_volume(fixed_volume: f64) -> Self {
        Self {
            fixed_volume,
            atm_pressure: None,
            lid_play: None,
            c_ring_play: None,
            lid_bending_coef: None,
            bottom_bending_coef: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CRingPlayDef {
    pub amplitude: f64,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OilDef {
    /// [g]
    pub weight: f64,
    #[serde(default)]
    pub viscosity: f64,
}

/// Either a built-in species or a fully specified gas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GasDef {
    Species {
        species: String,
    },
    Custom {
        name: String,
        r_specific: f64,
        /// [g/mL]
        density: f64,
    },
}

impl GasDef {
    pub fn co2() -> Self {
        GasDef::Species {
            species: "co2".to_string(),
        }
    }

    /// Name used for the solubility lookup.
    pub fn name(&self) -> &str {
        match self {
            GasDef::Species { species } => species,
            GasDef::Custom { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FillDef {
    /// [°C]
    pub temperature: f64,
    /// [bar]
    pub pressure: f64,
    #[serde(default = "default_solved_gas_fraction")]
    pub solved_gas_fraction: f64,
}

fn default_solved_gas_fraction() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    /// [°C]
    pub from: f64,
    /// [°C]
    pub to: f64,
    pub points: usize,
}
