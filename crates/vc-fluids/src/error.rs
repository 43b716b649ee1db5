//! Fluid property errors.

use thiserror::Error;
use vc_core::VcError;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// No solubility data registered for this gas.
    #[error("Unsupported gas species: {gas}")]
    UnsupportedSpecies { gas: String },

    /// Temperature outside the solubility table's knots.
    #[error("Temperature out of range: {temperature} °C (table covers {min} to {max} °C)")]
    OutOfRange {
        temperature: f64,
        min: f64,
        max: f64,
    },

    /// Malformed solubility table.
    #[error("Invalid solubility table: {what}")]
    InvalidTable { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<VcError> for FluidError {
    fn from(err: VcError) -> Self {
        match err {
            VcError::NonFinite { what, .. }
            | VcError::InvalidArg { what }
            | VcError::OutOfRange { what, .. }
            | VcError::Invariant { what } => FluidError::InvalidArg { what },
        }
    }
}

impl From<FluidError> for VcError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::UnsupportedSpecies { .. } => VcError::InvalidArg {
                what: "unsupported gas species",
            },
            FluidError::OutOfRange {
                temperature,
                min,
                max,
            } => VcError::OutOfRange {
                what: "solubility temperature",
                value: temperature,
                min,
                max,
            },
            FluidError::InvalidTable { what } => VcError::Invariant { what },
            FluidError::InvalidArg { what } => VcError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::UnsupportedSpecies {
            gas: "nitrogen".into(),
        };
        assert!(err.to_string().contains("nitrogen"));

        let err = FluidError::OutOfRange {
            temperature: 250.0,
            min: -25.0,
            max: 200.0,
        };
        assert!(err.to_string().contains("250"));
    }

    #[test]
    fn error_to_vc_error() {
        let fluid_err = FluidError::OutOfRange {
            temperature: -30.0,
            min: -25.0,
            max: 200.0,
        };
        let vc_err: VcError = fluid_err.into();
        assert!(matches!(vc_err, VcError::OutOfRange { value, .. } if value == -30.0));
    }
}
