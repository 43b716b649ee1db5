//! Chamber geometry and its pressure-dependent volume.
//!
//! The housing is rigid up to atmospheric pressure. Any positive gauge
//! pressure immediately takes up the lid play, after which the c-ring seal
//! and the lid/bottom plates deform with pressure:
//!
//! ```text
//! V(p) = V0                                                 p <= p_atm
//! V(p) = V0 + lid_play + A (1 - e^(B Δp)) + (k_lid + k_bottom) Δp   p >  p_atm
//! ```
//!
//! with `Δp = p - p_atm`. The jump of `lid_play` at `p_atm` is part of the
//! physical model.

use vc_core::{ensure_finite, ensure_non_negative};
use vc_solver::{ConvergenceTest, IterationConfig, NewtonConfig, damped_newton};

use crate::error::{CouplingError, CouplingResult};

/// Floor pressure [bar] reported where the oil does not fill the chamber.
pub const ALMOST_VACUUM: f64 = 0.01;

/// Tolerance shared by both model solvers.
pub const LIMIT_ERROR: f64 = 0.001;

/// Iteration bound shared by both model solvers.
pub const MAX_ITERATION: usize = 20;

/// Exponential c-ring play `A (1 - e^(B Δp))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CRingPlay {
    /// Play reached at high pressure [cm³]
    pub amplitude: f64,
    /// Exponent per bar (negative)
    pub rate: f64,
}

impl CRingPlay {
    pub fn volume(&self, rel_p: f64) -> f64 {
        self.amplitude * (1.0 - (self.rate * rel_p).exp())
    }
}

/// Fixed geometry and calibrated deformation coefficients of a coupling.
///
/// Coefficients come from dial-indicator measurements on a pressurised unit
/// between 0 and 9 bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouplingGeometry {
    /// Internal volume at or below atmospheric pressure [cm³]
    pub fixed_volume: f64,
    /// Atmospheric reference pressure [bar]
    pub atm_pressure: f64,
    /// Lid play taken up at any positive gauge pressure [cm³]
    pub lid_play: f64,
    pub c_ring_play: CRingPlay,
    /// Lid bending [cm³/bar]
    pub lid_bending_coef: f64,
    /// Bottom bending [cm³/bar]
    pub bottom_bending_coef: f64,
}

impl CouplingGeometry {
    pub const ATM_PRESSURE: f64 = 1.025;
    pub const LID_PLAY: f64 = 1.21;
    pub const C_RING_PLAY: CRingPlay = CRingPlay {
        amplitude: 0.49,
        rate: -1.0,
    };
    pub const LID_BENDING_COEF: f64 = 0.136;
    // TODO: bottom bending is an estimate; measure it like the lid
    pub const BOTTOM_BENDING_COEF: f64 = 0.04;

    /// Calibrated geometry around a fixed volume [cm³].
    pub fn new(fixed_volume: f64) -> Self {
        Self {
            fixed_volume,
            atm_pressure: Self::ATM_PRESSURE,
            lid_play: Self::LID_PLAY,
            c_ring_play: Self::C_RING_PLAY,
            lid_bending_coef: Self::LID_BENDING_COEF,
            bottom_bending_coef: Self::BOTTOM_BENDING_COEF,
        }
    }

    pub fn validate(&self) -> CouplingResult<()> {
        if !self.fixed_volume.is_finite() || self.fixed_volume <= 0.0 {
            return Err(CouplingError::InvalidArg {
                what: "fixed volume must be positive",
            });
        }
        if !self.atm_pressure.is_finite() || self.atm_pressure <= 0.0 {
            return Err(CouplingError::InvalidArg {
                what: "atmospheric pressure must be positive",
            });
        }
        ensure_non_negative(self.lid_play, "lid play")?;
        ensure_finite(self.c_ring_play.amplitude, "c-ring play amplitude")?;
        ensure_finite(self.c_ring_play.rate, "c-ring play rate")?;
        ensure_finite(self.lid_bending_coef, "lid bending coefficient")?;
        ensure_finite(self.bottom_bending_coef, "bottom bending coefficient")?;
        Ok(())
    }

    /// Internal volume [cm³] at `pressure` [bar].
    pub fn volume(&self, pressure: f64) -> f64 {
        let rel_p = pressure - self.atm_pressure;
        if rel_p > 0.0 {
            self.fixed_volume + self.deformation(rel_p)
        } else {
            self.fixed_volume
        }
    }

    /// Volume on the pressurised branch, lid play already taken up.
    ///
    /// Continuous for all pressures; equal to [`volume`](Self::volume) above
    /// atmospheric, and `fixed_volume + lid_play` at or below it.
    pub fn seated_volume(&self, pressure: f64) -> f64 {
        let rel_p = (pressure - self.atm_pressure).max(0.0);
        self.fixed_volume + self.deformation(rel_p)
    }

    /// Volume the chamber offers as soon as any positive pressure exists.
    pub fn zero_pressure_volume(&self) -> f64 {
        self.seated_volume(self.atm_pressure)
    }

    fn deformation(&self, rel_p: f64) -> f64 {
        self.lid_play
            + self.c_ring_play.volume(rel_p)
            + self.lid_bending_coef * rel_p
            + self.bottom_bending_coef * rel_p
    }

    /// Newton settings used by [`pressure_from_volume`](Self::pressure_from_volume).
    pub fn pressure_solver_config(&self) -> NewtonConfig {
        NewtonConfig {
            iteration: IterationConfig {
                max_iterations: MAX_ITERATION,
                tolerance: LIMIT_ERROR,
                test: ConvergenceTest::Absolute,
            },
            fd_step: 0.01,
            lower_bound: Some(self.atm_pressure),
        }
    }

    /// Pressure [bar] at which the chamber holds `volume` [cm³].
    ///
    /// - at most `fixed_volume`: [`ALMOST_VACUUM`]
    /// - up to the seated volume at atmospheric: `atm_pressure`
    /// - above: damped Newton on the seated branch, starting 1 bar above
    ///   atmospheric and never probing below it
    pub fn pressure_from_volume(&self, volume: f64) -> CouplingResult<f64> {
        ensure_finite(volume, "target volume")?;
        if volume <= self.fixed_volume {
            return Ok(ALMOST_VACUUM);
        }
        if volume <= self.zero_pressure_volume() {
            return Ok(self.atm_pressure);
        }

        let report = damped_newton(
            self.atm_pressure + 1.0,
            volume,
            &self.pressure_solver_config(),
            "pressure from volume",
            |p| Ok(self.seated_volume(p)),
        )?;
        tracing::debug!(
            volume,
            pressure = report.value,
            iterations = report.iterations,
            "pressure from volume"
        );
        Ok(report.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> CouplingGeometry {
        CouplingGeometry::new(100.0)
    }

    #[test]
    fn rigid_up_to_atmospheric() {
        let g = geometry();
        assert_eq!(g.volume(0.0), 100.0);
        assert_eq!(g.volume(0.5), 100.0);
        assert_eq!(g.volume(g.atm_pressure), 100.0);
    }

    #[test]
    fn jump_equals_lid_play() {
        let g = geometry();
        let jump = g.volume(g.atm_pressure + 1e-6) - g.volume(g.atm_pressure);
        assert!((jump - g.lid_play).abs() < 1e-5);
    }

    #[test]
    fn known_value_one_bar_gauge() {
        let g = geometry();
        let expected = 100.0 + 1.21 + 0.49 * (1.0 - (-1.0_f64).exp()) + 0.176;
        assert!((g.volume(g.atm_pressure + 1.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn seated_volume_matches_above_atmospheric() {
        let g = geometry();
        for p in [1.1, 2.0, 5.0, 9.0] {
            assert_eq!(g.seated_volume(p), g.volume(p));
        }
        assert_eq!(g.seated_volume(0.5), g.fixed_volume + g.lid_play);
        assert_eq!(g.zero_pressure_volume(), g.fixed_volume + g.lid_play);
    }

    #[test]
    fn below_fixed_volume_is_almost_vacuum() {
        let g = geometry();
        assert_eq!(g.pressure_from_volume(99.0).unwrap(), ALMOST_VACUUM);
        assert_eq!(g.pressure_from_volume(100.0).unwrap(), ALMOST_VACUUM);
    }

    #[test]
    fn within_lid_play_is_atmospheric() {
        let g = geometry();
        assert_eq!(g.pressure_from_volume(100.5).unwrap(), g.atm_pressure);
        assert_eq!(
            g.pressure_from_volume(g.zero_pressure_volume()).unwrap(),
            g.atm_pressure
        );
    }

    #[test]
    fn round_trip_above_atmospheric() {
        let g = geometry();
        for dp in [0.01, 0.1, 0.3, 0.5, 1.0, 2.0, 3.0, 5.0] {
            let p = g.atm_pressure + dp;
            let back = g.pressure_from_volume(g.volume(p)).unwrap();
            assert!((back - p).abs() < 0.01, "p={p}, back={back}");
        }
    }

    #[test]
    fn non_finite_volume_is_rejected() {
        let g = geometry();
        assert!(matches!(
            g.pressure_from_volume(f64::NAN),
            Err(CouplingError::InvalidArg { .. })
        ));
    }

    #[test]
    fn stiff_housing_fails_to_converge() {
        // No bending and no c-ring play: volume is flat above the lid play
        let g = CouplingGeometry {
            c_ring_play: CRingPlay {
                amplitude: 0.0,
                rate: -1.0,
            },
            lid_bending_coef: 0.0,
            bottom_bending_coef: 0.0,
            ..geometry()
        };
        let err = g.pressure_from_volume(102.0).unwrap_err();
        assert!(err.is_convergence_failure());
    }

    #[test]
    fn validation() {
        assert!(geometry().validate().is_ok());
        assert!(CouplingGeometry::new(0.0).validate().is_err());
        assert!(CouplingGeometry::new(f64::NAN).validate().is_err());
        let negative_play = CouplingGeometry {
            lid_play: -1.0,
            ..geometry()
        };
        assert!(negative_play.validate().is_err());
    }
}
