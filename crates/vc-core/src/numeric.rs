//! Float checks and interpolation.

use crate::VcError;

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, VcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(VcError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: f64, what: &'static str) -> Result<f64, VcError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(VcError::InvalidArg { what });
    }
    Ok(v)
}

/// Finite and inside the closed interval `[min, max]`.
pub fn ensure_in_range(v: f64, min: f64, max: f64, what: &'static str) -> Result<f64, VcError> {
    let v = ensure_finite(v, what)?;
    if v < min || v > max {
        return Err(VcError::OutOfRange {
            what,
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}

/// Blend `a` and `b` with weight `frac` on `b`.
///
/// Written as `a * (1 - frac) + b * frac` so that `frac == 0` and `frac == 1`
/// return the end points bit-for-bit.
#[inline]
pub fn lerp(a: f64, b: f64, frac: f64) -> f64 {
    a * (1.0 - frac) + b * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects_negative() {
        assert!(ensure_non_negative(0.0, "p").is_ok());
        assert!(matches!(
            ensure_non_negative(-1e-9, "p"),
            Err(VcError::InvalidArg { what: "p" })
        ));
    }

    #[test]
    fn ensure_in_range_is_inclusive() {
        assert!(ensure_in_range(0.0, 0.0, 1.0, "x").is_ok());
        assert!(ensure_in_range(1.0, 0.0, 1.0, "x").is_ok());
        assert!(matches!(
            ensure_in_range(1.5, 0.0, 1.0, "x"),
            Err(VcError::OutOfRange { .. })
        ));
    }

    #[test]
    fn lerp_hits_end_points_exactly() {
        assert_eq!(lerp(0.6, 0.55, 1.0), 0.55);
        assert_eq!(lerp(0.6, 0.55, 0.0), 0.6);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lerp_stays_between_end_points(
            a in -10.0_f64..10.0,
            b in -10.0_f64..10.0,
            frac in 0.0_f64..=1.0,
        ) {
            let v = lerp(a, b, frac);
            let tol = 1e-12;
            prop_assert!(v >= a.min(b) - tol && v <= a.max(b) + tol);
        }
    }
}
