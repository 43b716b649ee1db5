//! Gas solubility in oil as a function of temperature.
//!
//! A `SolubilityTable` holds (temperature, coefficient) knots and interpolates
//! linearly between them. Queries outside the first/last knot are rejected;
//! the bounds themselves are valid.

use vc_core::lerp;

use crate::error::{FluidError, FluidResult};

/// Piecewise-linear solubility coefficient table.
#[derive(Debug, Clone, PartialEq)]
pub struct SolubilityTable {
    temperatures: Vec<f64>,
    coefficients: Vec<f64>,
}

impl SolubilityTable {
    const CO2_TEMPERATURES: [f64; 10] = [
        -25.0, 0.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0,
    ];
    const CO2_COEFFICIENTS: [f64; 10] = [2.7, 2.3, 1.9, 1.55, 1.22, 0.95, 0.8, 0.7, 0.6, 0.55];

    /// Build a table from knot temperatures [°C] and coefficients.
    ///
    /// Temperatures must be finite and strictly increasing, with at least two
    /// knots and one coefficient per knot.
    pub fn new(temperatures: Vec<f64>, coefficients: Vec<f64>) -> FluidResult<Self> {
        if temperatures.len() != coefficients.len() {
            return Err(FluidError::InvalidTable {
                what: "temperature and coefficient counts differ",
            });
        }
        if temperatures.len() < 2 {
            return Err(FluidError::InvalidTable {
                what: "at least two knots required",
            });
        }
        if temperatures
            .iter()
            .chain(coefficients.iter())
            .any(|v| !v.is_finite())
        {
            return Err(FluidError::InvalidTable {
                what: "knots must be finite",
            });
        }
        if temperatures.windows(2).any(|w| w[1] <= w[0]) {
            return Err(FluidError::InvalidTable {
                what: "temperatures must be strictly increasing",
            });
        }
        Ok(Self {
            temperatures,
            coefficients,
        })
    }

    /// CO₂ in silicone oil.
    pub fn co2() -> Self {
        Self {
            temperatures: Self::CO2_TEMPERATURES.to_vec(),
            coefficients: Self::CO2_COEFFICIENTS.to_vec(),
        }
    }

    pub fn min_temperature(&self) -> f64 {
        self.temperatures[0]
    }

    pub fn max_temperature(&self) -> f64 {
        self.temperatures[self.temperatures.len() - 1]
    }

    /// Whether `t` lies within the closed table bounds.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.min_temperature() && t <= self.max_temperature()
    }

    /// (temperature, coefficient) knots in ascending temperature order.
    pub fn knots(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }

    /// Interpolated coefficient at a single temperature.
    pub fn coefficient(&self, t: f64) -> FluidResult<f64> {
        self.check_range(t)?;
        Ok(self.interpolate(t))
    }

    /// Coefficient(s) for a scalar or a sequence of temperatures.
    pub fn lookup<Q: TemperatureQuery>(&self, query: Q) -> FluidResult<Q::Output> {
        query.lookup(self)
    }

    fn check_range(&self, t: f64) -> FluidResult<()> {
        // NaN fails both comparisons and lands here too
        if !self.contains(t) {
            return Err(FluidError::OutOfRange {
                temperature: t,
                min: self.min_temperature(),
                max: self.max_temperature(),
            });
        }
        Ok(())
    }

    fn interpolate(&self, t: f64) -> f64 {
        let last = self.temperatures.len() - 2;
        let i = self
            .temperatures
            .partition_point(|&knot| knot <= t)
            .saturating_sub(1)
            .min(last);
        let (t0, t1) = (self.temperatures[i], self.temperatures[i + 1]);
        let frac = (t - t0) / (t1 - t0);
        lerp(self.coefficients[i], self.coefficients[i + 1], frac)
    }
}

/// Temperature argument accepted by solubility lookups.
///
/// Scalars return a scalar; sequences return one coefficient per temperature.
/// A sequence fails as a whole if any temperature is out of range.
pub trait TemperatureQuery {
    type Output;

    fn lookup(self, table: &SolubilityTable) -> FluidResult<Self::Output>;
}

impl TemperatureQuery for f64 {
    type Output = f64;

    fn lookup(self, table: &SolubilityTable) -> FluidResult<f64> {
        table.coefficient(self)
    }
}

impl TemperatureQuery for &[f64] {
    type Output = Vec<f64>;

    fn lookup(self, table: &SolubilityTable) -> FluidResult<Vec<f64>> {
        for &t in self {
            table.check_range(t)?;
        }
        Ok(self.iter().map(|&t| table.interpolate(t)).collect())
    }
}

impl TemperatureQuery for &Vec<f64> {
    type Output = Vec<f64>;

    fn lookup(self, table: &SolubilityTable) -> FluidResult<Vec<f64>> {
        self.as_slice().lookup(table)
    }
}

impl TemperatureQuery for Vec<f64> {
    type Output = Vec<f64>;

    fn lookup(self, table: &SolubilityTable) -> FluidResult<Vec<f64>> {
        self.as_slice().lookup(table)
    }
}

impl<const N: usize> TemperatureQuery for [f64; N] {
    type Output = [f64; N];

    fn lookup(self, table: &SolubilityTable) -> FluidResult<[f64; N]> {
        for &t in &self {
            table.check_range(t)?;
        }
        Ok(self.map(|t| table.interpolate(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_at_knots() {
        let table = SolubilityTable::co2();
        for (t, k) in table.knots() {
            assert_eq!(table.coefficient(t).unwrap(), k, "knot at {t} °C");
        }
    }

    #[test]
    fn interpolates_between_knots() {
        let table = SolubilityTable::co2();
        let k = table.coefficient(12.5).unwrap();
        assert!((k - 2.1).abs() < 1e-12);
        let k = table.coefficient(187.5).unwrap();
        assert!((k - 0.575).abs() < 1e-12);
    }

    #[test]
    fn bounds_are_inclusive() {
        let table = SolubilityTable::co2();
        assert_eq!(table.coefficient(-25.0).unwrap(), 2.7);
        assert_eq!(table.coefficient(200.0).unwrap(), 0.55);
        assert!(matches!(
            table.coefficient(-25.0001),
            Err(FluidError::OutOfRange { .. })
        ));
        assert!(matches!(
            table.coefficient(200.0001),
            Err(FluidError::OutOfRange { .. })
        ));
    }

    #[test]
    fn nan_is_out_of_range() {
        let table = SolubilityTable::co2();
        assert!(table.coefficient(f64::NAN).is_err());
    }

    #[test]
    fn sequence_keeps_shape() {
        let table = SolubilityTable::co2();
        let temps = vec![-25.0, 25.0, 37.5, 200.0];
        let ks = table.lookup(&temps).unwrap();
        assert_eq!(ks.len(), temps.len());
        assert_eq!(ks[0], 2.7);
        assert_eq!(ks[1], 1.9);
        assert!((ks[2] - 1.725).abs() < 1e-12);
        assert_eq!(ks[3], 0.55);

        let arr = table.lookup([0.0, 100.0]).unwrap();
        assert_eq!(arr, [2.3, 0.95]);
    }

    #[test]
    fn sequence_fails_if_any_out_of_range() {
        let table = SolubilityTable::co2();
        let err = table.lookup(vec![25.0, 210.0]).unwrap_err();
        assert!(matches!(err, FluidError::OutOfRange { temperature, .. } if temperature == 210.0));
    }

    #[test]
    fn empty_sequence_is_empty() {
        let table = SolubilityTable::co2();
        let empty: &[f64] = &[];
        assert!(table.lookup(empty).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_tables() {
        assert!(SolubilityTable::new(vec![0.0], vec![1.0]).is_err());
        assert!(SolubilityTable::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(SolubilityTable::new(vec![1.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(SolubilityTable::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(SolubilityTable::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
        assert!(SolubilityTable::new(vec![0.0, 10.0], vec![1.0, 2.0]).is_ok());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interpolation_stays_between_neighbouring_knots(t in -25.0_f64..=200.0) {
            let table = SolubilityTable::co2();
            let k = table.coefficient(t).unwrap();
            let knots: Vec<(f64, f64)> = table.knots().collect();
            let seg = knots
                .windows(2)
                .find(|w| t >= w[0].0 && t <= w[1].0)
                .unwrap();
            let lo = seg[0].1.min(seg[1].1);
            let hi = seg[0].1.max(seg[1].1);
            prop_assert!(k >= lo - 1e-12 && k <= hi + 1e-12);
        }

        #[test]
        fn co2_solubility_decreases_with_temperature(a in -25.0_f64..=200.0, b in -25.0_f64..=200.0) {
            let table = SolubilityTable::co2();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(table.coefficient(lo).unwrap() >= table.coefficient(hi).unwrap() - 1e-12);
        }
    }
}
