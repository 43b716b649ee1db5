//! The coupling itself: an empty chamber and its filled counterpart.
//!
//! Filling consumes a [`ViscousCoupling`] and returns a [`FilledCoupling`];
//! only the filled type exposes the gas/pressure queries. Draining hands the
//! empty chamber back so it can be filled again.

use vc_core::{ensure_finite, ensure_in_range, ensure_non_negative, kelvin_from_celsius};
use vc_fluids::{Gas, SiliconeOil, SolubilityCatalog, standard_catalog};

use crate::error::CouplingResult;
use crate::geometry::CouplingGeometry;
use crate::operating::OperatingPoint;

/// Pressure [bar] at which the fill report states the oil fill ratio of the
/// deformed chamber.
pub const REPORT_PRESSURE: f64 = 10.0;

/// Temperature [°C] at which the fill report states oil fill ratios.
pub const REPORT_TEMPERATURE: f64 = 25.0;

/// Conditions at the moment gas is charged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillConditions {
    /// [°C]
    pub temperature: f64,
    /// [bar]
    pub pressure: f64,
    /// Fraction of the saturation amount actually dissolved, in `[0, 1]`
    pub solved_gas_fraction: f64,
}

impl FillConditions {
    pub fn validate(&self) -> CouplingResult<()> {
        ensure_finite(self.temperature, "fill temperature")?;
        ensure_non_negative(self.pressure, "fill pressure")?;
        ensure_in_range(self.solved_gas_fraction, 0.0, 1.0, "solved gas fraction")?;
        Ok(())
    }
}

/// Gas charge and oil filling ratios computed at fill time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillReport {
    /// Gas dissolved in the oil at fill [g]
    pub gas_dissolved: f64,
    /// Free gas in the headspace at fill [g]
    pub gas_free: f64,
    /// Total gas charge [g]
    pub gas_weight: f64,
    /// Oil volume at 25 °C over the fixed volume
    pub oil_fill_ratio_fixed: f64,
    /// Oil volume at 25 °C over the chamber volume at 10 bar
    pub oil_fill_ratio_at_report_pressure: f64,
}

/// An empty coupling.
#[derive(Debug, Clone, PartialEq)]
pub struct ViscousCoupling {
    geometry: CouplingGeometry,
    operating: OperatingPoint,
}

impl ViscousCoupling {
    pub fn new(geometry: CouplingGeometry) -> CouplingResult<Self> {
        geometry.validate()?;
        Ok(Self {
            operating: OperatingPoint::at_rest(geometry.atm_pressure),
            geometry,
        })
    }

    /// Coupling with calibrated deformation around `fixed_volume` [cm³].
    pub fn with_fixed_volume(fixed_volume: f64) -> CouplingResult<Self> {
        Self::new(CouplingGeometry::new(fixed_volume))
    }

    pub fn geometry(&self) -> &CouplingGeometry {
        &self.geometry
    }

    pub fn operating_point(&self) -> &OperatingPoint {
        &self.operating
    }

    pub fn set_operating_point(&mut self, operating: OperatingPoint) -> CouplingResult<()> {
        operating.validate()?;
        self.operating = operating;
        Ok(())
    }

    /// Internal volume [cm³] at `pressure` [bar].
    pub fn volume(&self, pressure: f64) -> f64 {
        self.geometry.volume(pressure)
    }

    /// Pressure [bar] at which the chamber holds `volume` [cm³].
    pub fn pressure_from_volume(&self, volume: f64) -> CouplingResult<f64> {
        self.geometry.pressure_from_volume(volume)
    }

    /// Charge the coupling with oil and gas, using the standard solubility
    /// catalog.
    pub fn fill(
        self,
        oil: SiliconeOil,
        gas: Gas,
        temperature: f64,
        pressure: f64,
        solved_gas_fraction: f64,
    ) -> CouplingResult<FilledCoupling> {
        let conditions = FillConditions {
            temperature,
            pressure,
            solved_gas_fraction,
        };
        self.fill_with_catalog(oil, gas, conditions, standard_catalog().clone())
    }

    /// Charge the coupling, looking solubility up in `catalog`.
    ///
    /// The total gas mass is the dissolved part (solubility × density × oil
    /// mass × fraction × pressure) plus the ideal-gas mass in the headspace
    /// left by the oil at `conditions.pressure`.
    pub fn fill_with_catalog(
        self,
        oil: SiliconeOil,
        gas: Gas,
        conditions: FillConditions,
        catalog: SolubilityCatalog,
    ) -> CouplingResult<FilledCoupling> {
        conditions.validate()?;
        let FillConditions {
            temperature,
            pressure,
            solved_gas_fraction,
        } = conditions;

        let solubility = catalog.coefficient(gas.name(), temperature)?;
        let gas_dissolved =
            solubility * gas.density() * oil.weight() * solved_gas_fraction * pressure;
        let gas_free = pressure * (self.volume(pressure) - oil.volume(temperature))
            / (gas.r_specific() * kelvin_from_celsius(temperature));
        let gas_weight = gas_dissolved + gas_free;

        let oil_volume_ref = oil.volume(REPORT_TEMPERATURE);
        let report = FillReport {
            gas_dissolved,
            gas_free,
            gas_weight,
            oil_fill_ratio_fixed: oil_volume_ref / self.geometry.fixed_volume,
            oil_fill_ratio_at_report_pressure: oil_volume_ref / self.volume(REPORT_PRESSURE),
        };

        tracing::debug!(gas_dissolved, gas_free, "initial gas split");
        tracing::info!(
            oil = %oil,
            gas = %gas,
            gas_weight,
            fill_fixed_pct = 100.0 * report.oil_fill_ratio_fixed,
            fill_10bar_pct = 100.0 * report.oil_fill_ratio_at_report_pressure,
            "coupling filled"
        );

        Ok(FilledCoupling {
            geometry: self.geometry,
            operating: self.operating,
            oil,
            gas,
            conditions,
            report,
            catalog,
        })
    }
}

/// A coupling charged with oil and gas.
///
/// The gas charge is fixed at fill time; every query works from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledCoupling {
    pub(crate) geometry: CouplingGeometry,
    pub(crate) operating: OperatingPoint,
    pub(crate) oil: SiliconeOil,
    pub(crate) gas: Gas,
    pub(crate) conditions: FillConditions,
    pub(crate) report: FillReport,
    pub(crate) catalog: SolubilityCatalog,
}

impl FilledCoupling {
    pub fn geometry(&self) -> &CouplingGeometry {
        &self.geometry
    }

    pub fn oil(&self) -> &SiliconeOil {
        &self.oil
    }

    pub fn gas(&self) -> &Gas {
        &self.gas
    }

    pub fn catalog(&self) -> &SolubilityCatalog {
        &self.catalog
    }

    /// Total gas charge [g].
    pub fn gas_weight(&self) -> f64 {
        self.report.gas_weight
    }

    /// Gas dissolved in the oil at fill time [g].
    pub fn gas_solved(&self) -> f64 {
        self.report.gas_dissolved
    }

    pub fn fill_conditions(&self) -> &FillConditions {
        &self.conditions
    }

    pub fn fill_report(&self) -> &FillReport {
        &self.report
    }

    pub fn operating_point(&self) -> &OperatingPoint {
        &self.operating
    }

    pub fn set_operating_point(&mut self, operating: OperatingPoint) -> CouplingResult<()> {
        operating.validate()?;
        self.operating = operating;
        Ok(())
    }

    /// Internal volume [cm³] at `pressure` [bar].
    pub fn volume(&self, pressure: f64) -> f64 {
        self.geometry.volume(pressure)
    }

    /// Pressure [bar] at which the chamber holds `volume` [cm³].
    pub fn pressure_from_volume(&self, volume: f64) -> CouplingResult<f64> {
        self.geometry.pressure_from_volume(volume)
    }

    /// Gas mass dissolvable per gram of oil and bar [g/(g·bar)] at `temperature`.
    pub fn gas_solvability(&self, temperature: f64) -> CouplingResult<f64> {
        let k = self.catalog.coefficient(self.gas.name(), temperature)?;
        Ok(k * self.gas.density())
    }

    /// Gas mass [g] the oil holds when saturated at the current operating
    /// temperature and pressure.
    pub fn saturated_solved_gas(&self) -> CouplingResult<f64> {
        let solvability = self.gas_solvability(self.operating.temperature)?;
        Ok(solvability * self.oil.weight() * self.operating.pressure)
    }

    /// Empty the coupling, keeping geometry and operating point.
    pub fn drain(self) -> ViscousCoupling {
        ViscousCoupling {
            geometry: self.geometry,
            operating: self.operating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CouplingError;
    use vc_fluids::FluidError;

    fn oil() -> SiliconeOil {
        SiliconeOil::new(85.0, 1000.0).unwrap()
    }

    fn filled() -> FilledCoupling {
        ViscousCoupling::with_fixed_volume(100.0)
            .unwrap()
            .fill(oil(), Gas::co2(), 25.0, 2.0, 1.0)
            .unwrap()
    }

    #[test]
    fn fill_splits_gas() {
        let vc = filled();
        let r = vc.fill_report();
        let dissolved = 1.9 * 0.00198 * 85.0 * 2.0;
        assert!((r.gas_dissolved - dissolved).abs() < 1e-12);

        let headspace = vc.volume(2.0) - oil().volume(25.0);
        let free = 2.0 * headspace / (188.92 * 298.15);
        assert!((r.gas_free - free).abs() < 1e-12);
        assert!((vc.gas_weight() - (dissolved + free)).abs() < 1e-12);
        assert_eq!(vc.gas_solved(), r.gas_dissolved);
    }

    #[test]
    fn fill_ratios() {
        let r = *filled().fill_report();
        let v_oil = 85.0 / 0.97;
        assert!((r.oil_fill_ratio_fixed - v_oil / 100.0).abs() < 1e-12);
        assert!(r.oil_fill_ratio_at_report_pressure < r.oil_fill_ratio_fixed);
    }

    #[test]
    fn solved_fraction_scales_dissolved_gas_only() {
        let half = ViscousCoupling::with_fixed_volume(100.0)
            .unwrap()
            .fill(oil(), Gas::co2(), 25.0, 2.0, 0.5)
            .unwrap();
        let full = filled();
        assert!(
            (half.fill_report().gas_dissolved * 2.0 - full.fill_report().gas_dissolved).abs()
                < 1e-12
        );
        assert_eq!(half.fill_report().gas_free, full.fill_report().gas_free);
    }

    #[test]
    fn fill_rejects_bad_conditions() {
        let empty = ViscousCoupling::with_fixed_volume(100.0).unwrap();
        let err = empty
            .clone()
            .fill(oil(), Gas::co2(), 25.0, 2.0, 1.5)
            .unwrap_err();
        assert!(matches!(err, CouplingError::InvalidArg { .. }));
        let err = empty
            .clone()
            .fill(oil(), Gas::co2(), 25.0, -1.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, CouplingError::InvalidArg { .. }));
        let err = empty
            .fill(oil(), Gas::co2(), 250.0, 2.0, 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            CouplingError::Fluid(FluidError::OutOfRange { .. })
        ));
    }

    #[test]
    fn fill_with_unknown_gas_fails() {
        let argon = Gas::new("argon", 208.13, 0.00178).unwrap();
        let err = ViscousCoupling::with_fixed_volume(100.0)
            .unwrap()
            .fill(oil(), argon, 25.0, 2.0, 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            CouplingError::Fluid(FluidError::UnsupportedSpecies { .. })
        ));
    }

    #[test]
    fn saturated_gas_follows_operating_point() {
        let mut vc = filled();
        // Default operating point: 25 °C at atmospheric pressure
        let expected = 1.9 * 0.00198 * 85.0 * 1.025;
        assert!((vc.saturated_solved_gas().unwrap() - expected).abs() < 1e-12);

        vc.set_operating_point(OperatingPoint {
            temperature: 50.0,
            pressure: 3.0,
            slip_speed: 120.0,
        })
        .unwrap();
        let expected = 1.55 * 0.00198 * 85.0 * 3.0;
        assert!((vc.saturated_solved_gas().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn drain_and_refill() {
        let vc = filled();
        let weight = vc.gas_weight();
        let empty = vc.drain();
        let refilled = empty
            .fill(oil(), Gas::co2(), 25.0, 3.0, 1.0)
            .unwrap();
        assert!(refilled.gas_weight() > weight);
    }

    #[test]
    fn rejects_invalid_geometry() {
        assert!(ViscousCoupling::with_fixed_volume(-5.0).is_err());
    }
}
