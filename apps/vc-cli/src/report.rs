//! Printable and serializable views of model results.

use serde::Serialize;
use vc_core::{kpa_from_bar, mg_from_grams, psi_from_bar};
use vc_coupling::{EquilibriumState, FilledCoupling, REPORT_PRESSURE};

/// One row of equilibrium output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EquilibriumRow {
    pub temperature_c: f64,
    pub pressure_bar: f64,
    pub floor_pressure_bar: f64,
    pub oil_volume_cm3: f64,
    pub coupling_volume_cm3: f64,
    pub gas_volume_cm3: f64,
    pub gas_dissolved_g: f64,
    pub gas_free_g: f64,
    pub oil_limited: bool,
    pub iterations: usize,
}

impl From<&EquilibriumState> for EquilibriumRow {
    fn from(s: &EquilibriumState) -> Self {
        Self {
            temperature_c: s.temperature,
            pressure_bar: s.pressure,
            floor_pressure_bar: s.floor_pressure,
            oil_volume_cm3: s.oil_volume,
            coupling_volume_cm3: s.coupling_volume,
            gas_volume_cm3: s.gas_volume,
            gas_dissolved_g: s.gas_dissolved,
            gas_free_g: s.gas_free,
            oil_limited: s.is_oil_limited(),
            iterations: s.iterations,
        }
    }
}

pub const CSV_HEADER: &str = "temperature_c,pressure_bar,floor_pressure_bar,oil_volume_cm3,\
coupling_volume_cm3,gas_volume_cm3,gas_dissolved_g,gas_free_g,oil_limited,iterations";

impl EquilibriumRow {
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            self.temperature_c,
            self.pressure_bar,
            self.floor_pressure_bar,
            self.oil_volume_cm3,
            self.coupling_volume_cm3,
            self.gas_volume_cm3,
            self.gas_dissolved_g,
            self.gas_free_g,
            self.oil_limited,
            self.iterations
        )
    }
}

pub fn to_csv(rows: &[EquilibriumRow]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(&row.csv_line());
        csv.push('\n');
    }
    csv
}

pub fn print_fill(vc: &FilledCoupling) {
    let r = vc.fill_report();
    let c = vc.fill_conditions();
    println!("Coupling: {:.2} cm³ fixed volume", vc.geometry().fixed_volume);
    println!("  Oil: {}", vc.oil());
    println!("  Gas: {}", vc.gas());
    println!(
        "  Fill: {:.1} °C, {:.3} bar ({:.1} kPa), solved fraction {:.2}",
        c.temperature,
        c.pressure,
        kpa_from_bar(c.pressure),
        c.solved_gas_fraction
    );
    println!("\nGas charge:");
    println!("  Dissolved: {:.2} mg", mg_from_grams(r.gas_dissolved));
    println!("  Free:      {:.2} mg", mg_from_grams(r.gas_free));
    println!("  Total:     {:.2} mg", mg_from_grams(r.gas_weight));
    println!("\nOil filling at 25 °C:");
    println!("  Fixed volume: {:.1}%", 100.0 * r.oil_fill_ratio_fixed);
    println!(
        "  At {:.0} bar:    {:.1}%",
        REPORT_PRESSURE,
        100.0 * r.oil_fill_ratio_at_report_pressure
    );
}

pub fn print_equilibrium(row: &EquilibriumRow) {
    println!("Equilibrium at {:.1} °C:", row.temperature_c);
    println!(
        "  Pressure: {:.4} bar ({:.1} kPa, {:.2} psi)",
        row.pressure_bar,
        kpa_from_bar(row.pressure_bar),
        psi_from_bar(row.pressure_bar)
    );
    if row.oil_limited {
        println!("  Set by oil expansion (no free headspace)");
    } else {
        println!("  Floor:    {:.4} bar", row.floor_pressure_bar);
    }
    println!("  Oil volume:  {:.3} cm³", row.oil_volume_cm3);
    println!("  Headspace:   {:.3} cm³", row.gas_volume_cm3);
    println!(
        "  Gas dissolved/free: {:.2} / {:.3} mg",
        mg_from_grams(row.gas_dissolved_g),
        mg_from_grams(row.gas_free_g)
    );
    println!("  Iterations: {}", row.iterations);
}

pub fn print_sweep_table(rows: &[EquilibriumRow]) {
    println!("{:>8}  {:>10}  {:>10}  {:>10}  {:>5}", "T [°C]", "p [bar]", "floor", "gas [cm³]", "iter");
    for row in rows {
        println!(
            "{:>8.1}  {:>10.4}  {:>10.4}  {:>10.3}  {:>5}{}",
            row.temperature_c,
            row.pressure_bar,
            row.floor_pressure_bar,
            row.gas_volume_cm3,
            row.iterations,
            if row.oil_limited { "  oil-limited" } else { "" }
        );
    }
}
