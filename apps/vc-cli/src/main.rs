mod error;
mod report;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vc_project::Scenario;

use error::{CliError, CliResult};
use report::EquilibriumRow;

#[derive(Parser)]
#[command(name = "vc-cli")]
#[command(about = "Viscous coupling gas/oil model", long_about = None)]
struct Cli {
    /// Log solver iterations
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
    },
    /// Fill the coupling and report the gas charge
    Fill {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
    },
    /// Equilibrium pressure at one temperature
    Equilibrium {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
        /// Temperature in °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Equilibrium pressure over a temperature range
    Sweep {
        /// Path to the scenario file (YAML or JSON)
        scenario_path: PathBuf,
        /// First temperature in °C (defaults to the scenario's sweep block)
        #[arg(long, allow_negative_numbers = true)]
        from: Option<f64>,
        /// Last temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,
        /// Number of temperatures
        #[arg(long)]
        points: Option<usize>,
        /// Print the points as JSON
        #[arg(long)]
        json: bool,
        /// Write the points as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = if verbose {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Fill { scenario_path } => cmd_fill(&scenario_path),
        Commands::Equilibrium {
            scenario_path,
            temperature,
            json,
        } => cmd_equilibrium(&scenario_path, temperature, json),
        Commands::Sweep {
            scenario_path,
            from,
            to,
            points,
            json,
            output,
        } => cmd_sweep(&scenario_path, from, to, points, json, output.as_deref()),
    }
}

fn load(scenario_path: &Path) -> CliResult<Scenario> {
    let scenario = vc_project::load(scenario_path)?;
    tracing::debug!(name = %scenario.name, "scenario loaded");
    Ok(scenario)
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load(scenario_path)?;
    scenario.empty_coupling()?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    Ok(())
}

fn cmd_fill(scenario_path: &Path) -> CliResult<()> {
    let scenario = load(scenario_path)?;
    let vc = scenario.filled_coupling()?;
    report::print_fill(&vc);
    Ok(())
}

fn cmd_equilibrium(scenario_path: &Path, temperature: f64, json: bool) -> CliResult<()> {
    let scenario = load(scenario_path)?;
    let vc = scenario.filled_coupling()?;
    let row = EquilibriumRow::from(&vc.equilibrium_state(temperature)?);
    if json {
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        report::print_equilibrium(&row);
    }
    Ok(())
}

fn cmd_sweep(
    scenario_path: &Path,
    from: Option<f64>,
    to: Option<f64>,
    points: Option<usize>,
    json: bool,
    output: Option<&Path>,
) -> CliResult<()> {
    let scenario = load(scenario_path)?;
    let vc = scenario.filled_coupling()?;

    let mut opts = scenario.sweep_options();
    opts.from = from.unwrap_or(opts.from);
    opts.to = to.unwrap_or(opts.to);
    opts.points = points.unwrap_or(opts.points);

    let rows: Vec<EquilibriumRow> = vc
        .sweep_with(&opts)?
        .iter()
        .map(EquilibriumRow::from)
        .collect();

    if let Some(path) = output {
        std::fs::write(path, report::to_csv(&rows)).map_err(|source| CliError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        println!("✓ Exported {} points to {}", rows.len(), path.display());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        report::print_sweep_table(&rows);
    }
    Ok(())
}
