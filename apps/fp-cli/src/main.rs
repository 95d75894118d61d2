use clap::{Parser, Subcommand};
use fp_eos::State;
use fp_fluids::{list_available_fluids, load_fluid_by_name};
use fp_props::{prop_si_in, PropsError};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fp-cli")]
#[command(about = "FluidProp CLI - pure fluid property queries", long_about = None)]
struct Cli {
    /// Catalog directory containing the fluid JSON records
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query one property from two named state variables
    Query {
        /// Output property (e.g. D, H, CP, P_SAT, VISCOSITY)
        output: String,
        /// First input name (T, P, D, H, S, Q)
        name1: String,
        /// First input value, SI molar units
        value1: f64,
        /// Second input name
        name2: String,
        /// Second input value, SI molar units
        value2: f64,
        /// Fluid name or registry alias
        fluid: String,
    },
    /// List the fluids known to the alias registry
    Fluids,
    /// Print pressure over a density ladder at fixed temperature
    Scan {
        /// Fluid name or registry alias
        fluid: String,
        /// Temperature [K]
        #[arg(long, default_value_t = 300.0)]
        temperature: f64,
        /// Report each pressure's offset from this target [Pa]
        #[arg(long)]
        target_pressure: Option<f64>,
    },
}

fn main() -> Result<(), PropsError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            output,
            name1,
            value1,
            name2,
            value2,
            fluid,
        } => cmd_query(
            &cli.data_dir,
            &output,
            &name1,
            value1,
            &name2,
            value2,
            &fluid,
        ),
        Commands::Fluids => cmd_fluids(),
        Commands::Scan {
            fluid,
            temperature,
            target_pressure,
        } => cmd_scan(&cli.data_dir, &fluid, temperature, target_pressure),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_query(
    data_dir: &Path,
    output: &str,
    name1: &str,
    value1: f64,
    name2: &str,
    value2: f64,
    fluid: &str,
) -> Result<(), PropsError> {
    let value = prop_si_in(output, name1, value1, name2, value2, fluid, data_dir)?;
    println!(
        "{}({}={}, {}={}) of {} = {}",
        output.to_uppercase(),
        name1.to_uppercase(),
        value1,
        name2.to_uppercase(),
        value2,
        fluid,
        value
    );
    Ok(())
}

fn cmd_fluids() -> Result<(), PropsError> {
    println!("Registered fluids:");
    for name in list_available_fluids() {
        println!("  {name}");
    }
    Ok(())
}

fn cmd_scan(
    data_dir: &Path,
    fluid_name: &str,
    temperature: f64,
    target_pressure: Option<f64>,
) -> Result<(), PropsError> {
    let fluid = load_fluid_by_name(fluid_name, data_dir)?;
    let mut state = State::new(&fluid)?;

    println!(
        "Critical point: T={} K, P={} Pa, rho={} mol/m3",
        fluid.states.critical.t, fluid.states.critical.p, fluid.states.critical.rhomolar
    );
    println!("\nDensity scan at T={temperature} K:");

    let densities = [
        1e-8, 1e-6, 1e-4, 1e-2, 1.0, 10.0, 100.0, 1000.0, 5000.0, 10000.0, 20000.0, 40000.0,
    ];

    for rho in densities {
        state.update(temperature, rho);
        let p = state.pressure();
        match target_pressure {
            Some(target) => {
                println!("rho={rho:>12.6e} -> P={p:>14.6e} Pa (offset={:>14.6e})", p - target)
            }
            None => println!("rho={rho:>12.6e} -> P={p:>14.6e} Pa"),
        }
    }

    Ok(())
}
