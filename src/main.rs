mod cli;
mod report;

use clap::Parser;
use cli::{Cli, Command};
use firesteel::{reduce_material, sample_curve, ReductionFactors};
use log::info;
use report::{render_curve, render_factors, render_stress};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Verbosity follows RUST_LOG; nothing is logged by default.
    env_logger::init();

    let cli = Cli::parse();

    // Resolve the room-temperature properties once. Every subcommand reduces
    // them to its own temperature.
    let material = cli.material.resolve()?;

    let report = match cli.command {
        Command::Factors { temperature } => {
            let factors = ReductionFactors::at(temperature)?;
            let reduced = reduce_material(&material, temperature)?;
            render_factors(&factors, &reduced)
        }
        Command::Stress {
            strain,
            temperature,
            model,
        } => {
            let stress = model.evaluate(&material, strain, temperature)?;
            render_stress(model, strain, temperature, stress)
        }
        Command::Curve {
            temperature,
            model,
            max_strain,
            samples,
            format,
        } => {
            let curve = sample_curve(&material, temperature, model, max_strain, samples)?;
            info!("sampled {} points", curve.len());
            render_curve(model, temperature, &curve, format)?
        }
    };
    print!("{report}");

    Ok(())
}
