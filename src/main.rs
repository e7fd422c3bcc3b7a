use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::path::PathBuf;

use schelling_common::{load_rounds, ModelDescription};

mod layout;
mod render;

/// Command-line arguments for the locations plotter.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the model description file (.json)
    model: PathBuf,

    /// Path to the binary per-round locations file (.bin)
    locations: PathBuf,

    /// Path of the figure to write (format chosen by extension)
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logger
    Builder::from_default_env()
        .filter(None, LevelFilter::Info)
        .init();

    let args = Args::parse();

    info!("Starting Schelling locations plotter...");
    info!("Model file: {}", args.model.display());
    info!("Locations file: {}", args.locations.display());
    info!("Output figure: {}", args.output.display());

    let model = ModelDescription::load(&args.model)?;
    info!("Loaded model description '{}'", model.label());

    let rounds = load_rounds(&args.locations)?;
    info!("Loaded {} round snapshots", rounds.len());

    render::render_rounds(&rounds, model.label(), &args.output)?;
    info!("Figure saved to {}", args.output.display());

    Ok(())
}
