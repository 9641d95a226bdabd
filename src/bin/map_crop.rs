//! CLI tool for cropping occupancy grid maps.
//!
//! Reads a `.map` file, crops it to a minimal centered square region
//! around the occupied cells plus a padding margin, and writes the result.
//!
//! # Usage
//!
//! ```bash
//! map_crop floor1.map
//! map_crop floor1.map --padding 5 --output floor1_cropped.map
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::warn;

use naksha_map::config::ToolConfig;
use naksha_map::{MapError, crop_map, load_map, save_map};

#[derive(Parser)]
#[command(name = "map_crop")]
#[command(about = "Crop an occupancy grid map around its occupied cells")]
struct Args {
    /// Input map file
    map: PathBuf,

    /// Cells of margin kept around the occupied region (overrides config)
    #[arg(long)]
    padding: Option<usize>,

    /// Output map path (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tool configuration file (default: naksha.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("map_crop=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> naksha_map::Result<()> {
    let config = match &args.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::load_or_default()?,
    };

    let padding = args.padding.unwrap_or(config.crop.padding);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.crop.output));

    if !args.map.exists() {
        return Err(MapError::InvalidParameter(format!(
            "map file {} does not exist",
            args.map.display()
        )));
    }

    println!("Reading map file: {}", args.map.display());

    let (map, repairs) = load_map(&args.map)?;
    for repair in &repairs {
        warn!("{}", repair);
    }

    println!();
    println!(
        "Header: origin ({}, {}), {} x {} cells, {} m/cell",
        map.header.origin.x,
        map.header.origin.y,
        map.header.width,
        map.header.height,
        map.header.meters_per_cell
    );

    let cropped = crop_map(&map, padding)?;

    println!();
    println!(
        "Cropped map to size ({}, {})",
        cropped.header.width, cropped.header.height
    );

    save_map(&cropped, &output)?;

    println!();
    println!("Wrote cropped map to {}", output.display());

    Ok(())
}
