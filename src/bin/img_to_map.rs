//! CLI tool for converting grayscale images into occupancy grid maps.
//!
//! Decodes the image, asks for (or takes from flags) the output path, the
//! physical map width and the origin cell, and writes the `.map` file.
//! Low cell values are free space, high values are occupied.
//!
//! # Usage
//!
//! ```bash
//! img_to_map floorplan.png
//! img_to_map floorplan.png --width-meters 10 --output floor.map --preview floor.pgm
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use naksha_map::config::ToolConfig;
use naksha_map::core::GridCoord;
use naksha_map::io::export_pgm;
use naksha_map::{ConvertOptions, MapError, image_to_map, save_map};

#[derive(Parser)]
#[command(name = "img_to_map")]
#[command(about = "Convert a grayscale image into an occupancy grid map file")]
struct Args {
    /// Input image
    image: PathBuf,

    /// Output map path; must end in .map (prompted for when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Physical width of the mapped area in meters (prompted for when omitted)
    #[arg(long)]
    width_meters: Option<f32>,

    /// Origin cell as `x,y`; its center becomes world (0, 0)
    /// (prompted for when omitted, empty input selects the image center)
    #[arg(long)]
    origin_cell: Option<String>,

    /// Also write a PGM preview of the converted map
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Tool configuration file (default: naksha.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("img_to_map=info".parse().unwrap()),
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

    let img = image::open(&args.image)?.to_luma8();
    println!(
        "Loaded {} ({} x {} px)",
        args.image.display(),
        img.width(),
        img.height()
    );
    println!("Low = free cell, high = occupied cell.");
    println!("Cell values are 127 minus the pixel intensity.");

    let output = resolve_output(args.output.as_deref(), &config.convert.default_output)?;
    let map_width_m = resolve_map_width(args.width_meters)?;
    let origin_cell = resolve_origin_cell(args.origin_cell.as_deref(), img.width(), img.height())?;

    let options = ConvertOptions {
        map_width_m,
        origin_cell,
    };
    let map = image_to_map(&img, &options)?;

    println!(
        "Using {} meters per cell. Map size is {}x{} cells.",
        map.header.meters_per_cell, map.header.width, map.header.height
    );

    save_map(&map, Path::new(&output))?;
    println!("Wrote map file to: {}", output);

    if let Some(preview) = &args.preview {
        export_pgm(&map, preview)?;
        println!("Wrote preview image to: {}", preview.display());
    }

    Ok(())
}

fn prompt(question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn resolve_output(flag: Option<&str>, default: &str) -> naksha_map::Result<String> {
    let value = match flag {
        Some(v) => v.trim().to_string(),
        None => prompt(&format!("Enter the path to save the map (default: {}): ", default))?
            .trim()
            .to_string(),
    };
    if value.is_empty() || !value.ends_with(".map") {
        println!("Using default path {}", default);
        return Ok(default.to_string());
    }
    Ok(value)
}

fn resolve_map_width(flag: Option<f32>) -> naksha_map::Result<f32> {
    let value = match flag {
        Some(v) => v,
        None => {
            let line = prompt("Enter the width of the map (meters): ")?;
            line.trim().parse().map_err(|_| {
                MapError::InvalidParameter(format!("map width must be a number, got {:?}", line.trim()))
            })?
        }
    };
    Ok(value)
}

fn resolve_origin_cell(
    flag: Option<&str>,
    width: u32,
    height: u32,
) -> naksha_map::Result<Option<GridCoord>> {
    let default = (width / 2, height / 2);
    let value = match flag {
        Some(v) => v.to_string(),
        None => prompt(&format!(
            "Enter the origin cell, comma separated (default: [{}, {}]): ",
            default.0, default.1
        ))?,
    };
    let value = value.trim();
    if value.is_empty() {
        println!("Using origin [{}, {}]", default.0, default.1);
        return Ok(None);
    }

    let coord = parse_origin_cell(value)?;
    println!("Using origin [{}, {}]", coord.x, coord.y);
    Ok(Some(coord))
}

fn parse_origin_cell(value: &str) -> naksha_map::Result<GridCoord> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(MapError::InvalidParameter(format!(
            "origin cell must be `x,y`, got {:?}",
            value
        )));
    }
    let x = parts[0].parse().map_err(|_| {
        MapError::InvalidParameter(format!("origin cell x must be an integer, got {:?}", parts[0]))
    })?;
    let y = parts[1].parse().map_err(|_| {
        MapError::InvalidParameter(format!("origin cell y must be an integer, got {:?}", parts[1]))
    })?;
    Ok(GridCoord::new(x, y))
}
