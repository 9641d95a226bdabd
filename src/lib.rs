//! # Naksha-Map: Occupancy Grid Map Preparation Tools
//!
//! Utilities for preparing 2D occupancy-grid maps as used by robot
//! localization and navigation stacks:
//!
//! - **Crop**: shrink a map to a minimal centered square region around its
//!   occupied cells, keeping a padding margin ([`crop_map`])
//! - **Convert**: turn a grayscale image into a map with user-chosen scale
//!   and origin ([`image_to_map`])
//!
//! Both operate on the same data model: a [`MapHeader`] of scalar
//! parameters (origin, dimensions, resolution) paired with a row-major
//! integer [`Grid`], persisted in a whitespace-delimited text format.
//!
//! ## Map File Format
//!
//! ```text
//! origin_x origin_y width height meters_per_cell
//! <width integers>            row 0 (south)
//! ...
//! <width integers>            row height-1 (north)
//! ```
//!
//! Row 0 is the southernmost row; the origin is the world coordinate of
//! the bottom-left cell corner.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use naksha_map::{crop_map, load_map, save_map, DEFAULT_PADDING};
//! use std::path::Path;
//!
//! # fn main() -> naksha_map::Result<()> {
//! let (map, repairs) = load_map(Path::new("floor1.map"))?;
//! for repair in &repairs {
//!     eprintln!("repaired: {}", repair);
//! }
//! let cropped = crop_map(&map, DEFAULT_PADDING)?;
//! save_map(&cropped, Path::new("cropped_map.map"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: header and coordinate types
//! - [`grid`]: row-major cell storage
//! - [`io`]: text map format and PGM preview export
//! - [`crop`]: bounding-box crop with padding and centering
//! - [`convert`]: grayscale image to map conversion
//! - [`config`]: optional TOML tool configuration

pub mod config;
pub mod convert;
pub mod core;
pub mod crop;
pub mod error;
pub mod grid;
pub mod io;

pub use crate::config::{ConvertConfig, CropConfig, ToolConfig};
pub use crate::convert::{ConvertOptions, image_to_map};
pub use crate::core::{GridCoord, MapFile, MapHeader, WorldPoint};
pub use crate::crop::{DEFAULT_PADDING, crop_map};
pub use crate::error::{MapError, Result};
pub use crate::grid::{CellBounds, Grid};
pub use crate::io::{RowRepair, load_map, read_map, save_map, write_map};
