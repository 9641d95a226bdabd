//! Map persistence and export.
//!
//! - **Text `.map` format**: header line plus integer rows
//!   ([`load_map`] / [`read_map`] / [`save_map`] / [`write_map`])
//! - **PGM export**: grayscale preview images for inspection
//!   ([`export_pgm`] / [`write_pgm`])

pub mod map_format;
pub mod pgm;

pub use map_format::{RowRepair, load_map, read_map, save_map, write_map};
pub use pgm::{export_pgm, write_pgm};
