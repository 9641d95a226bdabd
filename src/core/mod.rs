//! Core types for the map preparation tools.
//!
//! - [`MapHeader`] and [`MapFile`]: scalar map parameters and the
//!   header+grid pair read from and written to disk
//! - [`GridCoord`] and [`WorldPoint`]: coordinate types

mod header;
mod point;

pub use header::{MapFile, MapHeader};
pub use point::{GridCoord, WorldPoint};
