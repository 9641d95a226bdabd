//! Occupancy grid cell storage.

mod storage;

pub use storage::{CellBounds, Grid};
