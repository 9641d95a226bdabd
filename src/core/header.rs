//! Map header and map file types.

use crate::core::WorldPoint;
use crate::error::{MapError, Result};
use crate::grid::Grid;

/// Scalar parameters describing an occupancy grid map.
///
/// The origin is the world coordinate of the map's bottom-left (southwest)
/// cell corner. Row 0 of the associated grid is the southernmost row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapHeader {
    /// World coordinates of the bottom-left cell corner
    pub origin: WorldPoint,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Linear size of one cell in meters (map resolution)
    pub meters_per_cell: f32,
}

impl MapHeader {
    /// Create a new map header
    pub fn new(origin: WorldPoint, width: usize, height: usize, meters_per_cell: f32) -> Self {
        Self {
            origin,
            width,
            height,
            meters_per_cell,
        }
    }

    /// Check the header invariants: positive dimensions and resolution
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::Format(format!(
                "map dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.meters_per_cell > 0.0) {
            return Err(MapError::Format(format!(
                "meters per cell must be positive, got {}",
                self.meters_per_cell
            )));
        }
        Ok(())
    }
}

/// A complete map: header plus cell data.
#[derive(Clone, Debug, PartialEq)]
pub struct MapFile {
    /// Scalar map parameters
    pub header: MapHeader,
    /// Occupancy values, shape (height, width)
    pub grid: Grid,
}

impl MapFile {
    /// Pair a header with its grid
    pub fn new(header: MapHeader, grid: Grid) -> Self {
        Self { header, grid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_dimensions() {
        let header = MapHeader::new(WorldPoint::ZERO, 10, 5, 0.05);
        assert!(header.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let header = MapHeader::new(WorldPoint::ZERO, 0, 5, 0.05);
        assert!(matches!(header.validate(), Err(MapError::Format(_))));
    }

    #[test]
    fn test_validate_rejects_zero_resolution() {
        let header = MapHeader::new(WorldPoint::ZERO, 10, 5, 0.0);
        assert!(matches!(header.validate(), Err(MapError::Format(_))));
    }

    #[test]
    fn test_validate_rejects_nan_resolution() {
        let header = MapHeader::new(WorldPoint::ZERO, 10, 5, f32::NAN);
        assert!(header.validate().is_err());
    }
}
