//! Crop a map to a minimal centered square region around occupied cells.
//!
//! The crop keeps a padding margin around the occupied bounding box and
//! produces a square output whenever the source grid allows it. The
//! returned header is guaranteed to agree with the returned grid shape;
//! geometry that cannot be satisfied fails instead of producing a
//! mismatched map.

use crate::core::{MapFile, MapHeader, WorldPoint};
use crate::error::{MapError, Result};

/// Default margin of cells kept around the occupied region
pub const DEFAULT_PADDING: usize = 10;

/// Crop a map to a square region covering all non-zero cells plus
/// `padding` cells of margin per side.
///
/// The output side length is `max(row_span, col_span) + 2 * padding + 1`,
/// rounded up to even and clamped to the source dimensions. The origin is
/// translated so cropped cells keep their world positions. Fails with
/// [`MapError::EmptyMap`] when the grid has no occupied cell.
pub fn crop_map(map: &MapFile, padding: usize) -> Result<MapFile> {
    let header = &map.header;
    let grid = &map.grid;

    let bounds = grid.occupied_bounds().ok_or(MapError::EmptyMap)?;

    let height = grid.height() as i64;
    let width = grid.width() as i64;
    let pad = padding as i64;

    // Square side covering the larger span plus margin on both sides.
    let mut size = (bounds.row_span() as i64 + 2 * pad + 1)
        .max(bounds.col_span() as i64 + 2 * pad + 1);

    let mut min_row = (bounds.min_row as i64 - pad).max(0);
    let mut max_row = (bounds.max_row as i64 + pad).min(height - 1);
    let mut min_col = (bounds.min_col as i64 - pad).max(0);
    let mut max_col = (bounds.max_col as i64 + pad).min(width - 1);

    if size % 2 != 0 {
        size += 1;
        max_row += 1;
        max_col += 1;
    }

    size = size.min(height).min(width);

    let (min_row, max_row) = fit_window(min_row, max_row, size, height)?;
    let (min_col, max_col) = fit_window(min_col, max_col, size, width)?;

    let cropped = grid.sub_grid(min_row..max_row + 1, min_col..max_col + 1);

    // The header declares size x size; the slice must agree exactly.
    if cropped.width() != size as usize || cropped.height() != size as usize {
        return Err(MapError::DegenerateCrop(format!(
            "cropped shape {}x{} does not match target size {}",
            cropped.width(),
            cropped.height(),
            size
        )));
    }

    let origin = WorldPoint::new(
        header.origin.x + min_col as f32 * header.meters_per_cell,
        header.origin.y + min_row as f32 * header.meters_per_cell,
    );
    let new_header = MapHeader::new(origin, size as usize, size as usize, header.meters_per_cell);

    Ok(MapFile::new(new_header, cropped))
}

/// Adjust an inclusive `[lo, hi]` window to span exactly `size` cells
/// inside `[0, limit)`.
///
/// A window narrower than `size` grows symmetrically, with any odd
/// remainder growing the high side. The window is then forced to exactly
/// `size` cells and shifted back inside the bounds, which is always
/// possible once `size <= limit`.
fn fit_window(mut lo: i64, mut hi: i64, size: i64, limit: i64) -> Result<(usize, usize)> {
    if size <= 0 || size > limit {
        return Err(MapError::DegenerateCrop(format!(
            "window of {} cells cannot fit in a {}-cell axis",
            size, limit
        )));
    }

    let deficit = (size - 1) - (hi - lo);
    if deficit > 0 {
        lo -= deficit / 2;
        hi += deficit - deficit / 2;
    }

    // Exact length, then shift inside [0, limit).
    hi = lo + size - 1;
    if lo < 0 {
        hi -= lo;
        lo = 0;
    }
    if hi > limit - 1 {
        lo -= hi - (limit - 1);
        hi = limit - 1;
    }

    if lo < 0 || hi - lo + 1 != size {
        return Err(MapError::DegenerateCrop(format!(
            "window [{}, {}] does not span {} cells",
            lo, hi, size
        )));
    }

    Ok((lo as usize, hi as usize))
}
