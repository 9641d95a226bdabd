//! PGM export for visual inspection of map files.
//!
//! Writes binary (P5) PGM images. The gray value is `127 - occupancy`
//! clamped to 0-255, the inverse of the image converter's intensity
//! mapping, so free cells render bright and occupied cells dark. Rows are
//! emitted north-first so the image appears upright.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::MapFile;
use crate::error::Result;

/// Export a map as a P5 PGM image, creating or overwriting the file
pub fn export_pgm(map: &MapFile, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pgm(map, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a map as a P5 PGM image to a writer
pub fn write_pgm<W: Write>(map: &MapFile, writer: &mut W) -> Result<()> {
    write!(
        writer,
        "P5\n{} {}\n255\n",
        map.grid.width(),
        map.grid.height()
    )?;

    let mut scanline = Vec::with_capacity(map.grid.width());
    for row in map.grid.rows().rev() {
        scanline.clear();
        scanline.extend(row.iter().map(|&value| (127 - value).clamp(0, 255) as u8));
        writer.write_all(&scanline)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, MapHeader, WorldPoint};
    use crate::grid::Grid;

    #[test]
    fn test_pgm_header_and_size() {
        let header = MapHeader::new(WorldPoint::ZERO, 3, 2, 0.1);
        let map = MapFile::new(header, Grid::zeros(3, 2));

        let mut buffer = Vec::new();
        write_pgm(&map, &mut buffer).unwrap();

        let preamble = b"P5\n3 2\n255\n";
        assert_eq!(&buffer[..preamble.len()], preamble);
        assert_eq!(buffer.len(), preamble.len() + 6);
        // all-zero occupancy renders as uniform gray 127
        assert!(buffer[preamble.len()..].iter().all(|&b| b == 127));
    }

    #[test]
    fn test_pgm_rows_north_first() {
        let header = MapHeader::new(WorldPoint::ZERO, 1, 2, 0.1);
        let mut grid = Grid::zeros(1, 2);
        grid.set(GridCoord::new(0, 0), 127); // south row, fully occupied
        let map = MapFile::new(header, grid);

        let mut buffer = Vec::new();
        write_pgm(&map, &mut buffer).unwrap();

        let pixels = &buffer[b"P5\n1 2\n255\n".len()..];
        // north row first (empty -> 127), then the occupied south row (-> 0)
        assert_eq!(pixels, &[127, 0]);
    }

    #[test]
    fn test_pgm_clamps_extreme_values() {
        let header = MapHeader::new(WorldPoint::ZERO, 2, 1, 0.1);
        let mut grid = Grid::zeros(2, 1);
        grid.set(GridCoord::new(0, 0), 1000);
        grid.set(GridCoord::new(1, 0), -1000);
        let map = MapFile::new(header, grid);

        let mut buffer = Vec::new();
        write_pgm(&map, &mut buffer).unwrap();

        let pixels = &buffer[b"P5\n2 1\n255\n".len()..];
        assert_eq!(pixels, &[0, 255]);
    }
}
