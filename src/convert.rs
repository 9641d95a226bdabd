//! Convert grayscale images into occupancy grid maps.
//!
//! Pixel intensity v maps to occupancy `127 - v`: bright pixels (free
//! space) become low or negative values, dark pixels (obstacles) become
//! high values. The image is flipped vertically so its top row becomes the
//! map's northernmost row, keeping grid row 0 as the southernmost world
//! row.

use image::GrayImage;

use crate::core::{GridCoord, MapFile, MapHeader, WorldPoint};
use crate::error::{MapError, Result};
use crate::grid::Grid;

/// Parameters for image conversion.
#[derive(Clone, Copy, Debug)]
pub struct ConvertOptions {
    /// Physical width of the mapped area in meters
    pub map_width_m: f32,
    /// Grid cell whose center becomes world (0, 0); None selects the
    /// image center
    pub origin_cell: Option<GridCoord>,
}

/// Convert a grayscale image into a map.
///
/// The resolution is `map_width_m / image_width_px`, and the origin is
/// placed so that the chosen origin cell's center sits at world (0, 0).
pub fn image_to_map(img: &GrayImage, options: &ConvertOptions) -> Result<MapFile> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        return Err(MapError::InvalidParameter(
            "image has zero size".to_string(),
        ));
    }
    if !(options.map_width_m > 0.0) {
        return Err(MapError::InvalidParameter(format!(
            "map width must be positive meters, got {}",
            options.map_width_m
        )));
    }

    let meters_per_cell = options.map_width_m / width as f32;

    let mut grid = Grid::zeros(width, height);
    for y in 0..height {
        // image row 0 is the top; grid row 0 is the southernmost row
        let src = (height - 1 - y) as u32;
        let row = grid.row_mut(y);
        for (x, cell) in row.iter_mut().enumerate() {
            let v = img.get_pixel(x as u32, src).0[0] as i32;
            *cell = 127 - v;
        }
    }

    let origin_cell = options
        .origin_cell
        .unwrap_or_else(|| GridCoord::new(width as i32 / 2, height as i32 / 2));
    let origin = WorldPoint::new(
        -meters_per_cell * origin_cell.x as f32 - meters_per_cell / 2.0,
        -meters_per_cell * origin_cell.y as f32 - meters_per_cell / 2.0,
    );

    let header = MapHeader::new(origin, width, height, meters_per_cell);
    Ok(MapFile::new(header, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_mid_gray_image_maps_to_zero_occupancy() {
        let img = GrayImage::from_pixel(100, 100, Luma([127u8]));
        let options = ConvertOptions {
            map_width_m: 10.0,
            origin_cell: None,
        };
        let map = image_to_map(&img, &options).unwrap();

        assert_eq!(map.header.width, 100);
        assert_eq!(map.header.height, 100);
        assert!((map.header.meters_per_cell - 0.1).abs() < 1e-6);
        assert!((map.header.origin.x + 5.05).abs() < 1e-5);
        assert!((map.header.origin.y + 5.05).abs() < 1e-5);
        assert!(map.grid.rows().all(|row| row.iter().all(|&v| v == 0)));
    }

    #[test]
    fn test_intensity_mapping_range() {
        let mut img = GrayImage::from_pixel(2, 1, Luma([0u8]));
        img.put_pixel(1, 0, Luma([255u8]));
        let options = ConvertOptions {
            map_width_m: 2.0,
            origin_cell: None,
        };
        let map = image_to_map(&img, &options).unwrap();

        // black -> 127 (occupied), white -> -128 (free)
        assert_eq!(map.grid.get(GridCoord::new(0, 0)), Some(127));
        assert_eq!(map.grid.get(GridCoord::new(1, 0)), Some(-128));
    }

    #[test]
    fn test_vertical_flip() {
        // top row dark, bottom row bright
        let mut img = GrayImage::from_pixel(2, 2, Luma([200u8]));
        img.put_pixel(0, 0, Luma([10u8]));
        img.put_pixel(1, 0, Luma([10u8]));
        let options = ConvertOptions {
            map_width_m: 1.0,
            origin_cell: None,
        };
        let map = image_to_map(&img, &options).unwrap();

        // image top lands on the northernmost grid row
        assert_eq!(map.grid.row(1), &[117, 117]);
        assert_eq!(map.grid.row(0), &[-73, -73]);
    }

    #[test]
    fn test_explicit_origin_cell() {
        let img = GrayImage::from_pixel(10, 10, Luma([127u8]));
        let options = ConvertOptions {
            map_width_m: 10.0,
            origin_cell: Some(GridCoord::new(0, 0)),
        };
        let map = image_to_map(&img, &options).unwrap();

        // cell (0, 0) center at world zero: origin is half a cell negative
        assert!((map.header.origin.x + 0.5).abs() < 1e-6);
        assert!((map.header.origin.y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let img = GrayImage::from_pixel(4, 4, Luma([0u8]));
        for bad in [0.0f32, -2.5] {
            let options = ConvertOptions {
                map_width_m: bad,
                origin_cell: None,
            };
            assert!(matches!(
                image_to_map(&img, &options),
                Err(MapError::InvalidParameter(_))
            ));
        }
    }
}
