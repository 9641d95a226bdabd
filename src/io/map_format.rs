//! Text `.map` format for occupancy grid maps.
//!
//! Format:
//! - Header line: 5 whitespace-separated scalars
//!   `origin_x origin_y width height meters_per_cell`
//! - `height` data lines of `width` whitespace-separated integers
//! - Row 0 is the southernmost row in world coordinates
//!
//! Malformed data rows are repaired rather than rejected: short rows are
//! zero-padded, long rows truncated, missing rows appended as zeros and
//! extra rows dropped. Every repair is reported in the returned
//! [`RowRepair`] list so callers can surface them as warnings. Unparseable
//! tokens and header problems abort the parse with a format error.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::core::{MapFile, MapHeader, WorldPoint};
use crate::error::{MapError, Result};
use crate::grid::Grid;

/// Number of scalar fields in the header line
const HEADER_FIELDS: usize = 5;

/// A repair applied to malformed map data while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRepair {
    /// Row had fewer cells than the declared width; zero-padded
    ShortRow {
        /// Row index (0 = south)
        row: usize,
        /// Number of cells found
        len: usize,
        /// Declared width
        expected: usize,
    },
    /// Row had more cells than the declared width; truncated
    LongRow {
        /// Row index (0 = south)
        row: usize,
        /// Number of cells found
        len: usize,
        /// Declared width
        expected: usize,
    },
    /// File had fewer rows than the declared height; zero rows appended
    MissingRows {
        /// Number of rows found
        found: usize,
        /// Declared height
        expected: usize,
    },
    /// File had more rows than the declared height; extra rows dropped
    ExtraRows {
        /// Number of rows found
        found: usize,
        /// Declared height
        expected: usize,
    },
}

impl fmt::Display for RowRepair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRepair::ShortRow { row, len, expected } => {
                write!(
                    f,
                    "row {} has {} cells, expected {}; zero-padded",
                    row, len, expected
                )
            }
            RowRepair::LongRow { row, len, expected } => {
                write!(
                    f,
                    "row {} has {} cells, expected {}; truncated",
                    row, len, expected
                )
            }
            RowRepair::MissingRows { found, expected } => {
                write!(
                    f,
                    "map has {} rows, expected {}; zero rows appended",
                    found, expected
                )
            }
            RowRepair::ExtraRows { found, expected } => {
                write!(
                    f,
                    "map has {} rows, expected {}; extra rows dropped",
                    found, expected
                )
            }
        }
    }
}

/// Load a map from a `.map` file
pub fn load_map(path: &Path) -> Result<(MapFile, Vec<RowRepair>)> {
    let file = File::open(path)?;
    read_map(&mut BufReader::new(file))
}

/// Read a map from a reader in `.map` text format
pub fn read_map<R: BufRead>(reader: &mut R) -> Result<(MapFile, Vec<RowRepair>)> {
    let mut lines = reader.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| MapError::Format("missing header line".to_string()))??;
    let header = parse_header(&header_line)?;

    let mut grid = Grid::zeros(header.width, header.height);
    let mut repairs = Vec::new();
    let mut rows_read = 0usize;
    let mut extra_rows = 0usize;

    for line in lines {
        let line = line?;
        if rows_read < header.height {
            let row = parse_row(&line, rows_read, header.width, &mut repairs)?;
            grid.row_mut(rows_read).copy_from_slice(&row);
            rows_read += 1;
        } else {
            extra_rows += 1;
        }
    }

    if extra_rows > 0 {
        repairs.push(RowRepair::ExtraRows {
            found: header.height + extra_rows,
            expected: header.height,
        });
    }
    if rows_read < header.height {
        // grid rows past rows_read are already zero-filled
        repairs.push(RowRepair::MissingRows {
            found: rows_read,
            expected: header.height,
        });
    }

    Ok((MapFile::new(header, grid), repairs))
}

/// Save a map to a `.map` file, creating or overwriting it
pub fn save_map(map: &MapFile, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_map(map, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a map to a writer in `.map` text format
///
/// The grid shape must match the header dimensions exactly; a mismatch is
/// a format error and nothing is written.
pub fn write_map<W: Write>(map: &MapFile, writer: &mut W) -> Result<()> {
    let header = &map.header;
    header.validate()?;
    if map.grid.width() != header.width || map.grid.height() != header.height {
        return Err(MapError::Format(format!(
            "grid shape {}x{} does not match header {}x{}",
            map.grid.width(),
            map.grid.height(),
            header.width,
            header.height
        )));
    }

    writeln!(
        writer,
        "{} {} {} {} {}",
        header.origin.x, header.origin.y, header.width, header.height, header.meters_per_cell
    )?;

    for row in map.grid.rows() {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                writer.write_all(b" ")?;
            }
            write!(writer, "{}", value)?;
        }
        writer.write_all(b"\n")?;
    }

    Ok(())
}

fn parse_header(line: &str) -> Result<MapHeader> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < HEADER_FIELDS {
        return Err(MapError::Format(format!(
            "header has {} fields, expected {}",
            tokens.len(),
            HEADER_FIELDS
        )));
    }

    let origin_x: f32 = parse_field(tokens[0], "origin_x")?;
    let origin_y: f32 = parse_field(tokens[1], "origin_y")?;
    let width: usize = parse_field(tokens[2], "width")?;
    let height: usize = parse_field(tokens[3], "height")?;
    let meters_per_cell: f32 = parse_field(tokens[4], "meters_per_cell")?;

    let header = MapHeader::new(
        WorldPoint::new(origin_x, origin_y),
        width,
        height,
        meters_per_cell,
    );
    header.validate()?;
    Ok(header)
}

fn parse_field<T: FromStr>(token: &str, name: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| MapError::Format(format!("invalid {}: {:?}", name, token)))
}

fn parse_row(
    line: &str,
    row: usize,
    width: usize,
    repairs: &mut Vec<RowRepair>,
) -> Result<Vec<i32>> {
    let mut values = Vec::with_capacity(width);
    for token in line.split_whitespace() {
        let value: i32 = token.parse().map_err(|_| {
            MapError::Format(format!("row {}: invalid cell value {:?}", row, token))
        })?;
        values.push(value);
    }

    if values.len() < width {
        repairs.push(RowRepair::ShortRow {
            row,
            len: values.len(),
            expected: width,
        });
        values.resize(width, 0);
    } else if values.len() > width {
        repairs.push(RowRepair::LongRow {
            row,
            len: values.len(),
            expected: width,
        });
        values.truncate(width);
    }

    Ok(values)
}
