//! Tile grid computation.
//!
//! The grid starts half a tile above and to the left of the canvas origin and
//! extends past the far edges by an overscan margin, so the clipped output
//! is fully covered:
//!
//! ```text
//!   columns = floor((canvas.width  + 2 * tile.width)  / (tile.width  - offset.x))
//!   rows    = floor((canvas.height + 2 * tile.height) / (tile.height - offset.y))
//!
//!   x(c) = c * tile.width  - tile.width / 2  - offset.x * c
//!   y(r) = r * tile.height - tile.height / 2 - offset.y * r
//! ```
//!
//! A positive offset pulls successive tiles closer together (overlap), a
//! negative one pushes them apart (gap). The first row and column are never
//! shifted.

use tracing::debug;

use crate::error::{Axis, PatternError, Result};
use crate::geometry::{Coordinate, Size};

/// Upper bound on the number of tiles in one grid.
pub const MAX_TILE_COUNT: u64 = 1_000_000;

/// Row-major tile placements covering a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    /// Number of tiles per row.
    pub columns: usize,

    /// Number of rows.
    pub rows: usize,

    /// Top-left coordinate of every tile, row 0 first.
    pub coordinates: Vec<Coordinate>,
}

impl TileGrid {
    /// Total number of tiles (`rows * columns`).
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinate of the tile at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Option<Coordinate> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.coordinates.get(row * self.columns + column).copied()
    }
}

/// Compute the tile placements for `tile`-sized tiles on a `canvas`.
///
/// # Errors
///
/// - [`PatternError::InvalidTile`] if a tile dimension is not positive
/// - [`PatternError::InvalidCanvas`] if a canvas dimension is not positive
/// - [`PatternError::InvalidOffset`] if an offset component is not finite or
///   is at least the tile size on its axis (the spacing would be zero or
///   negative)
/// - [`PatternError::TooManyTiles`] if the grid exceeds [`MAX_TILE_COUNT`]
pub fn compute_grid(tile: Size, canvas: Size, offset: Coordinate) -> Result<TileGrid> {
    if !tile.is_positive() {
        return Err(PatternError::InvalidTile {
            width: tile.width,
            height: tile.height,
        });
    }
    if !canvas.is_positive() {
        return Err(PatternError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }
    check_offset(Axis::X, offset.x, tile.width)?;
    check_offset(Axis::Y, offset.y, tile.height)?;

    let columns = track_count(canvas.width, tile.width, offset.x);
    let rows = track_count(canvas.height, tile.height, offset.y);

    let count = columns.saturating_mul(rows);
    if count > MAX_TILE_COUNT || columns > MAX_TILE_COUNT || rows > MAX_TILE_COUNT {
        return Err(PatternError::TooManyTiles {
            count,
            max: MAX_TILE_COUNT,
        });
    }

    // Both counts are bounded by MAX_TILE_COUNT here.
    let (columns, rows) = (columns as usize, rows as usize);

    let mut coordinates = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        let y = position(row, tile.height, offset.y);
        for column in 0..columns {
            let x = position(column, tile.width, offset.x);
            coordinates.push(Coordinate::new(x, y));
        }
    }

    debug!(columns, rows, tiles = coordinates.len(), "computed tile grid");

    Ok(TileGrid {
        columns,
        rows,
        coordinates,
    })
}

fn check_offset(axis: Axis, offset: f64, tile: f64) -> Result<()> {
    if !offset.is_finite() || offset >= tile {
        return Err(PatternError::InvalidOffset { axis, offset, tile });
    }
    Ok(())
}

/// Number of tiles along one axis.
fn track_count(canvas: f64, tile: f64, offset: f64) -> u64 {
    let count = ((canvas + 2.0 * tile) / (tile - offset)).floor();
    // `as` saturates; a count this large is rejected by the caller.
    count as u64
}

/// Start of the tile with the given index along one axis.
fn position(index: usize, tile: f64, offset: f64) -> f64 {
    let i = index as f64;
    let shift = if index == 0 { 0.0 } else { offset * i };
    i * tile - tile / 2.0 - shift
}
