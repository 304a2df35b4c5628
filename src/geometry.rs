//! Plain value types shared by the pattern pipeline.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image, a tile or the canvas.
///
/// Fractional values are allowed; SVG accepts non-integer lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }

    /// Height divided by width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }
}

/// Top-left placement of one tile, relative to the canvas origin.
///
/// Also used for the per-axis pattern offset. Components may be negative.
/// A missing component deserializes as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
