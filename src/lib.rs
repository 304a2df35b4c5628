//! # SVG Pattern
//!
//! Generates a self-contained SVG that tiles a small source image across a
//! canvas of any size.
//!
//! The source image is embedded once as a base64 data URI and drawn at every
//! grid position through `<use>` references. Tiles hanging past the canvas
//! edge are clipped, and a solid background is painted underneath.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`source`] - Native size lookup for raster and SVG sources
//! - [`pattern`] - Tile grid, data URI encoding and the [`PatternService`]
//! - [`svg`] - Document serialization and minification
//! - [`io`] - Raw byte access to source files
//! - [`config`] - CLI configuration for the `svg-pattern` binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use svg_pattern::{make_pattern, PatternOptions};
//!
//! let options = PatternOptions::new()
//!     .with_pattern_width(200.0)
//!     .with_background_color("#202020");
//!
//! let svg = make_pattern("logo.png", 1920.0, 1080.0, Some(&options))?;
//! std::fs::write("background.svg", svg).unwrap();
//! # Ok::<(), svg_pattern::PatternError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pattern;
pub mod source;
pub mod svg;

// Re-export commonly used types
pub use config::Config;
pub use error::{Axis, IoError, PatternError, Result};
pub use geometry::{Coordinate, Size};
pub use io::{ByteSource, FsByteSource};
pub use pattern::{
    compute_grid, encode_data_uri, make_pattern, resolve_subtype, subtype_for, to_data_uri,
    PatternLayout, PatternOptions, PatternService, TileGrid, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_PATTERN_WIDTH, MAX_TILE_COUNT,
};
pub use source::{resolve_tile_size, svg_dimensions, ImageMetadata, ImageSizeReader};
pub use svg::{format_number, OptimizeOptions, PatternDocument, SvgOptimizer, DEFAULT_PRECISION};
