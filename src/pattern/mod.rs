//! Pattern generation.
//!
//! # Components
//!
//! - [`PatternService`]: entry point, runs the full pipeline
//! - [`compute_grid`]: tile placements covering the canvas
//! - [`resolve_subtype`]: MIME subtype of the embedded image
//! - [`to_data_uri`]: base64 data URI of the tile image
//! - [`PatternOptions`]: per-call layout options

mod encoder;
mod grid;
mod mime;
mod options;
mod service;

pub use encoder::{encode_data_uri, to_data_uri};
pub use grid::{compute_grid, TileGrid, MAX_TILE_COUNT};
pub use mime::{resolve_subtype, subtype_for};
pub use options::{PatternOptions, DEFAULT_BACKGROUND_COLOR, DEFAULT_PATTERN_WIDTH};
pub use service::{make_pattern, PatternLayout, PatternService};
