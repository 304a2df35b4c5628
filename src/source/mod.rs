//! Source image inspection.
//!
//! Answers one question about the tile image: how large is it? The answer
//! comes from an [`ImageMetadata`] implementation and is turned into the
//! on-canvas tile size by [`resolve_tile_size`].
//!
//! ```text
//! bytes ──► ImageMetadata::read_size ──► native Size ──► resolve_tile_size ──► tile Size
//!               │
//!               ├── raster header (image crate)
//!               └── SVG root element (quick-xml)
//! ```

mod metadata;
mod size;
mod svg_size;

pub use metadata::{ImageMetadata, ImageSizeReader};
pub use size::resolve_tile_size;
pub use svg_size::svg_dimensions;
