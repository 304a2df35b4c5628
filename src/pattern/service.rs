//! Pattern service for orchestrating document generation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        PatternService                            │
//! │  1. Read source bytes      4. Resolve MIME subtype              │
//! │  2. Resolve tile size      5. Encode tile as data URI           │
//! │  3. Compute tile grid      6. Serialize and optimize            │
//! └─────────────────────────────────────────────────────────────────┘
//!        │                              │                   │
//!        ▼                              ▼                   ▼
//!  ┌───────────────┐           ┌──────────────┐     ┌──────────────┐
//!  │  ByteSource   │           │ImageMetadata │     │ SvgOptimizer │
//!  └───────────────┘           └──────────────┘     └──────────────┘
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::geometry::Size;
use crate::io::{ByteSource, FsByteSource};
use crate::source::{resolve_tile_size, ImageMetadata, ImageSizeReader};
use crate::svg::{PatternDocument, SvgOptimizer};

use super::encoder::encode_data_uri;
use super::grid::{compute_grid, TileGrid};
use super::mime::resolve_subtype;
use super::options::PatternOptions;

/// Layout of a pattern before the tile image is embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternLayout {
    /// Canvas size requested by the caller.
    pub canvas: Size,

    /// Size every tile is drawn at.
    pub tile: Size,

    /// Tile placements.
    pub grid: TileGrid,

    /// MIME subtype of the embedded image (`png`, `svg+xml`, ...).
    pub subtype: String,
}

/// Service that turns a source image into a tiled SVG pattern.
///
/// The service holds no per-call state; one instance can serve any number of
/// calls, from several threads if its collaborators allow it.
///
/// # Type Parameters
///
/// * `B` - Where the raw bytes of the tile image come from
/// * `M` - How the native size of the tile image is determined
///
/// # Example
///
/// ```no_run
/// use svg_pattern::{PatternOptions, PatternService};
///
/// let service = PatternService::new();
/// let options = PatternOptions::new().with_pattern_width(200.0);
/// let svg = service.make_pattern("logo.png", 1000.0, 500.0, &options)?;
/// println!("{svg}");
/// # Ok::<(), svg_pattern::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternService<B = FsByteSource, M = ImageSizeReader> {
    bytes: B,
    metadata: M,
    optimizer: SvgOptimizer,
}

impl PatternService {
    /// Create a service reading from the local file system.
    pub fn new() -> Self {
        Self::with_sources(FsByteSource::new(), ImageSizeReader::new())
    }
}

impl Default for PatternService {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ByteSource, M: ImageMetadata> PatternService<B, M> {
    /// Create a service with custom collaborators.
    pub fn with_sources(bytes: B, metadata: M) -> Self {
        Self {
            bytes,
            metadata,
            optimizer: SvgOptimizer::new(),
        }
    }

    /// Replace the optimizer used by [`make_pattern`](Self::make_pattern).
    pub fn with_optimizer(mut self, optimizer: SvgOptimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn optimizer(&self) -> &SvgOptimizer {
        &self.optimizer
    }

    /// Compute tile size, grid and MIME subtype for a pattern.
    pub fn layout(
        &self,
        path: impl AsRef<Path>,
        width: f64,
        height: f64,
        options: &PatternOptions,
    ) -> Result<PatternLayout> {
        let path = path.as_ref();
        let content = self.bytes.read_bytes(path)?;
        self.layout_from(path, &content, width, height, options)
    }

    /// Produce the pattern document without minification.
    ///
    /// The source is read once; its size and the embedded bytes come from
    /// the same read.
    pub fn render_document(
        &self,
        path: impl AsRef<Path>,
        width: f64,
        height: f64,
        options: &PatternOptions,
    ) -> Result<String> {
        let path = path.as_ref();
        let content = self.bytes.read_bytes(path)?;
        let layout = self.layout_from(path, &content, width, height, options)?;
        let tile_href = encode_data_uri(&content, &layout.subtype);

        PatternDocument {
            canvas: layout.canvas,
            background_color: &options.background_color,
            coordinates: &layout.grid.coordinates,
            tile_href: &tile_href,
            tile_size: layout.tile,
        }
        .render()
    }

    fn layout_from(
        &self,
        path: &Path,
        content: &[u8],
        width: f64,
        height: f64,
        options: &PatternOptions,
    ) -> Result<PatternLayout> {
        let canvas = Size::new(width, height);

        let tile = resolve_tile_size(&self.metadata, path, content, options.pattern_width)?;
        let grid = compute_grid(tile, canvas, options.pattern_offset)?;
        let subtype = resolve_subtype(path, options.pattern_file_type.as_deref())?;

        Ok(PatternLayout {
            canvas,
            tile,
            grid,
            subtype,
        })
    }

    /// Produce the minified pattern document.
    ///
    /// # Arguments
    ///
    /// * `path` - Tile image (raster or SVG)
    /// * `width` - Canvas width in pixels
    /// * `height` - Canvas height in pixels
    /// * `options` - Layout options
    ///
    /// # Errors
    ///
    /// Any failure aborts the call; no partial document is returned. See
    /// [`PatternError`](crate::PatternError) for the possible causes.
    pub fn make_pattern(
        &self,
        path: impl AsRef<Path>,
        width: f64,
        height: f64,
        options: &PatternOptions,
    ) -> Result<String> {
        let path = path.as_ref();
        let raw = self.render_document(path, width, height, options)?;
        let svg = self.optimizer.optimize(&raw)?;

        debug!(
            path = %path.display(),
            raw_bytes = raw.len(),
            optimized_bytes = svg.len(),
            "generated pattern"
        );

        Ok(svg)
    }
}

/// Generate a minified tiled SVG pattern from the image at `path`.
///
/// `options` defaults to [`PatternOptions::default`] when `None`.
///
/// ```no_run
/// let svg = svg_pattern::make_pattern("tile.svg", 1920.0, 1080.0, None)?;
/// assert!(svg.starts_with("<svg"));
/// # Ok::<(), svg_pattern::PatternError>(())
/// ```
pub fn make_pattern(
    path: impl AsRef<Path>,
    width: f64,
    height: f64,
    options: Option<&PatternOptions>,
) -> Result<String> {
    let options = options.cloned().unwrap_or_default();
    PatternService::new().make_pattern(path, width, height, &options)
}
