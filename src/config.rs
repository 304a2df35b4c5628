//! Configuration for the `svg-pattern` binary.
//!
//! Pattern options can come from three places, applied in this order:
//!
//! 1. Built-in defaults ([`PatternOptions::default`])
//! 2. A JSON options file (`--options-file`), merged field by field
//! 3. Individual flags or `SVG_PATTERN_` environment variables
//!
//! # Example
//!
//! ```ignore
//! use svg_pattern::config::Config;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//! let options = config.pattern_options()?;
//! ```
//!
//! # Environment Variables
//!
//! - `SVG_PATTERN_WIDTH` - Canvas width in pixels
//! - `SVG_PATTERN_HEIGHT` - Canvas height in pixels
//! - `SVG_PATTERN_TILE_WIDTH` - Tile width in pixels (default: 500)
//! - `SVG_PATTERN_BACKGROUND` - Background color (default: #fff)
//! - `SVG_PATTERN_OPTIONS_FILE` - JSON file with pattern options
//! - `SVG_PATTERN_PRECISION` - Decimal places kept by the optimizer (default: 3)

use std::path::PathBuf;

use clap::Parser;

use crate::pattern::PatternOptions;
use crate::svg::{OptimizeOptions, DEFAULT_PRECISION};

/// Largest accepted optimizer precision.
pub const MAX_PRECISION: u8 = 15;

/// svg-pattern - Tile an image across an SVG canvas.
///
/// Embeds the image once and writes a minified, self-contained SVG to stdout
/// or to the file given with `--output`.
#[derive(Parser, Debug, Clone)]
#[command(name = "svg-pattern")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Source image to tile (PNG, JPEG, GIF, WebP, BMP or SVG).
    pub input: PathBuf,

    // =========================================================================
    // Canvas
    // =========================================================================
    /// Canvas width in pixels.
    #[arg(long, env = "SVG_PATTERN_WIDTH")]
    pub width: f64,

    /// Canvas height in pixels.
    #[arg(long, env = "SVG_PATTERN_HEIGHT")]
    pub height: f64,

    // =========================================================================
    // Pattern Options
    // =========================================================================
    /// Tile width in pixels; the height keeps the image aspect ratio.
    #[arg(long, env = "SVG_PATTERN_TILE_WIDTH")]
    pub pattern_width: Option<f64>,

    /// Horizontal spacing adjustment between tiles (positive overlaps).
    #[arg(long, allow_hyphen_values = true)]
    pub offset_x: Option<f64>,

    /// Vertical spacing adjustment between tiles (positive overlaps).
    #[arg(long, allow_hyphen_values = true)]
    pub offset_y: Option<f64>,

    /// MIME subtype of the embedded image, e.g. `png` or `svg`.
    ///
    /// Derived from the input extension if not specified.
    #[arg(long)]
    pub file_type: Option<String>,

    /// Background color behind the tiles.
    #[arg(long, env = "SVG_PATTERN_BACKGROUND")]
    pub background: Option<String>,

    /// JSON file with pattern options (`patternWidth`, `patternOffset`,
    /// `patternFileType`, `backgroundColor`).
    #[arg(long, env = "SVG_PATTERN_OPTIONS_FILE")]
    pub options_file: Option<PathBuf>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Write the SVG to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Decimal places kept for coordinates by the optimizer.
    #[arg(long, default_value_t = DEFAULT_PRECISION, env = "SVG_PATTERN_PRECISION")]
    pub precision: u8,

    /// Skip minification and write the indented document.
    #[arg(long, default_value_t = false)]
    pub no_optimize: bool,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.as_os_str().is_empty() {
            return Err("An input image is required".to_string());
        }

        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(format!(
                "Canvas size must be positive, got {}x{}",
                self.width, self.height
            ));
        }

        if let Some(width) = self.pattern_width {
            if !is_positive(width) {
                return Err(format!("pattern_width must be positive, got {width}"));
            }
        }

        if self.precision > MAX_PRECISION {
            return Err(format!("precision must be at most {MAX_PRECISION}"));
        }

        Ok(())
    }

    /// Build pattern options from the options file and flags.
    pub fn pattern_options(&self) -> Result<PatternOptions, String> {
        let mut options = match self.options_file {
            Some(ref path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                PatternOptions::from_json(&json)
                    .map_err(|e| format!("Invalid options file {}: {}", path.display(), e))?
            }
            None => PatternOptions::default(),
        };

        if let Some(width) = self.pattern_width {
            options.pattern_width = width;
        }
        if let Some(x) = self.offset_x {
            options.pattern_offset.x = x;
        }
        if let Some(y) = self.offset_y {
            options.pattern_offset.y = y;
        }
        if let Some(ref file_type) = self.file_type {
            options.pattern_file_type = Some(file_type.clone());
        }
        if let Some(ref background) = self.background {
            options.background_color = background.clone();
        }

        Ok(options)
    }

    /// Optimizer settings derived from the configuration.
    pub fn optimize_options(&self) -> OptimizeOptions {
        OptimizeOptions {
            precision: Some(self.precision),
            ..OptimizeOptions::default()
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// =============================================================================
// Tests
// =============================================================================
