use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

/// Default tile width in pixels.
pub const DEFAULT_PATTERN_WIDTH: f64 = 500.0;

/// Default background fill.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#fff";

/// Options controlling how a pattern is laid out.
///
/// Every field has its own default, and deserialization fills each missing
/// field independently, so a partial JSON object such as
/// `{"patternWidth": 200}` keeps the default offset and background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternOptions {
    /// Width of each tile in pixels. The height follows the source aspect ratio.
    pub pattern_width: f64,

    /// Per-axis spacing adjustment between successive tiles.
    ///
    /// Positive values overlap tiles, negative values add gaps.
    pub pattern_offset: Coordinate,

    /// MIME subtype override for the embedded image (e.g. `"png"`).
    ///
    /// Derived from the file extension when `None`.
    pub pattern_file_type: Option<String>,

    /// CSS color painted behind the tiles.
    pub background_color: String,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            pattern_width: DEFAULT_PATTERN_WIDTH,
            pattern_offset: Coordinate::ORIGIN,
            pattern_file_type: None,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl PatternOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern_width(mut self, width: f64) -> Self {
        self.pattern_width = width;
        self
    }

    pub fn with_pattern_offset(mut self, x: f64, y: f64) -> Self {
        self.pattern_offset = Coordinate::new(x, y);
        self
    }

    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.pattern_file_type = Some(file_type.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Parse options from a (possibly partial) JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
