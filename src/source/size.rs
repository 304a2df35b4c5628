use std::path::Path;

use tracing::debug;

use crate::error::{PatternError, Result};
use crate::geometry::{is_positive, Size};

use super::metadata::ImageMetadata;

/// Resolve the on-canvas size of one tile.
///
/// The tile is exactly `pattern_width` wide; its height keeps the native
/// aspect ratio of the source image, measured from `content` (the raw file).
/// No rounding is applied.
///
/// # Errors
///
/// - [`PatternError::InvalidPatternWidth`] if `pattern_width` is not positive
/// - [`PatternError::ImageRead`] if the metadata lookup fails or reports a
///   zero, negative or non-finite dimension
pub fn resolve_tile_size<M: ImageMetadata + ?Sized>(
    metadata: &M,
    path: &Path,
    content: &[u8],
    pattern_width: f64,
) -> Result<Size> {
    if !is_positive(pattern_width) {
        return Err(PatternError::InvalidPatternWidth(pattern_width));
    }

    let native = metadata.read_size(path, content)?;
    if !native.is_positive() {
        return Err(PatternError::image_read(
            &path.display().to_string(),
            format!("invalid dimensions {}x{}", native.width, native.height),
        ));
    }

    let tile = Size::new(pattern_width, pattern_width * native.aspect_ratio());
    debug!(
        path = %path.display(),
        native_width = native.width,
        native_height = native.height,
        tile_width = tile.width,
        tile_height = tile.height,
        "resolved tile size"
    );

    Ok(tile)
}
