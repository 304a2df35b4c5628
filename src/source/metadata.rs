use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use crate::error::{PatternError, Result};
use crate::geometry::Size;

use super::svg_size::svg_dimensions;

/// Trait for looking up the native pixel size of a source image.
///
/// Implementations work on content that has already been read, so the size
/// and the embedded bytes always come from the same read. `path` is only
/// used to label errors.
///
/// Implementations report whatever the content declares; validation of the
/// returned size happens in [`resolve_tile_size`](super::resolve_tile_size).
pub trait ImageMetadata: Send + Sync {
    fn read_size(&self, path: &Path, content: &[u8]) -> Result<Size>;
}

impl<T: ImageMetadata + ?Sized> ImageMetadata for &T {
    fn read_size(&self, path: &Path, content: &[u8]) -> Result<Size> {
        (**self).read_size(path, content)
    }
}

/// Default `ImageMetadata` implementation.
///
/// Raster formats (PNG, JPEG, GIF, WebP, BMP) are recognized from their magic
/// bytes and only the header is decoded. Anything else is treated as SVG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSizeReader;

impl ImageSizeReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the size of an in-memory image.
    pub fn size_of(&self, content: &[u8]) -> std::result::Result<Size, String> {
        let reader = ImageReader::new(Cursor::new(content))
            .with_guessed_format()
            .map_err(|e| e.to_string())?;

        if reader.format().is_some() {
            let (width, height) = reader.into_dimensions().map_err(|e| e.to_string())?;
            return Ok(Size::new(f64::from(width), f64::from(height)));
        }

        svg_dimensions(content)
    }
}

impl ImageMetadata for ImageSizeReader {
    fn read_size(&self, path: &Path, content: &[u8]) -> Result<Size> {
        self.size_of(content)
            .map_err(|reason| PatternError::image_read(&path.display().to_string(), reason))
    }
}
