use std::path::Path;

use bytes::Bytes;

use crate::error::IoError;

/// Trait for reading the raw bytes of a source file.
///
/// The pattern pipeline only needs whole-file reads. Implementations must be
/// thread-safe so that a single service can be shared across threads.
pub trait ByteSource: Send + Sync {
    /// Read the complete contents of `path`.
    ///
    /// The bytes are returned exactly as stored; no text decoding happens.
    fn read_bytes(&self, path: &Path) -> Result<Bytes, IoError>;
}

/// `ByteSource` backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsByteSource;

impl FsByteSource {
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for FsByteSource {
    fn read_bytes(&self, path: &Path) -> Result<Bytes, IoError> {
        std::fs::read(path)
            .map(Bytes::from)
            .map_err(|e| IoError::from_io(&path.display().to_string(), &e))
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn read_bytes(&self, path: &Path) -> Result<Bytes, IoError> {
        (**self).read_bytes(path)
    }
}
