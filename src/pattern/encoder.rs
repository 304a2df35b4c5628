//! Data URI encoding of the tile image.
//!
//! The source file is embedded byte-for-byte; raster formats are never
//! round-tripped through a text decoding.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

use crate::error::Result;
use crate::io::ByteSource;

/// Read `path` through `source` and encode it as an `image/*` data URI.
///
/// # Errors
///
/// Returns [`PatternError::FileRead`](crate::PatternError::FileRead) if the
/// file cannot be read.
pub fn to_data_uri<B: ByteSource + ?Sized>(
    source: &B,
    path: &Path,
    subtype: &str,
) -> Result<String> {
    let bytes = source.read_bytes(path)?;
    Ok(encode_data_uri(&bytes, subtype))
}

/// Encode raw bytes as `data:image/{subtype};base64,{payload}`.
pub fn encode_data_uri(bytes: &[u8], subtype: &str) -> String {
    let encoded = BASE64_STANDARD.encode(bytes);
    format!("data:image/{subtype};base64,{encoded}")
}
