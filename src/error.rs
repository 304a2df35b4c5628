use std::fmt;

use thiserror::Error;

/// I/O errors that can occur when reading a source file
#[derive(Debug, Clone, Error)]
pub enum IoError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// File exists but cannot be opened
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Any other read failure
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },
}

impl IoError {
    /// Classify a `std::io::Error` raised while reading `path`.
    pub fn from_io(path: &str, err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => IoError::NotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => IoError::PermissionDenied(path.to_string()),
            _ => IoError::Read {
                path: path.to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Canvas axis, used to report which offset component is invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while producing a pattern
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    /// Source image dimensions are unavailable, zero or not finite
    #[error("Cannot get image size for {path}: {reason}")]
    ImageRead { path: String, reason: String },

    /// Source file could not be read
    #[error("Cannot read file: {0}")]
    FileRead(#[from] IoError),

    /// No file extension and no explicit file type
    #[error("Cannot get file extension for {0}")]
    UnknownExtension(String),

    /// File type contains characters that are not valid in a MIME subtype
    #[error("Invalid file type: {0:?}")]
    InvalidFileType(String),

    /// Offset makes the spacing between tiles zero or negative
    #[error("Invalid {axis} offset {offset}: must be finite and smaller than the tile size {tile}")]
    InvalidOffset { axis: Axis, offset: f64, tile: f64 },

    /// Canvas dimensions must be positive and finite
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    /// Tile dimensions must be positive and finite
    #[error("Invalid tile size {width}x{height}")]
    InvalidTile { width: f64, height: f64 },

    /// Pattern width must be positive and finite
    #[error("Invalid pattern width: {0}")]
    InvalidPatternWidth(f64),

    /// Grid would contain more tiles than allowed
    #[error("Too many tiles: {count} exceeds the limit of {max}")]
    TooManyTiles { count: u64, max: u64 },

    /// SVG serialization or minification failed
    #[error("Markup error: {0}")]
    Markup(String),
}

impl PatternError {
    pub(crate) fn image_read(path: &str, reason: impl Into<String>) -> Self {
        PatternError::ImageRead {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn markup(err: impl fmt::Display) -> Self {
        PatternError::Markup(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PatternError>;
