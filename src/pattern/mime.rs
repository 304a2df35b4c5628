//! MIME subtype resolution for the embedded tile image.

use std::path::Path;

use crate::error::{PatternError, Result};

/// File types whose MIME subtype differs from the type name itself.
///
/// Anything not listed is used as the subtype unchanged.
const SUBTYPE_OVERRIDES: &[(&str, &str)] = &[("svg", "svg+xml")];

/// Map a file type (an extension or an explicit override) to its subtype.
pub fn subtype_for(file_type: &str) -> &str {
    SUBTYPE_OVERRIDES
        .iter()
        .find(|(name, _)| *name == file_type)
        .map(|(_, subtype)| *subtype)
        .unwrap_or(file_type)
}

/// Determine the `image/*` subtype for `path`.
///
/// An explicit `file_type` wins; otherwise the lowercased file extension is
/// used. Either way the result goes through [`subtype_for`].
///
/// # Errors
///
/// - [`PatternError::UnknownExtension`] if `path` has no extension and no
///   `file_type` was given
/// - [`PatternError::InvalidFileType`] if the type contains characters that
///   are not allowed in a MIME subtype
pub fn resolve_subtype(path: &Path, file_type: Option<&str>) -> Result<String> {
    let file_type = match file_type.filter(|t| !t.is_empty()) {
        Some(explicit) => explicit.to_string(),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| PatternError::UnknownExtension(path.display().to_string()))?,
    };

    if !is_valid_subtype(&file_type) {
        return Err(PatternError::InvalidFileType(file_type));
    }

    Ok(subtype_for(&file_type).to_string())
}

fn is_valid_subtype(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-'))
}
