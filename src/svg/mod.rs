//! SVG output.
//!
//! - [`PatternDocument`]: serializes the tiled document
//! - [`SvgOptimizer`]: minifies the serialized document

mod document;
mod optimize;

pub use document::{PatternDocument, SVG_NAMESPACE, XLINK_NAMESPACE};
pub use optimize::{OptimizeOptions, SvgOptimizer, DEFAULT_PRECISION};

/// Format a number for an SVG attribute.
///
/// Uses the shortest representation that round-trips (`200`, `-100`,
/// `33.333333333333336`) and never writes negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
