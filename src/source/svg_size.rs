//! Intrinsic size detection for SVG sources.
//!
//! Raster headers are handled by the `image` crate; SVG files need their root
//! element inspected instead. The rules follow what browsers use for an
//! `<img>` without explicit size:
//!
//! 1. `width` and `height` on the root `<svg>` when both are absolute
//!    lengths (a bare number, or one of the units in [`UNITS`])
//! 2. one absolute length plus the `viewBox` aspect ratio
//! 3. otherwise the width and height of the `viewBox`

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::geometry::Size;

/// CSS pixels per unit for absolute SVG lengths.
const UNITS: &[(&str, f64)] = &[
    ("px", 1.0),
    ("in", 96.0),
    ("cm", 96.0 / 2.54),
    ("mm", 96.0 / 25.4),
    ("m", 9600.0 / 2.54),
    ("pt", 96.0 / 72.0),
    ("pc", 16.0),
    ("em", 16.0),
    ("ex", 8.0),
];

/// Read the intrinsic size of an SVG document.
///
/// Returns a human-readable reason on failure.
pub fn svg_dimensions(content: &[u8]) -> Result<Size, String> {
    let mut reader = Reader::from_reader(content);
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("invalid SVG: {e}"))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if e.local_name().as_ref() != b"svg" {
                    return Err("root element is not <svg>".to_string());
                }
                return root_dimensions(e);
            }
            Event::Eof => return Err("no root element found".to_string()),
            _ => {}
        }
        buf.clear();
    }
}

fn root_dimensions(root: &BytesStart<'_>) -> Result<Size, String> {
    let mut width = None;
    let mut height = None;
    let mut view_box = None;

    for attr in root.attributes() {
        let attr = attr.map_err(|e| format!("invalid attribute: {e}"))?;
        let Ok(value) = std::str::from_utf8(&attr.value) else {
            continue;
        };
        match attr.key.local_name().as_ref() {
            b"width" => width = parse_length(value),
            b"height" => height = parse_length(value),
            b"viewBox" => view_box = parse_view_box(value),
            _ => {}
        }
    }

    match (width, height, view_box) {
        (Some(w), Some(h), _) => Ok(Size::new(w, h)),
        (Some(w), None, Some(vb)) => Ok(Size::new(w, w * vb.aspect_ratio())),
        (None, Some(h), Some(vb)) => Ok(Size::new(h / vb.aspect_ratio(), h)),
        (None, None, Some(vb)) => Ok(vb),
        _ => Err("no width/height or viewBox on root element".to_string()),
    }
}

/// Convert an absolute length to pixels.
///
/// Percentages and unknown units yield `None`.
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = |text: &str| text.trim().parse::<f64>().ok().filter(|v| v.is_finite());

    if let Some(px) = number(value) {
        return Some(px);
    }

    // "mm" and "em" also end in "m"; a failed number parse moves on.
    UNITS.iter().find_map(|(unit, scale)| {
        value
            .strip_suffix(unit)
            .and_then(number)
            .map(|v| v * scale)
    })
}

fn parse_view_box(value: &str) -> Option<Size> {
    let numbers: Vec<f64> = value
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<_, _>>()
        .ok()?;

    match numbers.as_slice() {
        [_, _, width, height] => Some(Size::new(*width, *height)),
        _ => None,
    }
}
