//! SVG minification.
//!
//! Re-serializes a document through `quick-xml` without indentation while
//! dropping everything that does not affect rendering. The pass is
//! idempotent: optimizing already optimized output returns it unchanged.

use std::borrow::Cow;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};

use crate::error::{PatternError, Result};

/// Attributes holding a single length that can be rounded.
const NUMERIC_ATTRIBUTES: &[&[u8]] = &[b"x", b"y", b"width", b"height"];

/// Attributes holding a paint color.
const COLOR_ATTRIBUTES: &[&[u8]] = &[b"fill", b"stroke", b"stop-color"];

/// Default number of decimals kept for numeric attributes.
pub const DEFAULT_PRECISION: u8 = 3;

/// Options for SVG optimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeOptions {
    /// Decimal places kept in `x`, `y`, `width` and `height`.
    ///
    /// `None` leaves numbers untouched.
    pub precision: Option<u8>,

    /// Drop `<!-- comments -->`.
    pub remove_comments: bool,

    /// Drop the `<?xml ...?>` declaration.
    pub remove_xml_declaration: bool,

    /// Shorten `#rrggbb` paint colors to `#rgb` where possible.
    pub minify_colors: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            precision: Some(DEFAULT_PRECISION),
            remove_comments: true,
            remove_xml_declaration: true,
            minify_colors: true,
        }
    }
}

/// SVG minifier.
#[derive(Debug, Clone, Default)]
pub struct SvgOptimizer {
    options: OptimizeOptions,
}

impl SvgOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: OptimizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptimizeOptions {
        &self.options
    }

    /// Minify `svg`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Markup`] if the input is not well-formed XML.
    pub fn optimize(&self, svg: &str) -> Result<String> {
        let mut reader = Reader::from_str(svg);

        let mut writer = Writer::new(Vec::with_capacity(svg.len()));

        loop {
            let event = reader.read_event().map_err(PatternError::markup)?;
            match event {
                Event::Eof => break,
                Event::Start(ref elem) => {
                    let elem = self.rewrite_element(elem)?;
                    emit(&mut writer, Event::Start(elem))?;
                }
                Event::Empty(ref elem) => {
                    let elem = self.rewrite_element(elem)?;
                    emit(&mut writer, Event::Empty(elem))?;
                }
                Event::Text(ref text) if text.iter().all(u8::is_ascii_whitespace) => {}
                Event::Comment(_) if self.options.remove_comments => {}
                Event::Decl(_) if self.options.remove_xml_declaration => {}
                Event::DocType(_) | Event::PI(_) => {}
                other => emit(&mut writer, other)?,
            }
        }

        String::from_utf8(writer.into_inner()).map_err(PatternError::markup)
    }

    fn rewrite_element(&self, elem: &BytesStart<'_>) -> Result<BytesStart<'static>> {
        let name = std::str::from_utf8(elem.name().as_ref())
            .map_err(PatternError::markup)?
            .to_string();

        let mut out = BytesStart::new(name);
        for attr in elem.attributes() {
            let attr = attr.map_err(PatternError::markup)?;
            let key = attr.key.as_ref();
            let value = self.rewrite_value(key, &attr.value);
            out.push_attribute(Attribute {
                key: QName(key),
                value,
            });
        }
        Ok(out)
    }

    /// Rewrite one raw (still escaped) attribute value.
    fn rewrite_value<'v>(&self, key: &[u8], raw: &'v [u8]) -> Cow<'v, [u8]> {
        let Ok(text) = std::str::from_utf8(raw) else {
            return Cow::Borrowed(raw);
        };

        if let Some(precision) = self.options.precision {
            if NUMERIC_ATTRIBUTES.contains(&key) {
                if let Ok(value) = text.trim().parse::<f64>() {
                    if value.is_finite() {
                        return Cow::Owned(round_number(value, precision).into_bytes());
                    }
                }
            }
        }

        if self.options.minify_colors && COLOR_ATTRIBUTES.contains(&key) {
            if let Some(color) = shorten_hex_color(text) {
                return Cow::Owned(color.into_bytes());
            }
        }

        Cow::Borrowed(raw)
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(PatternError::markup)
}

/// Round to `precision` decimals and drop trailing zeros.
fn round_number(value: f64, precision: u8) -> String {
    let mut text = format!("{:.*}", usize::from(precision), value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Lowercase a hex color and collapse `#aabbcc` to `#abc`.
///
/// Returns `None` for anything that is not a 3- or 6-digit hex color.
fn shorten_hex_color(value: &str) -> Option<String> {
    let digits = value.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digits = digits.to_ascii_lowercase();

    match digits.len() {
        3 => Some(format!("#{digits}")),
        6 => {
            let b = digits.as_bytes();
            if b[0] == b[1] && b[2] == b[3] && b[4] == b[5] {
                Some(format!("#{}{}{}", b[0] as char, b[2] as char, b[4] as char))
            } else {
                Some(format!("#{digits}"))
            }
        }
        _ => None,
    }
}
