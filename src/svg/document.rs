//! Pattern document serialization.
//!
//! The tile image is embedded once inside `<defs>` and referenced by a
//! `<use>` per grid coordinate. All tiles sit in a group clipped to the
//! background rectangle, so tiles hanging past the canvas edge are cut off.
//!
//! # Example Output
//!
//! ```xml
//! <svg version="1.1" baseProfile="full" width="100%" height="100%"
//!      viewBox="0 0 1000 500" xmlns:xlink="http://www.w3.org/1999/xlink"
//!      xmlns="http://www.w3.org/2000/svg">
//!   <defs>
//!     <rect id="rect" width="100%" height="100%" fill="#fff"/>
//!     <clipPath id="clip">
//!       <use xlink:href="#rect"/>
//!     </clipPath>
//!     <image id="pattern" width="200" height="100" href="data:image/png;base64,..."/>
//!   </defs>
//!   <use xlink:href="#rect"/>
//!   <g clip-path="url(#clip)">
//!     <use xlink:href="#pattern" x="-100" y="-50"/>
//!     ...
//!   </g>
//! </svg>
//! ```

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{PatternError, Result};
use crate::geometry::{Coordinate, Size};

use super::format_number;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

const BACKGROUND_ID: &str = "rect";
const CLIP_ID: &str = "clip";
const TILE_ID: &str = "pattern";

/// Everything needed to serialize one pattern document.
#[derive(Debug, Clone, Copy)]
pub struct PatternDocument<'a> {
    /// Canvas size, used for the `viewBox`.
    pub canvas: Size,

    /// Fill of the background rectangle.
    pub background_color: &'a str,

    /// Top-left corner of every tile.
    pub coordinates: &'a [Coordinate],

    /// URI of the tile image, normally a `data:` URI.
    pub tile_href: &'a str,

    /// Size every tile is drawn at.
    pub tile_size: Size,
}

impl PatternDocument<'_> {
    /// Serialize the document as indented SVG.
    ///
    /// Attribute values are XML-escaped, so caller-provided strings such as
    /// the background color cannot break out of their attribute.
    pub fn render(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        self.write_to(&mut writer)?;

        String::from_utf8(writer.into_inner()).map_err(PatternError::markup)
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let view_box = format!(
            "0 0 {} {}",
            format_number(self.canvas.width),
            format_number(self.canvas.height)
        );

        let mut root = BytesStart::new("svg");
        root.push_attribute(("version", "1.1"));
        root.push_attribute(("baseProfile", "full"));
        root.push_attribute(("width", "100%"));
        root.push_attribute(("height", "100%"));
        root.push_attribute(("viewBox", view_box.as_str()));
        root.push_attribute(("xmlns:xlink", XLINK_NAMESPACE));
        root.push_attribute(("xmlns", SVG_NAMESPACE));
        emit(writer, Event::Start(root))?;

        self.write_defs(writer)?;

        emit(writer, Event::Empty(use_element(BACKGROUND_ID)))?;

        let clip_ref = format!("url(#{CLIP_ID})");
        let mut group = BytesStart::new("g");
        group.push_attribute(("clip-path", clip_ref.as_str()));
        emit(writer, Event::Start(group))?;

        for coordinate in self.coordinates {
            let x = format_number(coordinate.x);
            let y = format_number(coordinate.y);
            let mut tile = use_element(TILE_ID);
            tile.push_attribute(("x", x.as_str()));
            tile.push_attribute(("y", y.as_str()));
            emit(writer, Event::Empty(tile))?;
        }

        emit(writer, Event::End(BytesEnd::new("g")))?;
        emit(writer, Event::End(BytesEnd::new("svg")))?;
        Ok(())
    }

    fn write_defs(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        emit(writer, Event::Start(BytesStart::new("defs")))?;

        let mut background = BytesStart::new("rect");
        background.push_attribute(("id", BACKGROUND_ID));
        background.push_attribute(("width", "100%"));
        background.push_attribute(("height", "100%"));
        background.push_attribute(("fill", self.background_color));
        emit(writer, Event::Empty(background))?;

        let mut clip = BytesStart::new("clipPath");
        clip.push_attribute(("id", CLIP_ID));
        emit(writer, Event::Start(clip))?;
        emit(writer, Event::Empty(use_element(BACKGROUND_ID)))?;
        emit(writer, Event::End(BytesEnd::new("clipPath")))?;

        let width = format_number(self.tile_size.width);
        let height = format_number(self.tile_size.height);
        let mut image = BytesStart::new("image");
        image.push_attribute(("id", TILE_ID));
        image.push_attribute(("width", width.as_str()));
        image.push_attribute(("height", height.as_str()));
        image.push_attribute(("href", self.tile_href));
        emit(writer, Event::Empty(image))?;

        emit(writer, Event::End(BytesEnd::new("defs")))?;
        Ok(())
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(PatternError::markup)
}

/// `<use xlink:href="#{id}"/>`
fn use_element(id: &str) -> BytesStart<'static> {
    let href = format!("#{id}");
    let mut elem = BytesStart::new("use");
    elem.push_attribute(("xlink:href", href.as_str()));
    elem
}
