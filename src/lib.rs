//! svg2ass - Convert SVG shape elements into ASS subtitle drawing events
//!
//! This library reads an SVG document, translates each supported
//! top-level shape (line, polyline, rect, circle, ellipse) into the
//! drawing-command syntax of the Advanced SubStation Alpha subtitle
//! format, and appends one `Dialogue:` event per shape to a destination
//! script. The script preamble is written only when the destination is
//! empty, so repeated conversions into one file accumulate events.
//!
//! # Example
//!
//! ```rust
//! use svg2ass::{convert, ass::{EventWriter, ScriptProfile}};
//!
//! let svg = r#"<svg><rect x="0" y="0" width="10" height="5"/></svg>"#;
//! let mut writer = EventWriter::new(Vec::new(), ScriptProfile::default());
//! let stats = convert(svg, &mut writer).unwrap();
//! assert_eq!(stats.emitted, 1);
//!
//! let script = String::from_utf8(writer.finish().unwrap()).unwrap();
//! assert!(script.contains("m 0 0 l 0 0 l 10 0 l 10 5 l 0 5"));
//! ```

pub mod ass;
pub mod numeric;
pub mod style;
pub mod svg;
pub mod translate;

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, warn};

pub use ass::{EventWriter, OpenMode, ScriptProfile};
pub use style::ResolvedStyle;
pub use svg::{Shape, ShapeDocument, ShapeKind};

use translate::TranslateError;

/// Errors that abort a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input document could not be read as XML
    #[error(transparent)]
    Svg(#[from] svg::SvgError),

    /// A shape's attributes could not produce a path
    #[error("cannot translate shape: {0}")]
    Translate(#[from] TranslateError),

    /// Writing to the destination failed
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

/// Counters describing one conversion run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    /// Events appended to the destination
    pub emitted: u32,
    /// Shapes dropped because their style attribute was malformed
    pub skipped_styles: u32,
    /// Top-level elements with unsupported tags, `path` included
    pub skipped_elements: u32,
}

/// Convert SVG source text, appending events through `writer`.
///
/// The writer decides whether a preamble is needed; this function only
/// asks for it once, before any event.
pub fn convert<W: Write>(
    source: &str,
    writer: &mut EventWriter<W>,
) -> Result<ConvertStats, ConvertError> {
    let doc = svg::parse(source)?;
    convert_document(&doc, writer)
}

/// Convert an already-scanned document, appending events through
/// `writer` in document order.
///
/// A malformed style fails only its shape: the shape is skipped with a
/// warning and the run continues. Translation and I/O errors abort the
/// run; events appended before the failure remain in the destination.
pub fn convert_document<W: Write>(
    doc: &ShapeDocument,
    writer: &mut EventWriter<W>,
) -> Result<ConvertStats, ConvertError> {
    let mut stats = ConvertStats {
        skipped_elements: doc.skipped.len() as u32,
        ..ConvertStats::default()
    };

    writer.ensure_preamble()?;

    for shape in &doc.shapes {
        let style = match style::resolve(&shape.attrs) {
            Ok(style) => style,
            Err(err) => {
                warn!(kind = %shape.kind, %err, "skipping shape with malformed style");
                stats.skipped_styles += 1;
                continue;
            }
        };

        let path_text = translate::path_for(shape.kind, &shape.attrs)?;
        let layer = writer.write_event(&path_text, shape.kind, &style)?;
        debug!(layer, kind = %shape.kind, path = %path_text, "emitted event");
        stats.emitted += 1;
    }

    Ok(stats)
}
