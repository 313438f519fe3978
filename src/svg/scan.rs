//! Top-level element walk over an SVG document

use thiserror::Error;
use tracing::debug;

use super::ast::{Shape, ShapeKind};

/// Errors reading the input document
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("failed to parse SVG document: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// The shapes recognized in one input document, in document order
#[derive(Debug, Default)]
pub struct ShapeDocument {
    pub shapes: Vec<Shape>,
    /// Tag names of top-level elements that were not dispatched,
    /// including `path`. Skipping is not an error.
    pub skipped: Vec<String>,
}

/// Extract the supported shape elements from SVG source text.
///
/// Only direct element children of the document root are considered.
/// Tag names are matched after stripping any XML namespace, so both
/// `<rect>` and `<svg:rect>` forms dispatch. Anything else, `<path>`
/// included, lands in the skipped list.
pub fn parse(source: &str) -> Result<ShapeDocument, SvgError> {
    let xml = roxmltree::Document::parse(source)?;
    let mut doc = ShapeDocument::default();

    for child in xml.root_element().children().filter(|n| n.is_element()) {
        let tag = child.tag_name().name();
        match ShapeKind::from_tag(tag) {
            Some(kind) => {
                let attrs = child
                    .attributes()
                    .map(|a| (a.name().to_string(), a.value().to_string()))
                    .collect();
                doc.shapes.push(Shape { kind, attrs });
            }
            None => {
                debug!(tag, "skipping unsupported element");
                doc.skipped.push(tag.to_string());
            }
        }
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shapes_in_document_order() {
        let doc = parse(
            r#"<svg>
                <rect x="0" y="0" width="10" height="5"/>
                <circle cx="1" cy="2" r="3"/>
                <line x1="1" y1="2" x2="3" y2="4"/>
            </svg>"#,
        )
        .expect("Should parse");

        let kinds: Vec<_> = doc.shapes.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Rect, ShapeKind::Circle, ShapeKind::Line]
        );
        assert!(doc.skipped.is_empty());
    }

    #[test]
    fn test_parse_reads_raw_attributes() {
        let doc = parse(r#"<svg><rect x="0" y="7" width="10" height="5"/></svg>"#)
            .expect("Should parse");
        let rect = &doc.shapes[0];
        assert_eq!(rect.attrs.get("y").map(String::as_str), Some("7"));
        assert_eq!(rect.attrs.get("style"), None);
    }

    #[test]
    fn test_parse_strips_namespace() {
        let doc = parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg">
                <rect x="0" y="0" width="1" height="1"/>
            </svg>"#,
        )
        .expect("Should parse");
        assert_eq!(doc.shapes.len(), 1);
        assert_eq!(doc.shapes[0].kind, ShapeKind::Rect);
    }

    #[test]
    fn test_parse_skips_unsupported_elements() {
        let doc = parse(
            r#"<svg>
                <path d="M 0 0 L 10 10"/>
                <g><rect x="0" y="0" width="1" height="1"/></g>
                <ellipse cx="0" cy="0" rx="1" ry="2"/>
            </svg>"#,
        )
        .expect("Should parse");

        // The rect inside <g> is not top-level and is not discovered
        assert_eq!(doc.shapes.len(), 1);
        assert_eq!(doc.shapes[0].kind, ShapeKind::Ellipse);
        assert_eq!(doc.skipped, vec!["path".to_string(), "g".to_string()]);
    }

    #[test]
    fn test_parse_rejects_malformed_xml() {
        assert!(parse("<svg><rect</svg>").is_err());
    }
}
