//! Shape data extracted from an SVG document

use std::collections::HashMap;
use std::fmt;

/// Raw attribute values of one element, keyed by attribute name.
///
/// Values are kept exactly as they appear in the document; nothing is
/// parsed or normalized until a translator asks for a specific attribute.
pub type ShapeAttributes = HashMap<String, String>;

/// The supported shape element categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Polyline,
    Rect,
    Circle,
    Ellipse,
}

impl ShapeKind {
    /// Match a namespace-stripped element tag name
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "line" => Some(ShapeKind::Line),
            "polyline" => Some(ShapeKind::Polyline),
            "rect" => Some(ShapeKind::Rect),
            "circle" => Some(ShapeKind::Circle),
            "ellipse" => Some(ShapeKind::Ellipse),
            _ => None,
        }
    }

    /// The tag name, also used as the actor field of emitted events
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Polyline => "polyline",
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recognized shape element
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    pub attrs: ShapeAttributes,
}
