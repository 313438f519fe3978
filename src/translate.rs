//! Shape geometry to drawing-command translation
//!
//! One function per shape kind; all follow the pattern "move to an
//! anchor point, then emit a path from the shape's defining attributes".
//! The output is the text body of a drawing-mode event: command letters
//! (`m` move, `l` line, `b` cubic bezier) and integer operands joined
//! with single spaces. Operand order and spacing are contractual; tools
//! downstream byte-compare these paths.

use thiserror::Error;

use crate::numeric::{self, MalformedNumberError};
use crate::svg::{ShapeAttributes, ShapeKind};

/// A shape whose attributes cannot produce a path.
///
/// Any of these aborts the conversion of the current document. Events
/// already appended for earlier shapes remain valid and are kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("{kind} element is missing required attribute `{attribute}`")]
    MissingAttribute {
        kind: ShapeKind,
        attribute: &'static str,
    },
    #[error("`points` list `{points}` does not hold a starting coordinate pair")]
    MalformedPoints { points: String },
    #[error(transparent)]
    Number(#[from] MalformedNumberError),
}

/// Translate one shape into its drawing-mode path text
pub fn path_for(kind: ShapeKind, attrs: &ShapeAttributes) -> Result<String, TranslateError> {
    match kind {
        ShapeKind::Line => line(attrs),
        ShapeKind::Polyline => polyline(attrs),
        ShapeKind::Rect => rect(attrs),
        ShapeKind::Circle => circle(attrs),
        ShapeKind::Ellipse => ellipse(attrs),
    }
}

fn require<'a>(
    kind: ShapeKind,
    attrs: &'a ShapeAttributes,
    attribute: &'static str,
) -> Result<&'a str, TranslateError> {
    attrs
        .get(attribute)
        .map(String::as_str)
        .ok_or(TranslateError::MissingAttribute { kind, attribute })
}

/// Emits `m x1 y1 l x1 l y1 x2 y2`.
///
/// The second `l` carries three operands; the operand layout is part
/// of the output contract and must not be reshaped into a plain
/// two-point segment.
fn line(attrs: &ShapeAttributes) -> Result<String, TranslateError> {
    let kind = ShapeKind::Line;
    let x1 = require(kind, attrs, "x1")?;
    let y1 = require(kind, attrs, "y1")?;
    let x2 = require(kind, attrs, "x2")?;
    let y2 = require(kind, attrs, "y2")?;

    Ok(["m", x1, y1, "l", x1, "l", y1, x2, y2].join(" "))
}

/// Emits a move to the first coordinate pair, then walks the raw token
/// list by index parity: even indices open a new `l` command, odd
/// indices ride along as the trailing operand.
fn polyline(attrs: &ShapeAttributes) -> Result<String, TranslateError> {
    let kind = ShapeKind::Polyline;
    let points = require(kind, attrs, "points")?;

    // Commas and spaces both separate; one doubled separator collapses.
    let normalized = points.replace(' ', ",").replace(",,", ",");
    let tokens: Vec<&str> = normalized.split(',').collect();
    if tokens.len() < 2 {
        return Err(TranslateError::MalformedPoints {
            points: points.to_string(),
        });
    }

    let mut path = vec!["m", tokens[0], tokens[1]];
    for (i, token) in tokens.iter().copied().enumerate() {
        if i % 2 == 0 {
            path.push("l");
        }
        path.push(token);
    }

    Ok(path.join(" "))
}

/// Emits the corners of an axis-aligned rectangle clockwise from the
/// top-left anchor. The path is not closed back to the start; drawing
/// mode closes outlines implicitly.
fn rect(attrs: &ShapeAttributes) -> Result<String, TranslateError> {
    let kind = ShapeKind::Rect;
    let x = require(kind, attrs, "x")?;
    let y = require(kind, attrs, "y")?;
    let width = require(kind, attrs, "width")?;
    let height = require(kind, attrs, "height")?;

    let right = numeric::sum([x, width])?;
    let bottom = numeric::sum([y, height])?;
    let (right, bottom) = (right.as_str(), bottom.as_str());

    Ok([
        "m", x, y,
        "l", x, y,
        "l", right, y,
        "l", right, bottom,
        "l", x, bottom,
    ]
    .join(" "))
}

/// Emits four cubic segments around the center.
///
/// Control points sit on the segment anchors rather than at the usual
/// quarter-circle offset, so the outline is flatter than a true
/// circle. Part of the output contract.
fn circle(attrs: &ShapeAttributes) -> Result<String, TranslateError> {
    let kind = ShapeKind::Circle;
    let x = require(kind, attrs, "cx")?;
    let y = require(kind, attrs, "cy")?;
    let r = require(kind, attrs, "r")?;

    quarter_arcs(x, y, r, r)
}

/// Same four-segment pattern as `circle` with independent x/y radii
fn ellipse(attrs: &ShapeAttributes) -> Result<String, TranslateError> {
    let kind = ShapeKind::Ellipse;
    let x = require(kind, attrs, "cx")?;
    let y = require(kind, attrs, "cy")?;
    let rx = require(kind, attrs, "rx")?;
    let ry = require(kind, attrs, "ry")?;

    quarter_arcs(x, y, rx, ry)
}

fn quarter_arcs(x: &str, y: &str, rx: &str, ry: &str) -> Result<String, TranslateError> {
    let right = numeric::sum([x, rx])?;
    let left = numeric::sub([x, rx])?;
    let middle = numeric::sum([y, ry])?;
    let bottom = numeric::sum([y, ry, ry])?;
    let (right, left, middle, bottom) = (
        right.as_str(),
        left.as_str(),
        middle.as_str(),
        bottom.as_str(),
    );

    Ok([
        "m", x, y,
        "b", x, y, right, y, right, middle,
        "b", right, middle, right, bottom, x, bottom,
        "b", x, bottom, left, bottom, left, middle,
        "b", left, middle, left, y, x, y,
    ]
    .join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> ShapeAttributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_line_operand_layout() {
        let path = path_for(
            ShapeKind::Line,
            &attrs(&[("x1", "1"), ("y1", "2"), ("x2", "3"), ("y2", "4")]),
        )
        .unwrap();
        assert_eq!(path, "m 1 2 l 1 l 2 3 4");
    }

    #[test]
    fn test_rect_corners_clockwise() {
        let path = path_for(
            ShapeKind::Rect,
            &attrs(&[("x", "0"), ("y", "0"), ("width", "10"), ("height", "5")]),
        )
        .unwrap();
        assert_eq!(path, "m 0 0 l 0 0 l 10 0 l 10 5 l 0 5");
    }

    #[test]
    fn test_rect_with_offset_anchor() {
        let path = path_for(
            ShapeKind::Rect,
            &attrs(&[("x", "3"), ("y", "4"), ("width", "10"), ("height", "5")]),
        )
        .unwrap();
        assert_eq!(path, "m 3 4 l 3 4 l 13 4 l 13 9 l 3 9");
    }

    #[test]
    fn test_circle_four_segments() {
        let path = path_for(
            ShapeKind::Circle,
            &attrs(&[("cx", "0"), ("cy", "0"), ("r", "10")]),
        )
        .unwrap();
        assert_eq!(
            path,
            "m 0 0 \
             b 0 0 10 0 10 10 \
             b 10 10 10 20 0 20 \
             b 0 20 -10 20 -10 10 \
             b -10 10 -10 0 0 0"
        );
    }

    #[test]
    fn test_ellipse_independent_radii() {
        let path = path_for(
            ShapeKind::Ellipse,
            &attrs(&[("cx", "5"), ("cy", "5"), ("rx", "2"), ("ry", "3")]),
        )
        .unwrap();
        assert_eq!(
            path,
            "m 5 5 \
             b 5 5 7 5 7 8 \
             b 7 8 7 11 5 11 \
             b 5 11 3 11 3 8 \
             b 3 8 3 5 5 5"
        );
    }

    #[test]
    fn test_polyline_index_parity_walk() {
        let path = path_for(ShapeKind::Polyline, &attrs(&[("points", "0,0 10,0 10,10")])).unwrap();
        assert_eq!(path, "m 0 0 l 0 0 l 10 0 l 10 10");
    }

    #[test]
    fn test_polyline_comma_only_points() {
        let path = path_for(ShapeKind::Polyline, &attrs(&[("points", "1,2,3,4")])).unwrap();
        assert_eq!(path, "m 1 2 l 1 2 l 3 4");
    }

    #[test]
    fn test_polyline_odd_token_count() {
        // A dangling token still opens a trailing `l` command
        let path = path_for(ShapeKind::Polyline, &attrs(&[("points", "0,0 5")])).unwrap();
        assert_eq!(path, "m 0 0 l 0 0 l 5");
    }

    #[test]
    fn test_polyline_single_token_is_malformed() {
        let err = path_for(ShapeKind::Polyline, &attrs(&[("points", "5")])).unwrap_err();
        assert_eq!(
            err,
            TranslateError::MalformedPoints {
                points: "5".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_attribute() {
        let err = path_for(
            ShapeKind::Rect,
            &attrs(&[("x", "0"), ("y", "0"), ("width", "10")]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TranslateError::MissingAttribute {
                kind: ShapeKind::Rect,
                attribute: "height",
            }
        );
    }

    #[test]
    fn test_fractional_coordinate_is_malformed() {
        let err = path_for(
            ShapeKind::Circle,
            &attrs(&[("cx", "0"), ("cy", "0"), ("r", "2.5")]),
        )
        .unwrap_err();
        assert!(matches!(err, TranslateError::Number(_)));
    }

    #[test]
    fn test_line_does_not_touch_numbers() {
        // Line never does arithmetic, so non-integer operands pass through
        let path = path_for(
            ShapeKind::Line,
            &attrs(&[("x1", "a"), ("y1", "b"), ("x2", "c"), ("y2", "d")]),
        )
        .unwrap();
        assert_eq!(path, "m a b l a l b c d");
    }
}
