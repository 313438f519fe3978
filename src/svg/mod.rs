//! SVG input handling
//!
//! This module reads an SVG document and extracts the top-level shape
//! elements the converter understands, in document order.

pub mod ast;
mod scan;

pub use ast::{Shape, ShapeAttributes, ShapeKind};
pub use scan::{parse, ShapeDocument, SvgError};
