//! Fill and stroke resolution for shape elements
//!
//! A shape's `style` attribute holds zero or more `key: value`
//! declarations. Only `stroke` and `fill` matter here; the last value
//! seen for each wins and everything else is ignored. Channels still
//! unset afterwards, or set to the literal `none`, receive fallback
//! values that drive the color through override tags instead.
//!
//! The target format orders color channels BGR, so every genuine
//! 6-hex-digit color has its first and last digit pairs swapped. The
//! fallback values already carry override fragments and are emitted
//! verbatim.

mod lexer;

use logos::Logos;
use thiserror::Error;

use crate::svg::ShapeAttributes;
use lexer::Token;

/// Fallback fill: white, with the alpha override forcing full
/// transparency of the primary color.
pub const FALLBACK_FILL: &str = r"FFFFFF\a&HFFF";

/// Fallback stroke: black, with the alpha override deferring outline
/// color to the outline override channel.
pub const FALLBACK_STROKE: &str = r"000000&\3a&HFF";

/// A resolved (fill, stroke) pair, ready for event emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub fill: String,
    pub stroke: String,
}

/// A style attribute the scanner could not make sense of.
///
/// This fails the single shape carrying the attribute, never the whole
/// document; per-shape styles are independent of each other.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedStyleError {
    #[error("unrecognized `{fragment}` in style attribute")]
    UnexpectedInput { fragment: String },
    #[error("style declaration `{key}` has no value")]
    MissingValue { key: &'static str },
    #[error("`{value}` is not a supported {key} color")]
    UnsupportedColor { key: &'static str, value: String },
}

/// Resolve the fill and stroke colors for one shape.
///
/// ```
/// use std::collections::HashMap;
/// use svg2ass::style::resolve;
///
/// let mut attrs = HashMap::new();
/// attrs.insert("style".to_string(), "stroke:#ff0000; fill:#00ff00;".to_string());
/// let style = resolve(&attrs).unwrap();
/// assert_eq!(style.stroke, "0000ff");
/// assert_eq!(style.fill, "00ff00");
/// ```
pub fn resolve(attrs: &ShapeAttributes) -> Result<ResolvedStyle, MalformedStyleError> {
    let (fill, stroke) = match attrs.get("style") {
        Some(style) => scan(style)?,
        None => (None, None),
    };

    Ok(ResolvedStyle {
        fill: fill.map_or_else(|| FALLBACK_FILL.to_string(), |hex| swap_channels(&hex)),
        stroke: stroke.map_or_else(|| FALLBACK_STROKE.to_string(), |hex| swap_channels(&hex)),
    })
}

/// Walk the token stream and record the last fill and stroke values.
///
/// Declarations for other properties are skipped wholesale, so styles
/// like `stroke-width: 2` coexist with the ones we care about. An
/// explicit `none` clears the channel back to unset.
fn scan(style: &str) -> Result<(Option<String>, Option<String>), MalformedStyleError> {
    let mut lexer = Token::lexer(style);
    let mut fill = None;
    let mut stroke = None;

    while let Some(token) = lexer.next() {
        match token.map_err(|()| MalformedStyleError::UnexpectedInput {
            fragment: lexer.slice().to_string(),
        })? {
            Token::Fill => fill = declaration_value(&mut lexer, "fill")?,
            Token::Stroke => stroke = declaration_value(&mut lexer, "stroke")?,
            _ => {}
        }
    }

    Ok((fill, stroke))
}

/// Consume `: value` after a recognized key
fn declaration_value(
    lexer: &mut logos::Lexer<'_, Token>,
    key: &'static str,
) -> Result<Option<String>, MalformedStyleError> {
    if !matches!(lexer.next(), Some(Ok(Token::Colon))) {
        return Err(MalformedStyleError::MissingValue { key });
    }
    match lexer.next() {
        Some(Ok(Token::Color(hex))) => Ok(Some(hex)),
        Some(Ok(Token::None)) => Ok(None),
        Some(Ok(_)) => Err(MalformedStyleError::UnsupportedColor {
            key,
            value: lexer.slice().to_string(),
        }),
        Some(Err(())) => Err(MalformedStyleError::UnexpectedInput {
            fragment: lexer.slice().to_string(),
        }),
        None => Err(MalformedStyleError::MissingValue { key }),
    }
}

/// Reinterpret an RGB hex string as BGR by swapping the outer digit pairs
fn swap_channels(hex: &str) -> String {
    debug_assert!(hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()));
    format!("{}{}{}", &hex[4..6], &hex[2..4], &hex[0..2])
}
