//! Lexer for style attribute text using logos
//!
//! Style attributes arrive in loosely delimited forms: `stroke: ff0000
//! fill: 00ff00`, `stroke:#ff0000;fill:#00ff00`, or anything in between.
//! The lexer normalizes all of them into one token stream; separators
//! (whitespace and semicolons) carry no meaning and are skipped.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n;]+")]
pub enum Token {
    #[token(":")]
    Colon,

    #[token("stroke")]
    Stroke,

    #[token("fill")]
    Fill,

    #[token("none")]
    None,

    /// A 6-hex-digit color, `#` prefix optional. The prefix is dropped
    /// during lexing so downstream code always sees bare hex digits.
    #[regex(r"#?[0-9a-fA-F]{6}", |lex| lex.slice().trim_start_matches('#').to_owned(), priority = 10)]
    Color(String),

    /// Any other property name or keyword value, e.g. `stroke-width`
    /// or `opacity`. The resolver skips these.
    #[regex(r"[A-Za-z][A-Za-z0-9_-]*")]
    Word,

    /// A numeric value, optionally with a unit suffix, e.g. `2`, `2px`,
    /// `0.5`. The resolver skips these.
    #[regex(r"[0-9][0-9A-Za-z.%]*")]
    Measure,
}
