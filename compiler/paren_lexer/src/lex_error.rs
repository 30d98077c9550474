//! Lexer error types.
//!
//! Every error carries the position of the offending text so the driver can
//! underline it in the source line.

use thiserror::Error;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A `"` with no closing quote before end of line or end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that cannot start any token.
    #[error("unknown character `{found}`")]
    UnknownCharacter { found: char },
    /// A digit run too large for a 64-bit signed integer.
    #[error("integer literal `{digits}` is too large")]
    IntegerOverflow { digits: String },
}

/// A lexer error with its source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line of the offending text.
    pub line: u32,
    /// 1-based column of the offending text.
    pub column: u32,
    /// Width of the offending text in characters.
    pub width: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, column: u32, width: u32) -> Self {
        LexError {
            kind,
            line,
            column,
            width,
        }
    }
}
