//! Parse error types.

use paren_ir::{Token, TokenKind};
use thiserror::Error;

/// A parse failure, carrying the token it was detected at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `)` with nothing open, or a `(` still open at end of input.
    #[error("unmatched parentheses")]
    UnmatchedParentheses { token: Token },

    /// A token that cannot appear as a list element.
    #[error("unexpected token {}", .token.kind)]
    UnexpectedToken { token: Token },

    /// A top-level token that does not open a form.
    #[error("expected {expected} found {}", .token.kind)]
    ExpectedToken { expected: TokenKind, token: Token },
}

impl ParseError {
    /// The token the error points at.
    pub fn token(&self) -> &Token {
        match self {
            ParseError::UnmatchedParentheses { token }
            | ParseError::UnexpectedToken { token }
            | ParseError::ExpectedToken { token, .. } => token,
        }
    }
}
