//! Token types produced by the lexer.
//!
//! A token records the text it was lexed from plus the 1-based line and column
//! of its first character, which is all the diagnostics layer needs to draw a
//! caret underline.

use std::fmt;

/// Token kind, with the literal value carried inline for literal tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    StartList,
    /// `)`
    EndList,
    /// An identifier such as `print`, `x1` or `math/inc`.
    Symbol,
    /// A string literal; the payload excludes the delimiting quotes.
    Str(String),
    /// A non-negative integer literal.
    Int(i64),
    /// The `nil` keyword.
    Nil,
    /// End of input. Always the last token.
    Eof,
}

impl TokenKind {
    /// Short name used in "unexpected token" messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::StartList => "StartList",
            TokenKind::EndList => "EndList",
            TokenKind::Symbol => "Symbol",
            TokenKind::Str(_) => "String",
            TokenKind::Int(_) => "Integer",
            TokenKind::Nil => "Nil",
            TokenKind::Eof => "EndOfInput",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A lexed token with its source position.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. For strings this is the content between the quotes.
    pub lexeme: String,
    /// 1-based line number. Synthetic tokens use line 0.
    pub line: u32,
    /// 1-based column of the token's first character.
    pub column: u32,
    /// Number of source characters covered, quotes included.
    pub width: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32, width: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            width,
        }
    }

    /// Create a token that does not come from any source text.
    ///
    /// Used for the root list that wraps a whole program.
    pub fn synthetic(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        let width = u32::try_from(lexeme.chars().count()).unwrap_or(u32::MAX);
        Token {
            kind,
            lexeme,
            line: 0,
            column: 0,
            width,
        }
    }

    /// Whether this token was produced without a source position.
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.line == 0
    }

    /// Column one past the last character of the token.
    #[inline]
    pub fn end_column(&self) -> u32 {
        self.column.saturating_add(self.width)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}
