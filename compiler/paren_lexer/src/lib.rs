//! Lexer for paren using logos.
//!
//! Produces a flat `Vec<Token>` terminated by an `Eof` token. Lines and columns
//! are tracked while scanning so every token and every error can be located
//! in the source.
//!
//! Number literals are plain digit runs. `2.1` lexes `2` and then fails on
//! the `.`: there is no float syntax, and the stray dot is reported rather
//! than silently dropped.

mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use logos::Logos;
use paren_ir::{Token, TokenKind};

/// Raw token from logos, before literal conversion.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")] // Skip horizontal whitespace
enum RawToken {
    #[token("\n")]
    Newline,

    #[token("(")]
    StartList,
    #[token(")")]
    EndList,

    #[token("nil")]
    Nil,

    // `+` is the only operator-like symbol that may start an identifier.
    #[token("+")]
    Plus,

    #[regex(r"[0-9]+")]
    Int,

    // String literal (no newlines, no escapes)
    #[regex(r#""[^"\n]*""#)]
    Str,

    // Opening quote that never closes on this line
    #[regex(r#""[^"\n]*"#)]
    UnterminatedStr,

    // Symbol: letter or underscore, then anything but parens, quotes and whitespace
    #[regex(r#"[a-zA-Z_][^()"' \t\n\r\x0B\x0C]*"#)]
    Symbol,
}

/// Tracks the line/column position of the scan.
///
/// Columns advance incrementally from the last located offset, so each
/// source character is counted once no matter how long the line is.
struct Position {
    line: u32,
    /// Byte offset of the last located character on the current line.
    offset: usize,
    /// 1-based column of `offset`.
    column: u32,
}

impl Position {
    fn new() -> Self {
        Position {
            line: 1,
            offset: 0,
            column: 1,
        }
    }

    /// Column of `offset`, which must not precede the last located offset.
    fn column_of(&mut self, source: &str, offset: usize) -> u32 {
        let skipped = source.get(self.offset..offset).unwrap_or_default();
        self.column = self.column.saturating_add(char_width(skipped));
        self.offset = offset;
        self.column
    }

    fn next_line(&mut self, line_start: usize) {
        self.line = self.line.saturating_add(1);
        self.offset = line_start;
        self.column = 1;
    }
}

fn char_width(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

/// Lex source code into tokens.
///
/// Fails on the first lexical error; no tokens are returned in that case.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);
    let mut pos = Position::new();

    while let Some(token_result) = logos.next() {
        let span = logos.span();
        let slice = logos.slice();
        let column = pos.column_of(source, span.start);
        let width = char_width(slice);

        let raw = token_result.map_err(|()| {
            let found = slice.chars().next().unwrap_or('\0');
            LexError::new(LexErrorKind::UnknownCharacter { found }, pos.line, column, 1)
        })?;

        let Some(kind) =
            convert_token(raw, slice).map_err(|kind| LexError::new(kind, pos.line, column, width))?
        else {
            // Newline: the only trivia that reaches here.
            pos.next_line(span.end);
            continue;
        };

        let lexeme = match &kind {
            TokenKind::Str(content) => content.clone(),
            _ => slice.to_string(),
        };
        tokens.push(Token::new(kind, lexeme, pos.line, column, width));
    }

    let eof_column = pos.column_of(source, source.len());
    tokens.push(Token::new(TokenKind::Eof, "", pos.line, eof_column, 0));

    tracing::trace!(tokens = tokens.len(), lines = pos.line, "lexed source");
    Ok(tokens)
}

/// Convert a raw token to a `TokenKind`, parsing literal payloads.
///
/// Returns `Ok(None)` for trivia.
fn convert_token(raw: RawToken, slice: &str) -> Result<Option<TokenKind>, LexErrorKind> {
    let kind = match raw {
        RawToken::Newline => return Ok(None),
        RawToken::StartList => TokenKind::StartList,
        RawToken::EndList => TokenKind::EndList,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Plus | RawToken::Symbol => TokenKind::Symbol,
        RawToken::Int => {
            let value = slice
                .parse::<i64>()
                .map_err(|_| LexErrorKind::IntegerOverflow {
                    digits: slice.to_string(),
                })?;
            TokenKind::Int(value)
        }
        RawToken::Str => {
            let content = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or_default();
            TokenKind::Str(content.to_string())
        }
        RawToken::UnterminatedStr => return Err(LexErrorKind::UnterminatedString),
    };
    Ok(Some(kind))
}
