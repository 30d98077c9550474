//! Token cursor for navigating the token stream.

use paren_ir::{Token, TokenKind};

/// Returned once the cursor runs past the last token, so lookahead never
/// needs a bounds check at the call site.
static END_OF_INPUT: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    line: 0,
    column: 0,
    width: 0,
};

/// Forward-only cursor over a lexed token slice.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&END_OF_INPUT)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}
