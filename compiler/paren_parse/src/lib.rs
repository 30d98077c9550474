//! Parser for paren.
//!
//! Parsing runs in two passes over the token slice:
//!
//! 1. [`check_balance`] verifies that every `(` has a matching `)`. Nothing is
//!    built if it fails, and the error points at the offending parenthesis.
//! 2. Recursive descent builds the tree. With nesting already known to be
//!    sound, the only failures left are tokens in the wrong position.
//!
//! The result is a root [`ListExpr`] holding every top-level form. Its open
//! token is synthetic (line 0), since it does not exist in the source.

mod cursor;
mod error;

pub use error::ParseError;

use cursor::Cursor;
use paren_ir::{Expr, ListExpr, Literal, LiteralExpr, SymbolExpr, Token, TokenKind};
use paren_stack::ensure_sufficient_stack;

/// Parse a lexed token stream into the program root.
pub fn parse(tokens: &[Token]) -> Result<ListExpr, ParseError> {
    check_balance(tokens)?;
    let root = Parser::new(tokens).parse_program()?;
    tracing::trace!(forms = root.len(), "parsed program");
    Ok(root)
}

/// Check that parentheses are balanced and correctly nested.
pub fn check_balance(tokens: &[Token]) -> Result<(), ParseError> {
    let mut open: Vec<&Token> = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::StartList => open.push(token),
            TokenKind::EndList => {
                if open.pop().is_none() {
                    return Err(ParseError::UnmatchedParentheses {
                        token: token.clone(),
                    });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(unclosed) => Err(ParseError::UnmatchedParentheses {
            token: unclosed.clone(),
        }),
        None => Ok(()),
    }
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    fn parse_program(&mut self) -> Result<ListExpr, ParseError> {
        let mut forms = Vec::new();
        while !self.cursor.is_at_end() {
            if !matches!(self.cursor.current_kind(), TokenKind::StartList) {
                return Err(ParseError::ExpectedToken {
                    expected: TokenKind::StartList,
                    token: self.cursor.current().clone(),
                });
            }
            forms.push(Expr::List(self.parse_form()?));
        }
        Ok(ListExpr::new(
            Token::synthetic(TokenKind::StartList, "("),
            forms,
        ))
    }

    /// `( arg* )`
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested source cannot overflow
    /// the host stack.
    fn parse_form(&mut self) -> Result<ListExpr, ParseError> {
        ensure_sufficient_stack(|| self.parse_form_inner())
    }

    fn parse_form_inner(&mut self) -> Result<ListExpr, ParseError> {
        let open = self.cursor.advance().clone();
        let mut elements = Vec::new();
        loop {
            if matches!(self.cursor.current_kind(), TokenKind::EndList) {
                self.cursor.advance();
                return Ok(ListExpr::new(open, elements));
            }
            elements.push(self.parse_arg()?);
        }
    }

    fn parse_arg(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let literal = match &token.kind {
            TokenKind::StartList => return self.parse_form().map(Expr::List),
            TokenKind::Symbol => {
                self.cursor.advance();
                return Ok(Expr::Symbol(SymbolExpr {
                    token: token.clone(),
                }));
            }
            TokenKind::Int(n) => Literal::Int(*n),
            TokenKind::Str(s) => Literal::Str(s.clone()),
            TokenKind::Nil => Literal::Nil,
            TokenKind::EndList | TokenKind::Eof => {
                return Err(ParseError::UnexpectedToken {
                    token: token.clone(),
                })
            }
        };
        self.cursor.advance();
        Ok(Expr::Literal(LiteralExpr {
            token: token.clone(),
            value: literal,
        }))
    }
}
