//! Paren IR - shared data types for the paren interpreter.
//!
//! This crate contains the data structures every pipeline stage agrees on:
//! - `Token` and `TokenKind` for lexer output
//! - `Expr` and its variants for the expression tree
//! - `SourceFile` for diagnostics that slice lines out of source text
//!
//! Nothing here knows how to lex, parse or evaluate. Keeping these types in a
//! leaf crate lets the lexer, parser and evaluator depend on each other's
//! outputs without depending on each other.

pub mod ast;
mod source;
mod token;

pub use ast::{Expr, ListExpr, Literal, LiteralExpr, SymbolExpr};
pub use source::SourceFile;
pub use token::{Token, TokenKind};
