//! Expression tree.
//!
//! The parser produces exactly three node shapes. Whether a list is a call or
//! a list literal is decided by the evaluator, not here.

use std::fmt;

use crate::Token;

/// Value embedded in a literal expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i64),
    Str(String),
    Nil,
}

/// A parenthesized list of expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListExpr {
    /// The `(` that opened this list.
    pub open: Token,
    pub elements: Vec<Expr>,
}

impl ListExpr {
    pub fn new(open: Token, elements: Vec<Expr>) -> Self {
        ListExpr { open, elements }
    }

    /// First element, if any.
    #[inline]
    pub fn head(&self) -> Option<&Expr> {
        self.elements.first()
    }

    /// Everything after the head.
    #[inline]
    pub fn rest(&self) -> &[Expr] {
        self.elements.get(1..).unwrap_or(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// An integer, string or `nil` literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralExpr {
    pub token: Token,
    pub value: Literal,
}

/// An identifier reference, resolved at evaluation time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolExpr {
    pub token: Token,
}

impl SymbolExpr {
    #[inline]
    pub fn name(&self) -> &str {
        &self.token.lexeme
    }
}

/// An expression node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    List(ListExpr),
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
}

impl Expr {
    /// The token that best identifies this node in diagnostics.
    pub fn token(&self) -> &Token {
        match self {
            Expr::List(list) => &list.open,
            Expr::Literal(lit) => &lit.token,
            Expr::Symbol(sym) => &sym.token,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&ListExpr> {
        match self {
            Expr::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&SymbolExpr> {
        match self {
            Expr::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Node kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::List(_) => "list",
            Expr::Literal(_) => "literal",
            Expr::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "\"{s}\""),
            Literal::Nil => f.write_str("nil"),
        }
    }
}

/// Renders the expression back to source form.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::List(list) => write!(f, "{list}"),
            Expr::Literal(lit) => write!(f, "{}", lit.value),
            Expr::Symbol(sym) => f.write_str(sym.name()),
        }
    }
}

impl fmt::Display for ListExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str(")")
    }
}
