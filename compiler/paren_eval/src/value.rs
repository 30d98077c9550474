//! Runtime values.

use std::fmt;
use std::rc::Rc;

use paren_ir::{Expr, Literal, SourceFile};

use crate::environment::{LocalScope, Scope};
use crate::interpreter::CallContext;
use crate::EvalResult;

/// Native function signature.
///
/// Builtins receive their arguments unevaluated and force them through the
/// [`CallContext`] as needed.
pub type BuiltinFn = fn(&mut CallContext<'_, '_>) -> EvalResult;

/// A value produced by evaluation.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Str(Rc<str>),
    Bool(bool),
    Nil,
    List(Rc<[Value]>),
    Function(FunctionValue),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    pub fn list(values: Vec<Value>) -> Self {
        Value::List(values.into())
    }

    pub fn from_literal(literal: &Literal) -> Self {
        match literal {
            Literal::Int(n) => Value::Int(*n),
            Literal::Str(s) => Value::string(s),
            Literal::Nil => Value::Nil,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
            Value::List(_) => "list",
            Value::Function(_) => "function",
        }
    }

    /// Only `false` and `nil` are falsey.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    #[inline]
    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }
}

/// Structural equality. Functions compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

/// Program output form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Value::Function(func) => write!(f, "fn {}", func.name()),
        }
    }
}

/// A callable value.
#[derive(Clone)]
pub enum FunctionValue {
    Builtin(Builtin),
    Closure(Rc<Closure>),
}

/// A native function.
#[derive(Clone)]
pub struct Builtin {
    pub name: Rc<str>,
    pub func: BuiltinFn,
    /// Module a module-local builtin such as `export` was bound for.
    pub owner: Option<Rc<str>>,
}

/// A user-defined function.
pub struct Closure {
    pub name: Rc<str>,
    pub params: Vec<String>,
    pub body: Expr,
    /// Defining scope, shared rather than copied.
    pub scope: LocalScope<Scope>,
    /// File the body was written in.
    pub source: Rc<SourceFile>,
}

impl FunctionValue {
    pub fn builtin(name: &str, func: BuiltinFn) -> Self {
        FunctionValue::Builtin(Builtin {
            name: Rc::from(name),
            func,
            owner: None,
        })
    }

    /// A builtin bound for one module. It keeps that module wherever the
    /// value is later called from.
    pub fn owned_builtin(name: &str, owner: &str, func: BuiltinFn) -> Self {
        FunctionValue::Builtin(Builtin {
            name: Rc::from(name),
            func,
            owner: Some(Rc::from(owner)),
        })
    }

    pub fn closure(closure: Closure) -> Self {
        FunctionValue::Closure(Rc::new(closure))
    }

    pub fn name(&self) -> &str {
        match self {
            FunctionValue::Builtin(b) => &b.name,
            FunctionValue::Closure(c) => &c.name,
        }
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FunctionValue::Builtin(a), FunctionValue::Builtin(b)) => {
                a.name == b.name && a.owner == b.owner
            }
            (FunctionValue::Closure(a), FunctionValue::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// The captured scope usually holds the closure itself, so it is left out.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionValue::Builtin(b) => write!(f, "<builtin {}>", b.name),
            FunctionValue::Closure(c) => {
                write!(f, "<fn {} ({}) {}>", c.name, c.params.join(" "), c.body)
            }
        }
    }
}

#[cfg(test)]
mod tests;
