//! Standard library.
//!
//! Every builtin is a plain [`BuiltinFn`] that receives its arguments
//! unevaluated through a [`CallContext`]. All of them are installed in the
//! global scope by [`RuntimeBuilder::build`](crate::RuntimeBuilder::build),
//! except `export`, which only exists inside module bodies.

mod arith;
mod bindings;
mod control;
mod io;
mod modules;

use crate::errors::{wrong_arg_type, EvalError};
use crate::interpreter::CallContext;
use crate::runtime::Runtime;
use crate::value::BuiltinFn;

/// Builtins bound in every global scope.
const STANDARD_LIBRARY: &[(&str, BuiltinFn)] = &[
    ("print", io::print),
    ("+", arith::plus),
    ("var", bindings::var),
    ("get", bindings::get),
    ("fun", bindings::fun),
    ("module", modules::module),
    ("import", modules::import),
    ("panic", control::panic),
    ("if", control::if_),
    ("eq", control::eq),
];

pub(crate) fn register_all(runtime: &mut Runtime) -> Result<(), EvalError> {
    for &(name, func) in STANDARD_LIBRARY {
        runtime.register_builtin(name, func)?;
    }
    Ok(())
}

/// Whether `name` would lex back as a single symbol token.
pub(crate) fn is_valid_symbol(name: &str) -> bool {
    if name == "+" {
        return true;
    }
    if name == "nil" {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| {
            !matches!(
                c,
                '(' | ')' | '"' | '\'' | ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'
            )
        })
}

/// Invalid-argument error pointing at argument `index` when it exists.
fn arg_error(ctx: &CallContext<'_, '_>, index: usize, message: &str) -> EvalError {
    let err = wrong_arg_type(message);
    match ctx.arg(index) {
        Some(expr) => ctx.point_at(expr, err),
        None => err,
    }
}
