//! Global definitions and lookups.

use std::rc::Rc;

use paren_diagnostic::ErrorKind;
use paren_ir::Expr;

use super::{arg_error, is_valid_symbol};
use crate::errors::{symbol_not_found, wrong_arg_type};
use crate::interpreter::CallContext;
use crate::value::{Closure, FunctionValue};
use crate::{EvalResult, Value};

/// `(var "name" value)`: bind globally and return the value.
pub(super) fn var(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let key = ctx.reduce(0)?;
    let name = match key.as_str() {
        Some(name) if is_valid_symbol(name) => name,
        _ => return Err(arg_error(ctx, 0, "'var' key was not a valid symbol")),
    };
    if !ctx.has_arg(1) {
        return Err(ctx.error(ErrorKind::Runtime, "'var' value was not provided"));
    }
    let value = ctx.reduce(1)?;
    ctx.scope().global().borrow_mut().set(name, value.clone());
    Ok(value)
}

/// `(get "name")`: look a name up from the current scope.
pub(super) fn get(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let key = ctx.reduce(0)?;
    let Some(name) = key.as_str() else {
        return Err(arg_error(ctx, 0, "'get' key was not a string"));
    };
    let found = ctx.scope().borrow().get(name);
    found.ok_or_else(|| symbol_not_found(name))
}

/// `(fun "name" (params...) body)`: define a closure globally and return it.
pub(super) fn fun(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let name_value = ctx.reduce(0)?;
    let name = match name_value.as_str() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(arg_error(ctx, 0, "'fun' name was not a filled string")),
    };
    if !is_valid_symbol(name) {
        return Err(arg_error(ctx, 0, "'fun' name was not a valid symbol"));
    }

    let Some(Expr::List(param_list)) = ctx.arg(1) else {
        return Err(arg_error(ctx, 1, "'fun' params was not a list"));
    };
    let mut params = Vec::with_capacity(param_list.len());
    for param in &param_list.elements {
        let Some(sym) = param.as_symbol() else {
            let err = wrong_arg_type(format!("'fun' param was not a symbol, got `{param}`"));
            return Err(ctx.point_at(param, err));
        };
        params.push(sym.name().to_string());
    }

    let Some(body) = ctx.arg(2).filter(|expr| expr.as_list().is_some()).cloned() else {
        return Err(arg_error(ctx, 2, "'fun' body was not a list"));
    };

    tracing::debug!(name, params = params.len(), "defining function");
    let closure = Closure {
        name: Rc::from(name),
        params,
        body,
        scope: ctx.scope(),
        source: Rc::clone(ctx.runtime().source()),
    };
    let value = Value::Function(FunctionValue::closure(closure));
    ctx.scope().global().borrow_mut().set(name, value.clone());
    Ok(value)
}
