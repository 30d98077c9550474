//! Modules and file imports.
//!
//! `(module name body)` evaluates `body` in a child of the current scope
//! where `export` is bound. `(export a b)` copies the current values of
//! `a` and `b` into the global scope as `name/a` and `name/b`. Each `export`
//! belongs to the module that bound it, even when called from elsewhere.

use paren_diagnostic::ErrorKind;
use paren_ir::{ListExpr, SourceFile, SymbolExpr};

use super::arg_error;
use crate::errors::{duplicate_module, import_failed, wrong_arg_type};
use crate::interpreter::CallContext;
use crate::runtime::qualified_name;
use crate::value::FunctionValue;
use crate::{EvalResult, Value};

pub(super) fn module(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let Some(name_expr) = ctx.arg(0).filter(|expr| expr.as_symbol().is_some()) else {
        return Err(arg_error(ctx, 0, "'module' name was not a symbol"));
    };
    let Some(body) = ctx.arg(1).filter(|expr| expr.as_list().is_some()) else {
        return Err(arg_error(ctx, 1, "'module' body was not a list"));
    };
    if body.as_list().is_some_and(ListExpr::is_empty) && ctx.runtime().strict() {
        return Err(ctx.error(
            ErrorKind::Runtime,
            "'module' body was empty and empty modules are forbidden in strict mode",
        ));
    }

    let name = name_expr.as_symbol().map_or("", SymbolExpr::name);
    if !ctx.runtime_mut().modules_mut().define(name) {
        return Err(ctx.point_at(name_expr, duplicate_module(name)));
    }

    let scope = ctx.scope().child();
    scope.borrow_mut().set(
        "export",
        Value::Function(FunctionValue::owned_builtin("export", name, export)),
    );
    ctx.with_scope(scope, |ctx| ctx.eval(body))?;

    tracing::debug!(
        module = name,
        exports = ctx.runtime().modules().exports(name).map_or(0, |exports| exports.len()),
        "module defined"
    );
    Ok(Value::Nil)
}

fn export(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let Some(module) = ctx.owner() else {
        return Err(ctx.error(ErrorKind::Internal, "'export' was not bound to a module"));
    };
    if ctx.arg_count() == 0 && ctx.runtime().strict() {
        return Err(ctx.error(
            ErrorKind::Runtime,
            "'export' had no values which is forbidden in strict mode",
        ));
    }

    for expr in ctx.args() {
        let Some(sym) = expr.as_symbol() else {
            let err = wrong_arg_type("'export' argument was not a symbol");
            return Err(ctx.point_at(expr, err));
        };
        let value = ctx.eval(expr)?;
        ctx.scope()
            .global()
            .borrow_mut()
            .set(qualified_name(module, sym.name()), value);
        ctx.runtime_mut()
            .modules_mut()
            .add_export(module, sym.name());
    }
    Ok(Value::Nil)
}

/// `(import "path")`: evaluate another file in the global scope.
pub(super) fn import(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let path_value = ctx.reduce(0)?;
    let path = match path_value.as_str() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => return Err(arg_error(ctx, 0, "'import' path was not a string")),
    };
    let text = std::fs::read_to_string(&path).map_err(|err| import_failed(&path, err.to_string()))?;
    tracing::debug!(path = %path, "importing");
    ctx.interpret(SourceFile::new(path, text))
}
