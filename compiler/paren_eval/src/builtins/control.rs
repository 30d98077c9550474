use paren_diagnostic::ErrorKind;

use crate::interpreter::CallContext;
use crate::{EvalResult, Value};

/// `(panic message)`: abort with the stringified message.
pub(super) fn panic(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let message = ctx.reduce(0)?.to_string();
    Err(ctx.error(ErrorKind::Panic, message))
}

/// `(if cond then else)`. Only the chosen branch is evaluated.
pub(super) fn if_(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let condition = ctx.reduce(0)?;
    if condition.is_truthy() {
        ctx.reduce(1)
    } else {
        ctx.reduce(2)
    }
}

/// `(eq a b)`
pub(super) fn eq(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let lhs = ctx.reduce(0)?;
    let rhs = ctx.reduce(1)?;
    Ok(Value::Bool(lhs == rhs))
}
