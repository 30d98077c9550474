use super::arg_error;
use crate::errors::integer_overflow;
use crate::interpreter::CallContext;
use crate::{EvalResult, Value};

/// `(+ a b)`
pub(super) fn plus(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let lhs = ctx.reduce(0)?;
    let rhs = ctx.reduce(1)?;
    let Some(lhs) = lhs.as_int() else {
        return Err(arg_error(ctx, 0, "lhs was not an integer"));
    };
    let Some(rhs) = rhs.as_int() else {
        return Err(arg_error(ctx, 1, "rhs was not an integer"));
    };
    lhs.checked_add(rhs)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("addition"))
}
