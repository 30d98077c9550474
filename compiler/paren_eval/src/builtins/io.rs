use std::sync::Arc;

use crate::interpreter::CallContext;
use crate::{EvalResult, Value};

/// `(print a b ...)`: one line per argument.
pub(super) fn print(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let values = ctx.reduce_all()?;
    let handler = Arc::clone(ctx.runtime().print_handler());
    for value in &values {
        handler.println(&value.to_string());
    }
    Ok(Value::Nil)
}
