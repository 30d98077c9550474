//! Paren Eval - Tree-walking evaluator for the paren interpreter.
//!
//! # Architecture
//!
//! - `Runtime`: per-execution state (global scope, call stack, modules,
//!   configuration). Built with [`Runtime::builder`].
//! - `Interpreter`: walks the tree produced by `paren_parse` against a runtime.
//! - `CallContext`: what builtins see. Arguments arrive unevaluated.
//! - `builtins`: the standard library, registered into every runtime.
//!
//! Errors carry their source location and, once they escape a call, a
//! backtrace of the frames that were active. `paren_diagnostic` renders them.

mod builtins;
pub mod diagnostics;
mod environment;
pub mod errors;
pub mod interpreter;
mod print_handler;
mod runtime;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{LocalScope, Scope};
pub use errors::{ErrorLocation, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{CallContext, Interpreter};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use runtime::{
    qualified_name, ModuleRegistry, Runtime, RuntimeBuilder, DEFAULT_MAX_STACK_SIZE,
    MODULE_SEPARATOR,
};
pub use value::{Builtin, BuiltinFn, Closure, FunctionValue, Value};

pub use paren_diagnostic::ErrorKind;

#[cfg(test)]
mod test_support;
