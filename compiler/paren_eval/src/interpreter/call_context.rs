//! The interface builtins are written against.

use paren_diagnostic::ErrorKind;
use paren_ir::{Expr, SourceFile, SymbolExpr, Token};

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::errors::{error_of_kind, EvalError};
use crate::runtime::Runtime;
use crate::value::Builtin;
use crate::{EvalResult, Value};

/// A builtin invocation in progress.
///
/// Arguments arrive unevaluated. A builtin forces the ones it needs, in the
/// order it needs them, so control forms like `if` and `fun` can treat some
/// arguments as code.
pub struct CallContext<'ctx, 'rt> {
    interpreter: &'ctx mut Interpreter<'rt>,
    builtin: &'ctx Builtin,
    callee: &'ctx SymbolExpr,
    args: &'ctx [Expr],
}

impl<'ctx, 'rt> CallContext<'ctx, 'rt> {
    pub(super) fn new(
        interpreter: &'ctx mut Interpreter<'rt>,
        builtin: &'ctx Builtin,
        callee: &'ctx SymbolExpr,
        args: &'ctx [Expr],
    ) -> Self {
        CallContext {
            interpreter,
            builtin,
            callee,
            args,
        }
    }

    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn has_arg(&self, index: usize) -> bool {
        index < self.args.len()
    }

    /// Unevaluated argument.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&'ctx Expr> {
        self.args.get(index)
    }

    #[inline]
    pub fn args(&self) -> &'ctx [Expr] {
        self.args
    }

    /// Evaluate one argument in the current scope. A missing argument is `nil`.
    pub fn reduce(&mut self, index: usize) -> EvalResult {
        match self.args.get(index) {
            Some(expr) => self.interpreter.eval(expr),
            None => Ok(Value::Nil),
        }
    }

    /// Evaluate every argument, left to right.
    pub fn reduce_all(&mut self) -> Result<Vec<Value>, EvalError> {
        let args = self.args;
        args.iter().map(|expr| self.interpreter.eval(expr)).collect()
    }

    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        self.interpreter.eval(expr)
    }

    /// Handle to the current scope.
    pub fn scope(&self) -> LocalScope<Scope> {
        self.interpreter.scope().clone()
    }

    /// Run `f` with `scope` current. The previous scope is restored on every
    /// exit path.
    pub fn with_scope<T, F>(&mut self, scope: LocalScope<Scope>, f: F) -> T
    where
        F: FnOnce(&mut CallContext<'_, 'rt>) -> T,
    {
        let mut scoped = self.interpreter.scoped(scope);
        let mut ctx = CallContext {
            interpreter: &mut *scoped,
            builtin: self.builtin,
            callee: self.callee,
            args: self.args,
        };
        f(&mut ctx)
    }

    #[inline]
    pub fn runtime(&self) -> &Runtime {
        self.interpreter.runtime()
    }

    #[inline]
    pub fn runtime_mut(&mut self) -> &mut Runtime {
        self.interpreter.runtime_mut()
    }

    /// Build an error of the given kind. The caller returns it with `Err`;
    /// the evaluator then points it at this call site.
    pub fn error(&self, kind: ErrorKind, message: impl Into<String>) -> EvalError {
        error_of_kind(kind, message)
    }

    /// Point `err` at `expr` rather than at the call site.
    pub fn point_at(&self, expr: &Expr, err: EvalError) -> EvalError {
        self.interpreter.locate(err, expr.token())
    }

    /// Evaluate a whole file in the global scope with it as the current file.
    pub fn interpret(&mut self, file: SourceFile) -> EvalResult {
        self.interpreter.interpret(file)
    }

    /// Head symbol token of this call.
    #[inline]
    pub fn call_token(&self) -> &'ctx Token {
        &self.callee.token
    }

    /// Name this builtin was called by.
    #[inline]
    pub fn callee(&self) -> &'ctx str {
        self.callee.name()
    }

    /// Module this builtin was bound for, if it is module-local.
    #[inline]
    pub fn owner(&self) -> Option<&'ctx str> {
        self.builtin.owner.as_deref()
    }
}
