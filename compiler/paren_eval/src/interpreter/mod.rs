//! Tree-walking evaluator.
//!
//! # Evaluation rules
//!
//! - A literal evaluates to its value.
//! - A symbol is looked up through the current scope chain.
//! - A list whose head is a symbol is a call form. The head must resolve to a
//!   function; its arguments are handed over unevaluated.
//! - Any other list, including `()`, is a list literal. Every element is
//!   evaluated left to right.
//!
//! Each call pushes a frame on the runtime's call stack before the callee
//! runs and pops it on every exit path. An error escaping a call picks up
//! the call-site location and a snapshot of the active frames while the
//! failing frame is still on the stack.

mod call_context;
mod scope_guard;

pub use call_context::CallContext;
pub use scope_guard::{FrameGuard, ScopedInterpreter};

use std::rc::Rc;

use paren_ir::{Expr, ListExpr, SourceFile, SymbolExpr, Token};
use paren_lexer::LexError;
use paren_parse::ParseError;
use paren_stack::ensure_sufficient_stack;

use crate::diagnostics::CallFrame;
use crate::environment::{LocalScope, Scope};
use crate::errors::{
    missing_argument, not_a_function, symbol_not_found, syntax_error, too_many_arguments,
    ErrorLocation, EvalError,
};
use crate::runtime::Runtime;
use crate::value::{Closure, FunctionValue};
use crate::{EvalResult, Value};

/// Evaluator bound to a runtime and a current scope.
pub struct Interpreter<'rt> {
    runtime: &'rt mut Runtime,
    scope: LocalScope<Scope>,
}

impl<'rt> Interpreter<'rt> {
    /// Create an interpreter positioned at the runtime's global scope.
    pub fn new(runtime: &'rt mut Runtime) -> Self {
        let scope = runtime.global();
        Interpreter { runtime, scope }
    }

    #[inline]
    pub fn scope(&self) -> &LocalScope<Scope> {
        &self.scope
    }

    #[inline]
    pub fn runtime(&self) -> &Runtime {
        self.runtime
    }

    #[inline]
    pub fn runtime_mut(&mut self) -> &mut Runtime {
        self.runtime
    }

    /// Lex, parse and evaluate a whole file in the global scope.
    ///
    /// The file becomes the runtime's current file for the duration and the
    /// previous one is restored afterwards, whether or not evaluation
    /// succeeds.
    pub fn interpret(&mut self, file: SourceFile) -> EvalResult {
        let file = Rc::new(file);
        let previous = self.runtime.replace_source(Rc::clone(&file));
        let global = self.runtime.global();
        let result = self.with_scope(global, |interp| interp.eval_program(&file));
        self.runtime.replace_source(previous);
        result
    }

    fn eval_program(&mut self, file: &Rc<SourceFile>) -> EvalResult {
        let tokens =
            paren_lexer::lex(file.text()).map_err(|err| lex_error_at(&err, Rc::clone(file)))?;
        let root =
            paren_parse::parse(&tokens).map_err(|err| parse_error_at(&err, Rc::clone(file)))?;
        tracing::debug!(file = file.path(), forms = root.len(), "evaluating program");

        let mut result = Value::Nil;
        for form in &root.elements {
            result = self.eval(form)?;
        }
        Ok(result)
    }

    /// Evaluate an expression in the current scope.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(lit) => Ok(Value::from_literal(&lit.value)),
            Expr::Symbol(sym) => self.lookup(sym),
            Expr::List(list) => match list.head() {
                Some(Expr::Symbol(head)) => self.eval_call(head, list.rest()),
                _ => self.eval_list_literal(list),
            },
        }
    }

    fn lookup(&self, sym: &SymbolExpr) -> EvalResult {
        let found = self.scope.borrow().get(sym.name());
        found.ok_or_else(|| self.locate(symbol_not_found(sym.name()), &sym.token))
    }

    fn eval_list_literal(&mut self, list: &ListExpr) -> EvalResult {
        let values = list
            .elements
            .iter()
            .map(|element| self.eval(element))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::list(values))
    }

    /// Evaluate a call form.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = head.name()))]
    fn eval_call(&mut self, head: &SymbolExpr, args: &[Expr]) -> EvalResult {
        let Value::Function(func) = self.lookup(head)? else {
            return Err(self.locate(not_a_function(head.name()), &head.token));
        };

        let frame = CallFrame::new(
            head.name(),
            head.token.clone(),
            Rc::clone(self.runtime.source()),
        );
        if let Err(err) = self.runtime.call_stack_mut().push(frame) {
            let stack = self.runtime.call_stack();
            tracing::debug!(
                limit = stack.max_depth(),
                innermost = stack.current_frame().map_or("", |f| f.name.as_str()),
                remaining_stack = ?paren_stack::remaining_stack(),
                "call depth limit reached"
            );
            let err = self.runtime.call_stack().attach_backtrace(err);
            return Err(self.locate(err, &head.token));
        }

        let mut framed = FrameGuard::entered(self);
        match framed.invoke(&func, head, args) {
            Ok(value) => Ok(value),
            Err(err) => {
                let err = framed.locate(err, &head.token);
                Err(framed.runtime().call_stack().attach_backtrace(err))
            }
        }
    }

    fn invoke(&mut self, func: &FunctionValue, head: &SymbolExpr, args: &[Expr]) -> EvalResult {
        match func {
            FunctionValue::Builtin(builtin) => {
                tracing::debug!(builtin = &*builtin.name, args = args.len(), "calling builtin");
                let mut ctx = CallContext::new(self, builtin, head, args);
                (builtin.func)(&mut ctx)
            }
            FunctionValue::Closure(closure) => self.call_closure(closure, args),
        }
    }

    /// Invoke a closure.
    ///
    /// Arguments are forced here, in the caller's scope. The body then runs
    /// in a fresh child of the captured scope holding the parameters.
    fn call_closure(&mut self, closure: &Rc<Closure>, args: &[Expr]) -> EvalResult {
        let strict = self.runtime.strict();
        if strict && args.len() > closure.params.len() {
            return Err(too_many_arguments(
                &closure.name,
                closure.params.len(),
                args.len(),
            ));
        }

        let mut bindings = Scope::with_parent(closure.scope.clone());
        for (index, param) in closure.params.iter().enumerate() {
            let value = match args.get(index) {
                Some(arg) => self.eval(arg)?,
                None if strict => return Err(missing_argument(param)),
                None => Value::Nil,
            };
            bindings.set(param.as_str(), value);
        }

        let previous = self.runtime.replace_source(Rc::clone(&closure.source));
        let result = self.with_scope(LocalScope::new(bindings), |interp| {
            interp.eval(&closure.body)
        });
        self.runtime.replace_source(previous);
        result
    }

    /// Give `err` a location at `token` in the current file, unless a more
    /// specific one is already set.
    pub(crate) fn locate(&self, err: EvalError, token: &Token) -> EvalError {
        err.or_location(ErrorLocation::at_token(
            token,
            Rc::clone(self.runtime.source()),
        ))
    }
}

fn lex_error_at(err: &LexError, source: Rc<SourceFile>) -> EvalError {
    syntax_error(err.to_string()).or_location(ErrorLocation::new(
        err.line,
        err.column,
        err.width,
        source,
    ))
}

fn parse_error_at(err: &ParseError, source: Rc<SourceFile>) -> EvalError {
    syntax_error(err.to_string()).or_location(ErrorLocation::at_token(err.token(), source))
}
