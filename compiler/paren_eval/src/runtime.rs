//! Per-execution interpreter state.
//!
//! A [`Runtime`] owns everything one program run needs: the global scope, the
//! call stack, configuration, the file currently being evaluated and the
//! module registry. Nothing is stored in statics, so independent runtimes can
//! live side by side in one process.

use std::rc::Rc;

use paren_ir::SourceFile;
use rustc_hash::FxHashMap;

use crate::builtins;
use crate::diagnostics::CallStack;
use crate::environment::{LocalScope, Scope};
use crate::errors::{internal_error, EvalError};
use crate::interpreter::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::{BuiltinFn, FunctionValue};
use crate::{EvalResult, Value};

/// Call depth limit when none is configured.
pub const DEFAULT_MAX_STACK_SIZE: usize = 512;

/// Separator between a module name and an exported member.
pub const MODULE_SEPARATOR: char = '/';

/// Modules defined so far and what each one exported.
#[derive(Clone, Debug, Default)]
pub struct ModuleRegistry {
    modules: FxHashMap<String, Vec<String>>,
}

impl ModuleRegistry {
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Register `name` with no exports.
    ///
    /// Returns `false`, changing nothing, if it already exists.
    pub fn define(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.modules.insert(name.to_string(), Vec::new());
        true
    }

    /// Record `member` as exported from `module`.
    pub fn add_export(&mut self, module: &str, member: &str) {
        if let Some(exports) = self.modules.get_mut(module) {
            if !exports.iter().any(|e| e == member) {
                exports.push(member.to_string());
            }
        }
    }

    /// Exported member names, in export order.
    pub fn exports(&self, module: &str) -> Option<&[String]> {
        self.modules.get(module).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Qualified global name of an exported member.
pub fn qualified_name(module: &str, member: &str) -> String {
    format!("{module}{MODULE_SEPARATOR}{member}")
}

/// Interpreter state for one program execution.
pub struct Runtime {
    global: LocalScope<Scope>,
    call_stack: CallStack,
    strict: bool,
    source: Rc<SourceFile>,
    modules: ModuleRegistry,
    print_handler: SharedPrintHandler,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Handle to the global scope.
    pub fn global(&self) -> LocalScope<Scope> {
        self.global.clone()
    }

    #[inline]
    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    #[inline]
    pub fn call_stack_mut(&mut self) -> &mut CallStack {
        &mut self.call_stack
    }

    #[inline]
    pub fn strict(&self) -> bool {
        self.strict
    }

    #[inline]
    pub fn max_stack_size(&self) -> usize {
        self.call_stack.max_depth()
    }

    /// The file currently being evaluated.
    #[inline]
    pub fn source(&self) -> &Rc<SourceFile> {
        &self.source
    }

    /// Switch the current file, returning the previous one.
    pub fn replace_source(&mut self, source: Rc<SourceFile>) -> Rc<SourceFile> {
        std::mem::replace(&mut self.source, source)
    }

    #[inline]
    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    #[inline]
    pub fn modules_mut(&mut self) -> &mut ModuleRegistry {
        &mut self.modules
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Bind a native function in the global scope.
    pub fn register_builtin(&mut self, name: &str, func: BuiltinFn) -> Result<(), EvalError> {
        if name.is_empty() {
            return Err(internal_error("builtin name must not be empty"));
        }
        let mut global = self.global.borrow_mut();
        if global.has_local(name) {
            return Err(internal_error(format!(
                "builtin `{name}` is already registered"
            )));
        }
        global.set(name, Value::Function(FunctionValue::builtin(name, func)));
        Ok(())
    }

    /// Lex, parse and evaluate `file` in the global scope.
    ///
    /// Returns the value of the last top-level form, or `nil` for an empty
    /// program.
    pub fn execute(&mut self, file: SourceFile) -> EvalResult {
        Interpreter::new(self).interpret(file)
    }

    /// Execute the runtime's current source.
    pub fn run(&mut self) -> EvalResult {
        let file = SourceFile::clone(&self.source);
        self.execute(file)
    }
}

impl Drop for Runtime {
    // Closures capture the global scope while living in it. Clearing the
    // bindings breaks that cycle so the scope chain is freed.
    fn drop(&mut self) {
        if let Ok(mut global) = self.global.try_borrow_mut() {
            global.clear();
        }
    }
}

/// Builder for [`Runtime`].
#[derive(Default)]
pub struct RuntimeBuilder {
    strict: bool,
    max_stack_size: Option<usize>,
    source: Option<SourceFile>,
    print_handler: Option<SharedPrintHandler>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject missing closure arguments, empty modules and empty exports.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Maximum number of nested calls. Must be at least 1.
    #[must_use]
    pub fn max_stack_size(mut self, size: usize) -> Self {
        self.max_stack_size = Some(size);
        self
    }

    /// Initial current file, used by [`Runtime::run`].
    #[must_use]
    pub fn source(mut self, source: SourceFile) -> Self {
        self.source = Some(source);
        self
    }

    /// Where `print` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the runtime and install the standard library.
    pub fn build(self) -> Result<Runtime, EvalError> {
        let max_stack_size = self.max_stack_size.unwrap_or(DEFAULT_MAX_STACK_SIZE);
        if max_stack_size == 0 {
            return Err(internal_error("max stack size must be at least 1"));
        }
        let mut runtime = Runtime {
            global: LocalScope::new(Scope::new()),
            call_stack: CallStack::new(max_stack_size),
            strict: self.strict,
            source: Rc::new(self.source.unwrap_or_default()),
            modules: ModuleRegistry::default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        };
        builtins::register_all(&mut runtime)?;
        tracing::debug!(
            strict = runtime.strict,
            max_stack_size,
            "runtime initialised"
        );
        Ok(runtime)
    }
}

#[cfg(test)]
mod tests;
