//! RAII guards for interpreter state.
//!
//! [`ScopedInterpreter`] swaps in a different current scope and swaps the
//! caller's back on drop. [`FrameGuard`] pops the call frame pushed for a
//! call on drop. Both hold `&mut Interpreter` and deref to it, so the guarded
//! code uses the interpreter as usual, and cleanup runs on every exit path
//! including `?` returns and unwinding.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::{LocalScope, Scope};

/// Guard that restores the caller's scope on drop.
pub struct ScopedInterpreter<'guard, 'rt> {
    interpreter: &'guard mut Interpreter<'rt>,
    saved: LocalScope<Scope>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        std::mem::swap(&mut self.interpreter.scope, &mut self.saved);
    }
}

impl<'rt> Deref for ScopedInterpreter<'_, 'rt> {
    type Target = Interpreter<'rt>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

/// Guard that pops the innermost call frame on drop.
pub struct FrameGuard<'guard, 'rt> {
    interpreter: &'guard mut Interpreter<'rt>,
}

impl<'guard, 'rt> FrameGuard<'guard, 'rt> {
    /// Take responsibility for the frame the caller just pushed.
    pub(super) fn entered(interpreter: &'guard mut Interpreter<'rt>) -> Self {
        FrameGuard { interpreter }
    }
}

impl Drop for FrameGuard<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.runtime.call_stack_mut().pop();
    }
}

impl<'rt> Deref for FrameGuard<'_, 'rt> {
    type Target = Interpreter<'rt>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for FrameGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'rt> Interpreter<'rt> {
    /// Make `scope` current until the returned guard is dropped.
    pub fn scoped(&mut self, scope: LocalScope<Scope>) -> ScopedInterpreter<'_, 'rt> {
        let saved = std::mem::replace(&mut self.scope, scope);
        ScopedInterpreter {
            interpreter: self,
            saved,
        }
    }

    /// Run `f` with `scope` current, restoring the caller's scope afterwards.
    pub fn with_scope<T, F>(&mut self, scope: LocalScope<Scope>, f: F) -> T
    where
        F: FnOnce(&mut Interpreter<'rt>) -> T,
    {
        let mut scoped = self.scoped(scope);
        f(&mut *scoped)
    }
}
