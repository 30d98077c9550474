//! Call stack tracking.
//!
//! `CallStack` doubles as the recursion limit and as the source of the
//! backtraces printed with runtime errors. Frames record the call-site token
//! and the file it came from, so a trace stays correct across imports.

use std::fmt;
use std::rc::Rc;

use paren_ir::{SourceFile, Token};

use crate::errors::{stack_overflow, EvalError};

/// One active call.
#[derive(Clone)]
pub struct CallFrame {
    /// Name the function was called by.
    pub name: String,
    /// Head symbol of the call form.
    pub token: Token,
    pub source: Rc<SourceFile>,
}

impl CallFrame {
    pub fn new(name: impl Into<String>, token: Token, source: Rc<SourceFile>) -> Self {
        CallFrame {
            name: name.into(),
            token,
            source,
        }
    }
}

impl fmt::Debug for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) ({})",
            self.name,
            self.token.line,
            self.source.path()
        )
    }
}

/// Live call stack for the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit first.
    ///
    /// With a limit of `n`, exactly `n` nested calls fit. The frame is not
    /// pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(stack_overflow(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Snapshot of the active calls, innermost first.
    pub fn capture(&self) -> Vec<CallFrame> {
        self.frames.iter().rev().cloned().collect()
    }

    /// Attach a backtrace to an error that does not have one yet.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() {
            return err;
        }
        err.or_backtrace(self.capture())
    }
}

#[cfg(test)]
mod tests;
