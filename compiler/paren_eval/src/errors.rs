//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured category and the message text.
//! The factory functions below are the public way to build an [`EvalError`];
//! source location and backtrace are attached later, by the evaluator, as
//! the error travels outward through the call chain.

use std::rc::Rc;

use paren_diagnostic::ErrorKind;
use paren_ir::{SourceFile, Token};
use thiserror::Error;

use crate::diagnostics::CallFrame;
use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// Lexer or parser failure, including inside imported files.
    #[error("{message}")]
    Syntax { message: String },

    #[error("symbol `{name}` not found")]
    SymbolNotFound { name: String },

    #[error("symbol `{name}` was not a function")]
    NotAFunction { name: String },

    #[error("stack overflow")]
    StackOverflow { limit: usize },

    #[error("argument `{name}` missing from args list")]
    MissingArgument { name: String },

    #[error("`{name}` takes {expected} argument(s) but {got} were given")]
    TooManyArguments {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A builtin received an argument of the wrong shape.
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    #[error("could not import `{path}`: {reason}")]
    ImportFailed { path: String, reason: String },

    #[error("module `{name}` is already defined")]
    DuplicateModule { name: String },

    /// Any other runtime failure raised by a builtin.
    #[error("{message}")]
    Custom { message: String },

    #[error("{message}")]
    Internal { message: String },

    #[error("{message}")]
    Panic { message: String },
}

impl EvalErrorKind {
    /// Classification used in the diagnostic header.
    pub fn error_kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Internal { .. } => ErrorKind::Internal,
            Self::Panic { .. } => ErrorKind::Panic,
            Self::SymbolNotFound { .. }
            | Self::NotAFunction { .. }
            | Self::StackOverflow { .. }
            | Self::MissingArgument { .. }
            | Self::TooManyArguments { .. }
            | Self::InvalidArgument { .. }
            | Self::IntegerOverflow { .. }
            | Self::ImportFailed { .. }
            | Self::DuplicateModule { .. }
            | Self::Custom { .. } => ErrorKind::Runtime,
        }
    }
}

/// Where in the source an error was raised.
#[derive(Clone, Debug)]
pub struct ErrorLocation {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// Width in characters of the offending text.
    pub width: u32,
    pub source: Rc<SourceFile>,
}

impl ErrorLocation {
    pub fn new(line: u32, column: u32, width: u32, source: Rc<SourceFile>) -> Self {
        ErrorLocation {
            line,
            column,
            width,
            source,
        }
    }

    pub fn at_token(token: &Token, source: Rc<SourceFile>) -> Self {
        Self::new(token.line, token.column, token.width, source)
    }
}

/// An evaluation failure.
#[derive(Clone, Debug, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Set by the innermost site that knows a token for the failure.
    pub location: Option<ErrorLocation>,
    /// Active calls at the failure, innermost first.
    pub trace: Vec<CallFrame>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            location: None,
            trace: Vec::new(),
        }
    }

    /// Message text without classification.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind.error_kind()
    }

    /// Attach a location unless one is already present.
    #[must_use]
    pub fn or_location(mut self, location: ErrorLocation) -> Self {
        if self.location.is_none() {
            self.location = Some(location);
        }
        self
    }

    /// Attach a backtrace unless one is already present.
    #[must_use]
    pub fn or_backtrace(mut self, frames: Vec<CallFrame>) -> Self {
        if self.trace.is_empty() {
            self.trace = frames;
        }
        self
    }
}

/// Lexer or parser failure.
#[cold]
pub fn syntax_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Syntax {
        message: message.into(),
    })
}

/// Reference to a name bound nowhere in the scope chain.
#[cold]
pub fn symbol_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SymbolNotFound {
        name: name.to_string(),
    })
}

/// Call form whose head is bound to something other than a function.
#[cold]
pub fn not_a_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        name: name.to_string(),
    })
}

/// Call depth limit reached.
#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
}

/// Closure called without a value for `name` in strict mode.
#[cold]
pub fn missing_argument(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingArgument {
        name: name.to_string(),
    })
}

/// Closure called with surplus arguments in strict mode.
#[cold]
pub fn too_many_arguments(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Builtin argument of the wrong type or shape.
#[cold]
pub fn wrong_arg_type(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        message: message.into(),
    })
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

#[cold]
pub fn import_failed(path: &str, reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImportFailed {
        path: path.to_string(),
        reason: reason.into(),
    })
}

#[cold]
pub fn duplicate_module(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateModule {
        name: name.to_string(),
    })
}

/// Generic runtime failure.
#[cold]
pub fn runtime_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Custom {
        message: message.into(),
    })
}

/// Interpreter invariant violated.
#[cold]
pub fn internal_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Internal {
        message: message.into(),
    })
}

/// Explicit abort requested by the program.
#[cold]
pub fn panic_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Panic {
        message: message.into(),
    })
}

/// Build an error of the given classification.
pub fn error_of_kind(kind: ErrorKind, message: impl Into<String>) -> EvalError {
    match kind {
        ErrorKind::Syntax => syntax_error(message),
        ErrorKind::Runtime => runtime_error(message),
        ErrorKind::Internal => internal_error(message),
        ErrorKind::Panic => panic_error(message),
    }
}
