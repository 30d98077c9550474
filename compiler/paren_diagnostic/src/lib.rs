//! Diagnostics for paren.
//!
//! Every failure in the pipeline is eventually turned into a [`Diagnostic`]:
//! a one-line classification, the offending source line with a caret
//! underline, and for runtime failures the chain of active calls.
//!
//! Rendering is separate from classification. [`TerminalEmitter`] writes a
//! diagnostic to any `io::Write`, and [`ErrorSink`] decides what happens after
//! that: exit the process, or keep the text for the caller.

mod diagnostic;
pub mod emitter;
mod sink;

pub use diagnostic::{Diagnostic, ErrorKind, SourceSnippet, TraceEntry};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use sink::ErrorSink;
