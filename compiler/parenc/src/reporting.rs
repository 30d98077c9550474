//! Conversion from evaluation errors to renderable diagnostics.

use paren_diagnostic::{Diagnostic, SourceSnippet, TraceEntry};
use paren_eval::{CallFrame, ErrorLocation, EvalError};

/// Build the diagnostic shown for `err`.
///
/// The snippet comes from the error's own location. Errors without one fall
/// back to the call site of the innermost frame.
pub fn to_diagnostic(err: &EvalError) -> Diagnostic {
    let snippet = match &err.location {
        Some(location) => snippet_at(location),
        None => err
            .trace
            .first()
            .and_then(|frame| SourceSnippet::from_token(&frame.source, &frame.token)),
    };
    let trace = err.trace.iter().map(trace_entry).collect();
    Diagnostic::new(err.error_kind(), err.message())
        .with_snippet(snippet)
        .with_trace(trace)
}

fn snippet_at(location: &ErrorLocation) -> Option<SourceSnippet> {
    if location.line == 0 {
        return None;
    }
    Some(SourceSnippet {
        file: location.source.path().to_string(),
        line: location.line,
        column: location.column,
        width: location.width,
        text: location
            .source
            .line_text(location.line)
            .unwrap_or_default()
            .to_string(),
    })
}

fn trace_entry(frame: &CallFrame) -> TraceEntry {
    TraceEntry {
        name: frame.name.clone(),
        line: frame.token.line,
        file: frame.source.path().to_string(),
    }
}
