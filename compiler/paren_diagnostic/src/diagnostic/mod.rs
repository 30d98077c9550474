//! Core diagnostic types.

use std::fmt;

use paren_ir::{SourceFile, Token};

/// Error classification shown in the diagnostic header.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Malformed source: lexer and parser failures.
    Syntax,
    /// Semantic failures during evaluation.
    Runtime,
    /// Interpreter invariants violated.
    Internal,
    /// Explicit abort requested by the program.
    Panic,
}

impl ErrorKind {
    /// Whether diagnostics of this kind list the active call chain.
    ///
    /// Syntax and internal errors have no meaningful chain.
    #[inline]
    pub fn has_trace(self) -> bool {
        matches!(self, ErrorKind::Runtime | ErrorKind::Panic)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax"),
            ErrorKind::Runtime => write!(f, "runtime"),
            ErrorKind::Internal => write!(f, "internal"),
            ErrorKind::Panic => write!(f, "panic"),
        }
    }
}

/// One source line plus the column range to underline.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceSnippet {
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column of the first underlined character.
    pub column: u32,
    /// Number of characters to underline; at least one caret is drawn.
    pub width: u32,
    /// Text of the line, without its terminator.
    pub text: String,
}

impl SourceSnippet {
    /// Slice the token's line out of `source`.
    ///
    /// Returns `None` for synthetic tokens, which have no line to show.
    pub fn from_token(source: &SourceFile, token: &Token) -> Option<Self> {
        if token.is_synthetic() {
            return None;
        }
        Some(SourceSnippet {
            file: source.path().to_string(),
            line: token.line,
            column: token.column,
            width: token.width,
            text: source.line_text(token.line).unwrap_or_default().to_string(),
        })
    }

    /// The caret line drawn under [`text`](Self::text).
    ///
    /// Tabs before the column are kept so the carets line up with the text
    /// however the terminal expands them.
    pub fn underline(&self) -> String {
        let lead = usize::try_from(self.column.saturating_sub(1)).unwrap_or(0);
        let carets = usize::try_from(self.width.max(1)).unwrap_or(1);
        let mut out: String = self
            .text
            .chars()
            .chain(std::iter::repeat(' '))
            .take(lead)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        out.push_str(&"^".repeat(carets));
        out
    }
}

/// One active call at the time of a failure.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TraceEntry {
    /// Name of the called function.
    pub name: String,
    /// Line of the call site.
    pub line: u32,
    pub file: String,
}

/// A fully classified failure, ready to be rendered.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    pub snippet: Option<SourceSnippet>,
    /// Active calls, innermost first.
    pub trace: Vec<TraceEntry>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            snippet: None,
            trace: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: Option<SourceSnippet>) -> Self {
        self.snippet = snippet;
        self
    }

    /// Attach the call chain. Dropped for kinds that do not show one.
    #[must_use]
    pub fn with_trace(mut self, trace: Vec<TraceEntry>) -> Self {
        if self.kind.has_trace() {
            self.trace = trace;
        }
        self
    }

    /// The one-line classification.
    pub fn header(&self) -> String {
        match self.kind {
            ErrorKind::Panic => format!("panic! : {}", self.message),
            kind => format!("a {kind} error has occurred: {}", self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())
    }
}

#[cfg(test)]
mod tests;
