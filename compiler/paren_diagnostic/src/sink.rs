//! Where rendered diagnostics go.

use std::io::IsTerminal;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use crate::Diagnostic;

/// Destination for the driver's error reports.
///
/// The command-line tool uses [`ErrorSink::Exit`]. Embedders and tests use
/// [`ErrorSink::Buffer`] and get the failure back as a value.
#[derive(Clone, Debug)]
pub enum ErrorSink {
    /// Render to stderr, then terminate the process with exit code 1.
    Exit(ColorMode),
    /// Append the uncolored rendering to a shared buffer.
    Buffer(Arc<Mutex<String>>),
}

impl ErrorSink {
    /// Create an empty capturing sink.
    pub fn buffer() -> Self {
        ErrorSink::Buffer(Arc::new(Mutex::new(String::new())))
    }

    /// Report a diagnostic.
    ///
    /// Does not return for [`ErrorSink::Exit`].
    pub fn report(&self, diagnostic: &Diagnostic) {
        match self {
            ErrorSink::Exit(mode) => {
                let is_tty = std::io::stderr().is_terminal();
                let mut emitter = TerminalEmitter::stderr(*mode, is_tty);
                emitter.emit(diagnostic);
                emitter.flush();
                std::process::exit(1);
            }
            ErrorSink::Buffer(buf) => {
                let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
                emitter.emit(diagnostic);
                let text = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
                buf.lock().push_str(&text);
            }
        }
    }

    /// Everything captured so far. Always empty for [`ErrorSink::Exit`].
    pub fn contents(&self) -> String {
        match self {
            ErrorSink::Exit(_) => String::new(),
            ErrorSink::Buffer(buf) => buf.lock().clone(),
        }
    }

    /// Discard captured text.
    pub fn clear(&self) {
        if let ErrorSink::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

impl Default for ErrorSink {
    fn default() -> Self {
        ErrorSink::Exit(ColorMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn buffer_accumulates_reports() {
        let sink = ErrorSink::buffer();
        sink.report(&Diagnostic::new(ErrorKind::Panic, "one"));
        sink.report(&Diagnostic::new(ErrorKind::Runtime, "two"));
        assert_eq!(
            sink.contents(),
            "panic! : one\na runtime error has occurred: two\n"
        );
        sink.clear();
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn clones_share_the_buffer() {
        let sink = ErrorSink::buffer();
        let handle = sink.clone();
        sink.report(&Diagnostic::new(ErrorKind::Internal, "bad"));
        assert!(handle.contents().contains("internal error"));
    }

    #[test]
    fn exit_sink_captures_nothing() {
        assert_eq!(ErrorSink::default().contents(), "");
    }
}
