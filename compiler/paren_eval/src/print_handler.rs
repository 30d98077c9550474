//! Destination for `print` output.
//!
//! The command-line tool writes to stdout. Tests and embedders capture into a
//! buffer so output can be asserted on.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout. Write errors such as a closed pipe are ignored.
    Stdout,
    /// Captures output in memory.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print one line.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{line}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far; empty unless buffering.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
