//! Paren driver.
//!
//! Ties the pipeline together for the `paren` binary and for embedders:
//! build a [`Runtime`] from [`Options`], evaluate one file, and hand any
//! failure to an [`ErrorSink`] as a rendered [`Diagnostic`](paren_diagnostic::Diagnostic).
//! This is the only layer that reports errors; everything below it returns
//! them.

pub mod cli;
pub mod reporting;

use std::sync::Once;

use paren_diagnostic::{ColorMode, ErrorSink};
use paren_eval::{EvalError, Runtime, SharedPrintHandler, Value, DEFAULT_MAX_STACK_SIZE};
use paren_ir::SourceFile;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=paren_eval=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Interpreter settings chosen on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub strict: bool,
    pub max_stack_size: usize,
    pub color: ColorMode,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            strict: false,
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
            color: ColorMode::Auto,
        }
    }
}

/// Evaluate `file` in a fresh runtime.
///
/// On failure the error is reported to `sink` before being returned. With
/// [`ErrorSink::Exit`] that report ends the process.
pub fn execute(
    file: SourceFile,
    options: &Options,
    sink: &ErrorSink,
    print_handler: SharedPrintHandler,
) -> Result<Value, EvalError> {
    tracing::debug!(
        file = file.path(),
        strict = options.strict,
        max_stack_size = options.max_stack_size,
        "executing"
    );
    let result = Runtime::builder()
        .strict(options.strict)
        .max_stack_size(options.max_stack_size)
        .print_handler(print_handler)
        .build()
        .and_then(|mut runtime| runtime.execute(file));

    if let Err(err) = &result {
        sink.report(&reporting::to_diagnostic(err));
    }
    result
}
