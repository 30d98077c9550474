//! Helpers shared by the unit tests.

use std::sync::Arc;

use paren_ir::SourceFile;

use crate::{buffer_handler, EvalError, EvalResult, Runtime, Value};

/// Outcome of running a program with buffered output.
pub(crate) struct Run {
    pub result: EvalResult,
    pub output: String,
}

pub(crate) fn runtime(strict: bool, max_stack_size: usize) -> (Runtime, crate::SharedPrintHandler) {
    let output = buffer_handler();
    let built = Runtime::builder()
        .strict(strict)
        .max_stack_size(max_stack_size)
        .print_handler(Arc::clone(&output))
        .build();
    match built {
        Ok(runtime) => (runtime, output),
        Err(err) => panic!("runtime failed to build: {err}"),
    }
}

pub(crate) fn run_with(source: &str, strict: bool, max_stack_size: usize) -> Run {
    let (mut runtime, output) = runtime(strict, max_stack_size);
    let result = runtime.execute(SourceFile::anonymous(source));
    Run {
        result,
        output: output.output(),
    }
}

pub(crate) fn run(source: &str) -> Run {
    run_with(source, false, crate::DEFAULT_MAX_STACK_SIZE)
}

pub(crate) fn run_strict(source: &str) -> Run {
    run_with(source, true, crate::DEFAULT_MAX_STACK_SIZE)
}

pub(crate) fn eval_ok(source: &str) -> Value {
    match run(source).result {
        Ok(value) => value,
        Err(err) => panic!("unexpected error for {source:?}: {err}"),
    }
}

pub(crate) fn expect_err(result: EvalResult) -> EvalError {
    match result {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => err,
    }
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    expect_err(run(source).result)
}
