use std::sync::Arc;

use super::*;
use crate::errors::EvalErrorKind;
use crate::test_support::expect_err;
use crate::{buffer_handler, silent_handler, CallContext, ErrorKind};
use pretty_assertions::assert_eq;

fn answer(_: &mut CallContext<'_, '_>) -> EvalResult {
    Ok(Value::Int(42))
}

fn whoami(ctx: &mut CallContext<'_, '_>) -> EvalResult {
    let line = i64::from(ctx.call_token().line);
    Ok(Value::list(vec![Value::string(ctx.callee()), Value::Int(line)]))
}

fn build(builder: RuntimeBuilder) -> Runtime {
    match builder.print_handler(silent_handler()).build() {
        Ok(runtime) => runtime,
        Err(err) => panic!("runtime failed to build: {err}"),
    }
}

#[test]
fn defaults() {
    let runtime = build(Runtime::builder());
    assert!(!runtime.strict());
    assert_eq!(runtime.max_stack_size(), DEFAULT_MAX_STACK_SIZE);
    assert_eq!(runtime.source().path(), "<anonymous>");
    assert!(runtime.call_stack().is_empty());
    assert!(runtime.modules().is_empty());
}

#[test]
fn standard_library_is_installed() {
    let runtime = build(Runtime::builder());
    let global = runtime.global();
    for name in ["print", "+", "var", "get", "fun", "module", "import", "panic", "if", "eq"] {
        assert!(global.borrow().has_local(name), "{name}");
    }
    assert!(!global.borrow().has("export"));
}

#[test]
fn zero_stack_size_is_rejected() {
    let err = match Runtime::builder().max_stack_size(0).build() {
        Ok(_) => panic!("expected a build error"),
        Err(err) => err,
    };
    assert_eq!(err.error_kind(), ErrorKind::Internal);
}

#[test]
fn register_builtin() {
    let mut runtime = build(Runtime::builder());
    assert!(runtime.register_builtin("answer", answer).is_ok());
    let value = runtime.execute(SourceFile::anonymous("(answer)"));
    assert!(matches!(value, Ok(Value::Int(42))));
}

#[test]
fn builtins_see_their_call_site() {
    let mut runtime = build(Runtime::builder());
    assert!(runtime.register_builtin("whoami", whoami).is_ok());
    let value = runtime.execute(SourceFile::anonymous("(var \"alias\" whoami)\n(alias)"));
    assert_eq!(value.map(|v| v.to_string()).ok().as_deref(), Some("(alias 2)"));
}

#[test]
fn register_builtin_rejects_duplicates_and_empty_names() {
    let mut runtime = build(Runtime::builder());
    let err = expect_err(runtime.register_builtin("print", answer).map(|()| Value::Nil));
    assert_eq!(err.message(), "builtin `print` is already registered");
    let err = expect_err(runtime.register_builtin("", answer).map(|()| Value::Nil));
    assert_eq!(err.error_kind(), ErrorKind::Internal);
}

#[test]
fn run_executes_configured_source() {
    let output = buffer_handler();
    let built = Runtime::builder()
        .source(SourceFile::new("main.paren", "(print \"hi\") (+ 1 1)"))
        .print_handler(Arc::clone(&output))
        .build();
    let mut runtime = match built {
        Ok(runtime) => runtime,
        Err(err) => panic!("{err}"),
    };
    assert!(matches!(runtime.run(), Ok(Value::Int(2))));
    assert_eq!(output.output(), "hi\n");
    assert_eq!(runtime.source().path(), "main.paren");
}

#[test]
fn state_persists_across_executions() {
    let mut runtime = build(Runtime::builder());
    assert!(runtime.execute(SourceFile::anonymous("(var \"x\" 1)")).is_ok());
    let value = runtime.execute(SourceFile::anonymous("(+ x 1)"));
    assert!(matches!(value, Ok(Value::Int(2))));
}

#[test]
fn runtimes_are_isolated() {
    let mut first = build(Runtime::builder());
    let mut second = build(Runtime::builder());
    assert!(first.execute(SourceFile::anonymous("(var \"x\" 1)")).is_ok());
    let err = expect_err(second.execute(SourceFile::anonymous("(print x)")));
    assert!(matches!(err.kind, EvalErrorKind::SymbolNotFound { .. }));
}

#[test]
fn source_is_restored_after_execute() {
    let mut runtime = build(Runtime::builder().source(SourceFile::new("main.paren", "")));
    let _ = runtime.execute(SourceFile::new("other.paren", "(panic 1)"));
    assert_eq!(runtime.source().path(), "main.paren");
}

#[test]
fn module_registry() {
    let mut registry = ModuleRegistry::default();
    assert!(registry.define("outer"));
    assert!(registry.define("inner"));
    registry.add_export("inner", "a");
    registry.add_export("inner", "a");
    registry.add_export("missing", "a");

    assert!(!registry.define("outer"));
    assert_eq!(registry.exports("outer"), Some(&[][..]));
    assert_eq!(registry.exports("inner"), Some(&["a".to_string()][..]));
    assert_eq!(registry.exports("missing"), None);
    assert_eq!(registry.len(), 2);
}

#[test]
fn qualified_names() {
    assert_eq!(qualified_name("math", "inc"), "math/inc");
}
