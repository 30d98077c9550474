//! End-to-end tests: source text through the driver to output and reports.

use std::io::Write;
use std::sync::Arc;

use paren_diagnostic::{ColorMode, ErrorSink};
use paren_eval::{buffer_handler, ErrorKind, Value};
use paren_ir::SourceFile;
use parenc::{execute, Options};
use pretty_assertions::assert_eq;

struct Outcome {
    result: Result<Value, paren_eval::EvalError>,
    output: String,
    report: String,
}

fn run_file(file: SourceFile, options: &Options) -> Outcome {
    let sink = ErrorSink::buffer();
    let output = buffer_handler();
    let result = execute(file, options, &sink, Arc::clone(&output));
    Outcome {
        result,
        output: output.output(),
        report: sink.contents(),
    }
}

fn run(source: &str) -> Outcome {
    run_file(SourceFile::anonymous(source), &Options::default())
}

fn write_file(dir: &tempfile::TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    let written = std::fs::File::create(&path).and_then(|mut file| file.write_all(text.as_bytes()));
    if let Err(err) = written {
        panic!("could not write {}: {err}", path.display());
    }
    path.to_string_lossy().into_owned()
}

fn temp_dir() -> tempfile::TempDir {
    match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => panic!("could not create temp dir: {err}"),
    }
}

#[test]
fn successful_program() {
    let outcome = run("(fun \"f\" (a) (+ a 1))\n(print (f 41))\n(1 2 (3 4))");
    assert_eq!(outcome.output, "42\n");
    assert_eq!(outcome.report, "");
    let value = outcome.result.map(|v| v.to_string());
    assert_eq!(value.ok().as_deref(), Some("(1 2 (3 4))"));
}

#[test]
fn nil_result_prints_nil() {
    let outcome = run("(print \"x\")");
    assert_eq!(outcome.result.map(|v| v.to_string()).ok().as_deref(), Some("nil"));
}

#[test]
fn panic_report_with_trace() {
    let outcome = run("(fun \"inner\" () (panic \"boom\"))\n(fun \"outer\" () (inner))\n(outer)");
    assert!(outcome.result.is_err());
    assert_eq!(
        outcome.report,
        "panic! : boom\n\
         (fun \"inner\" () (panic \"boom\"))\n\
         \x20                ^^^^^\n\
         (1) (<anonymous>)\n\
         stack::\n\
         \x20 => panic (1) (<anonymous>)\n\
         \x20 => inner (2) (<anonymous>)\n\
         \x20 => outer (3) (<anonymous>)\n"
    );
}

#[test]
fn unbound_symbol_report() {
    let outcome = run("(print x)");
    assert_eq!(
        outcome.report,
        "a runtime error has occurred: symbol `x` not found\n\
         (print x)\n\
         \x20      ^\n\
         (1) (<anonymous>)\n\
         stack::\n\
         \x20 => print (1) (<anonymous>)\n"
    );
}

#[test]
fn syntax_error_report_has_no_trace() {
    let outcome = run("(print 1)\n(print \"abc)");
    let err = match outcome.result {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => err,
    };
    assert_eq!(err.error_kind(), ErrorKind::Syntax);
    assert_eq!(outcome.output, "");
    assert_eq!(
        outcome.report,
        "a syntax error has occurred: unterminated string literal\n\
         (print \"abc)\n\
         \x20      ^^^^^\n\
         (2) (<anonymous>)\n"
    );
}

#[test]
fn unmatched_parentheses_report() {
    let outcome = run("(print 1)\n(print (+ 1 2)");
    assert_eq!(
        outcome.report,
        "a syntax error has occurred: unmatched parentheses\n\
         (print (+ 1 2)\n\
         ^\n\
         (2) (<anonymous>)\n"
    );
}

#[test]
fn stack_limit_comes_from_options() {
    let source = "(fun \"count\" (n) (if (eq n 10) n (count (+ n 1)))) (count 0)";
    let roomy = run_file(SourceFile::anonymous(source), &Options::default());
    assert!(matches!(roomy.result, Ok(Value::Int(10))));

    let tight = Options {
        max_stack_size: 8,
        ..Options::default()
    };
    let outcome = run_file(SourceFile::anonymous(source), &tight);
    assert!(outcome
        .report
        .starts_with("a runtime error has occurred: stack overflow\n"));
}

#[test]
fn strict_mode_comes_from_options() {
    let source = "(fun \"f\" (a b) (+ a 1)) (f 1)";
    let lax = run(source);
    assert!(matches!(lax.result, Ok(Value::Int(2))));

    let strict = Options {
        strict: true,
        ..Options::default()
    };
    let outcome = run_file(SourceFile::anonymous(source), &strict);
    assert!(outcome
        .report
        .starts_with("a runtime error has occurred: argument `b` missing from args list\n"));
}

#[test]
fn zero_stack_size_is_an_internal_error() {
    let options = Options {
        max_stack_size: 0,
        color: ColorMode::Never,
        ..Options::default()
    };
    let outcome = run_file(SourceFile::anonymous("(print 1)"), &options);
    assert_eq!(
        outcome.report,
        "a internal error has occurred: max stack size must be at least 1\n"
    );
}

#[test]
fn import_shares_globals_and_restores_file() {
    let dir = temp_dir();
    let lib = write_file(&dir, "lib.paren", "(fun \"double\" (x) (+ x x))");
    let main_text = format!("(import \"{lib}\")\n(print (double 21))\n(panic \"after\")");
    let main = write_file(&dir, "main.paren", &main_text);

    let outcome = run_file(SourceFile::new(main.clone(), main_text), &Options::default());
    assert_eq!(outcome.output, "42\n");
    assert!(outcome.report.contains(&format!("(3) ({main})")));
}

#[test]
fn errors_inside_imports_name_the_imported_file() {
    let dir = temp_dir();
    let lib = write_file(&dir, "lib.paren", "(fun \"boom\" () (panic \"bad\"))");
    let outcome = run(&format!("(import \"{lib}\")\n(boom)"));
    assert_eq!(
        outcome.report,
        format!(
            "panic! : bad\n\
             (fun \"boom\" () (panic \"bad\"))\n\
             \x20               ^^^^^\n\
             (1) ({lib})\n\
             stack::\n\
             \x20 => panic (1) ({lib})\n\
             \x20 => boom (2) (<anonymous>)\n"
        )
    );
}

#[test]
fn modules_through_the_driver() {
    let outcome = run("(module math ((fun \"inc\" (x) (+ x 1)) (export inc)))\n(print (math/inc 1))");
    assert_eq!(outcome.output, "2\n");
    assert_eq!(outcome.report, "");
}
