use super::*;
use paren_ir::TokenKind;
use pretty_assertions::assert_eq;

fn snippet(text: &str, column: u32, width: u32) -> SourceSnippet {
    SourceSnippet {
        file: "main.paren".into(),
        line: 1,
        column,
        width,
        text: text.into(),
    }
}

#[test]
fn headers() {
    let runtime = Diagnostic::new(ErrorKind::Runtime, "symbol `x` not found");
    assert_eq!(
        runtime.header(),
        "a runtime error has occurred: symbol `x` not found"
    );
    let syntax = Diagnostic::new(ErrorKind::Syntax, "unmatched parentheses");
    assert_eq!(
        syntax.header(),
        "a syntax error has occurred: unmatched parentheses"
    );
    let panic = Diagnostic::new(ErrorKind::Panic, "boom");
    assert_eq!(panic.header(), "panic! : boom");
}

#[test]
fn trace_kept_only_for_runtime_and_panic() {
    let entry = TraceEntry {
        name: "f".into(),
        line: 3,
        file: "main.paren".into(),
    };
    let runtime = Diagnostic::new(ErrorKind::Runtime, "x").with_trace(vec![entry.clone()]);
    assert_eq!(runtime.trace.len(), 1);
    let internal = Diagnostic::new(ErrorKind::Internal, "x").with_trace(vec![entry]);
    assert!(internal.trace.is_empty());
}

#[test]
fn underline_spans_token_width() {
    assert_eq!(snippet("(print x)", 8, 1).underline(), "       ^");
    assert_eq!(snippet("(print x)", 2, 5).underline(), " ^^^^^");
}

#[test]
fn underline_draws_at_least_one_caret() {
    assert_eq!(snippet("(a", 3, 0).underline(), "  ^");
}

#[test]
fn underline_keeps_leading_tabs() {
    assert_eq!(snippet("\t(bad)", 3, 3).underline(), "\t ^^^");
}

#[test]
fn snippet_from_token() {
    let source = SourceFile::new("lib.paren", "(a)\n  (b c)");
    let token = Token::new(TokenKind::Symbol, "c", 2, 6, 1);
    let found = SourceSnippet::from_token(&source, &token);
    assert_eq!(
        found,
        Some(SourceSnippet {
            file: "lib.paren".into(),
            line: 2,
            column: 6,
            width: 1,
            text: "  (b c)".into(),
        })
    );
}

#[test]
fn synthetic_token_has_no_snippet() {
    let source = SourceFile::anonymous("(a)");
    let token = Token::synthetic(TokenKind::StartList, "(");
    assert_eq!(SourceSnippet::from_token(&source, &token), None);
}
