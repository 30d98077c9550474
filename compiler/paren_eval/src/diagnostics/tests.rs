use super::*;
use crate::errors::{runtime_error, EvalErrorKind};
use paren_ir::TokenKind;
use pretty_assertions::assert_eq;

fn frame(name: &str, line: u32) -> CallFrame {
    CallFrame::new(
        name,
        Token::new(TokenKind::Symbol, name, line, 2, 1),
        Rc::new(SourceFile::anonymous("")),
    )
}

#[test]
fn limit_admits_exactly_max_depth_frames() {
    let mut stack = CallStack::new(2);
    assert!(stack.push(frame("a", 1)).is_ok());
    assert!(stack.push(frame("b", 2)).is_ok());
    let err = stack.push(frame("c", 3));
    assert!(matches!(
        err.map_err(|e| e.kind),
        Err(EvalErrorKind::StackOverflow { limit: 2 })
    ));
    assert_eq!(stack.depth(), 2);
}

#[test]
fn pop_restores_depth() {
    let mut stack = CallStack::new(4);
    assert!(stack.push(frame("a", 1)).is_ok());
    assert!(stack.push(frame("b", 2)).is_ok());
    stack.pop();
    assert_eq!(stack.current_frame().map(|f| f.name.as_str()), Some("a"));
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn capture_is_innermost_first() {
    let mut stack = CallStack::new(4);
    assert!(stack.push(frame("outer", 1)).is_ok());
    assert!(stack.push(frame("inner", 5)).is_ok());
    let names: Vec<String> = stack.capture().into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["inner".to_string(), "outer".to_string()]);
}

#[test]
fn attach_backtrace_skips_empty_stack() {
    let stack = CallStack::new(4);
    let err = stack.attach_backtrace(runtime_error("x"));
    assert!(err.trace.is_empty());
}

#[test]
fn attach_backtrace_keeps_existing_trace() {
    let mut stack = CallStack::new(4);
    assert!(stack.push(frame("outer", 1)).is_ok());
    let inner = runtime_error("x").or_backtrace(vec![frame("inner", 3), frame("outer", 1)]);
    let err = stack.attach_backtrace(inner);
    assert_eq!(err.trace.len(), 2);
    assert_eq!(format!("{:?}", err.trace[0]), "inner (3) (<anonymous>)");
}
