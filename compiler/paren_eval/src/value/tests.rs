use super::*;
use crate::CallContext;
use pretty_assertions::assert_eq;

fn noop(_: &mut CallContext<'_, '_>) -> EvalResult {
    Ok(Value::Nil)
}

#[test]
fn display_forms() {
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::list(vec![]).to_string(), "()");
}

#[test]
fn nested_list_display() {
    let value = Value::list(vec![
        Value::Int(1),
        Value::Int(2),
        Value::list(vec![Value::Int(3), Value::Int(4)]),
    ]);
    assert_eq!(value.to_string(), "(1 2 (3 4))");
}

#[test]
fn function_display() {
    let print = Value::Function(FunctionValue::builtin("print", noop));
    assert_eq!(print.to_string(), "fn print");
}

#[test]
fn truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Int(0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::list(vec![]).is_truthy());
}

#[test]
fn structural_equality() {
    assert_eq!(
        Value::list(vec![Value::Int(1), Value::string("a")]),
        Value::list(vec![Value::Int(1), Value::string("a")])
    );
    assert_ne!(Value::Int(1), Value::string("1"));
    assert_ne!(Value::Nil, Value::Bool(false));
}

#[test]
fn closures_compare_by_identity() {
    let make = || {
        FunctionValue::closure(Closure {
            name: Rc::from("f"),
            params: vec!["a".into()],
            body: Expr::Literal(paren_ir::LiteralExpr {
                token: paren_ir::Token::new(paren_ir::TokenKind::Nil, "nil", 1, 1, 3),
                value: Literal::Nil,
            }),
            scope: LocalScope::new(Scope::new()),
            source: Rc::new(SourceFile::default()),
        })
    };
    let f = make();
    assert_eq!(f, f.clone());
    assert_ne!(f, make());
    assert_eq!(format!("{f:?}"), "<fn f (a) nil>");
}

#[test]
fn literal_conversion() {
    assert_eq!(Value::from_literal(&Literal::Int(7)), Value::Int(7));
    assert_eq!(
        Value::from_literal(&Literal::Str("s".into())),
        Value::string("s")
    );
    assert_eq!(Value::from_literal(&Literal::Nil), Value::Nil);
}
