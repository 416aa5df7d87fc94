use super::*;
use crate::node::{Arrow, ArrowBody, ArrowParams, BinaryOp, Class, ClassMember, Pattern, PropKey};

fn this_member(prop: &str) -> Expr {
    Expr::member(Expr::This, prop)
}

#[test]
fn test_receiver_usage_finds_this_in_body() {
    let func = Function {
        body: vec![Stmt::ret(this_member("x"))],
        ..Function::default()
    };
    let usage = receiver_usage(&func);
    assert!(usage.this);
    assert!(!usage.arguments);
    assert!(usage.any());
}

#[test]
fn test_receiver_usage_skips_nested_functions() {
    let inner = Expr::func(
        vec![],
        vec![Stmt::expr(Expr::call(Expr::ident("arguments"), vec![]))],
    );
    let func = Function {
        body: vec![Stmt::ret(inner)],
        ..Function::default()
    };
    assert!(!receiver_usage(&func).any());
}

#[test]
fn test_receiver_usage_descends_into_arrows() {
    let arrow = Expr::Arrow(Box::new(Arrow {
        params: ArrowParams::List(vec![]),
        body: ArrowBody::Expr(Box::new(Expr::ident("arguments"))),
        is_async: false,
    }));
    let func = Function {
        body: vec![Stmt::ret(arrow)],
        ..Function::default()
    };
    assert!(receiver_usage(&func).arguments);
}

#[test]
fn test_receiver_usage_checks_parameter_defaults() {
    let func = Function {
        params: vec![Pattern::ident("a").with_default(Expr::NewTarget)],
        body: vec![],
        ..Function::default()
    };
    assert!(receiver_usage(&func).new_target);
}

#[test]
fn test_class_field_initializer_has_own_this() {
    let class = Class {
        name: None,
        super_class: None,
        members: vec![ClassMember::Field {
            key: PropKey::Ident("x".into()),
            is_static: false,
            value: Some(Expr::This),
        }],
    };
    let func = Function {
        body: vec![Stmt::expr(Expr::Class(Box::new(class)))],
        ..Function::default()
    };
    assert!(!receiver_usage(&func).this);
}

#[test]
fn test_receiver_usage_finds_arguments() {
    let func = Function {
        body: vec![Stmt::expr(Expr::member(Expr::ident("arguments"), "length"))],
        ..Function::default()
    };
    let usage = receiver_usage(&func);
    assert!(usage.arguments);
    assert!(!usage.this);
}

#[test]
fn test_function_references_name() {
    let func = Function {
        name: Some("f".into()),
        body: vec![Stmt::ret(Expr::call(Expr::ident("f"), vec![]))],
        ..Function::default()
    };
    assert!(function_references_name(&func, "f"));
    assert!(!function_references_name(&func, "g"));
}

#[test]
fn test_hoistable_declarations() {
    assert!(is_hoistable_declaration(&Stmt::var(VarKind::Var, "m", None)));
    assert!(is_hoistable_declaration(&Stmt::func("g", vec![], vec![])));
    assert!(!is_hoistable_declaration(&Stmt::expr(Expr::ident("a"))));

    // A `var` inside a nested block still hoists to the function.
    let nested = Stmt::if_else(
        Expr::ident("a"),
        Stmt::block(vec![Stmt::var(VarKind::Var, "m", None)]),
        None,
    );
    assert!(is_hoistable_declaration(&nested));

    // A `let` inside a nested block does not.
    let nested_let = Stmt::block(vec![Stmt::var(VarKind::Let, "m", None)]);
    assert!(!is_hoistable_declaration(&nested_let));

    // Nor does a `var` inside a nested function body.
    let in_function = Stmt::expr(Expr::func(vec![], vec![Stmt::var(VarKind::Var, "m", None)]));
    assert!(!is_hoistable_declaration(&in_function));
}

#[test]
fn test_leftmost_primary_walks_the_left_edge() {
    // ({}).x + 1
    let expr = Expr::binary(
        Expr::member(Expr::Object(vec![]), "x"),
        BinaryOp::Add,
        Expr::num("1"),
    );
    assert_eq!(leftmost_primary(&expr), &Expr::Object(vec![]));
    assert!(starts_with_statement_keyword_or_brace(&expr));

    // !{} starts with `!`
    let negated = Expr::unary(UnaryOp::Not, Expr::Object(vec![]));
    assert!(!starts_with_statement_keyword_or_brace(&negated));

    // function(){}()
    let iife = Expr::call(Expr::func(vec![], vec![]), vec![]);
    assert!(starts_with_statement_keyword_or_brace(&iife));
}

#[test]
fn test_side_effect_free() {
    assert!(is_side_effect_free(&Expr::num("1")));
    assert!(is_side_effect_free(&Expr::void_0()));
    assert!(is_side_effect_free(&Expr::func(vec![], vec![])));
    assert!(!is_side_effect_free(&Expr::ident("x")));
    // Reading `this` throws before `super()` in a derived constructor.
    assert!(!is_side_effect_free(&Expr::This));
    assert!(!is_side_effect_free(&Expr::call(Expr::ident("f"), vec![])));
    assert!(!is_side_effect_free(&Expr::member(Expr::ident("a"), "b")));
}
