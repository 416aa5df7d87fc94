//! Queries over a built scope tree: lookup, frequency order, dead bindings.

use squash_ast::{BinaryOp, Expr, Module, Pattern, Stmt, VarKind};
use squash_binder::{ScopeId, ScopeTree};

fn add(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOp::Add, right)
}

/// function f(x, y) {
///     var unused;
///     var z = x + x + y;
///     return z + x;
/// }
fn sample() -> Module {
    Module {
        body: vec![Stmt::func(
            "f",
            vec![Pattern::ident("x"), Pattern::ident("y")],
            vec![
                Stmt::var(VarKind::Var, "unused", None),
                Stmt::var(
                    VarKind::Var,
                    "z",
                    Some(add(add(Expr::ident("x"), Expr::ident("x")), Expr::ident("y"))),
                ),
                Stmt::ret(add(Expr::ident("z"), Expr::ident("x"))),
            ],
        )],
    }
}

#[test]
fn test_lookup_walks_enclosing_scopes() {
    let tree = ScopeTree::build(&sample()).unwrap();
    let func = ScopeId(1);
    assert_eq!(tree.lookup(func, "x").len(), 1);
    assert_eq!(tree.resolve(func, "f"), Some(ScopeId::ROOT));
    assert!(tree.lookup(func, "nothing").is_empty());
    assert!(tree.lookup(ScopeId::ROOT, "x").is_empty());
}

#[test]
fn test_bindings_by_frequency_descending() {
    let tree = ScopeTree::build(&sample()).unwrap();
    let order = tree.all_bindings_by_frequency_descending();
    let func = ScopeId(1);
    assert_eq!(
        order,
        vec![
            (func, "x"),
            (func, "y"),
            (func, "z"),
            (ScopeId::ROOT, "f"),
            (func, "this"),
            (func, "arguments"),
            (func, "unused"),
        ]
    );
}

#[test]
fn test_dead_binding_detection() {
    let tree = ScopeTree::build(&sample()).unwrap();
    let func = ScopeId(1);
    assert!(tree.is_dead(func, "unused"));
    assert!(!tree.is_dead(func, "z"));
    // Implicit bindings are never dead.
    assert!(!tree.is_dead(func, "this"));
    assert!(!tree.is_dead(func, "arguments"));
    assert!(tree.is_function_nested(func));
    assert!(!tree.is_function_nested(ScopeId::ROOT));
}

#[test]
fn test_name_in_chain_covers_descendants() {
    let tree = ScopeTree::build(&sample()).unwrap();
    assert!(tree.is_name_in_chain(ScopeId::ROOT, "z"));
    assert!(tree.is_name_in_chain(ScopeId(1), "f"));
    assert!(!tree.is_name_in_chain(ScopeId(1), "q"));
}

#[test]
fn test_declares_name_searches_every_scope() {
    let tree = ScopeTree::build(&sample()).unwrap();
    assert!(tree.declares_name("unused"));
    assert!(tree.declares_name("f"));
    assert!(!tree.declares_name("undefined"));
}
