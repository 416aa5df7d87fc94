//! End-to-end engine rounds, checked through the printer.

use squash_ast::{Expr, Module, Pattern, Prop, PropKey, Stmt, VarKind};
use squash_optimizer::{OptionSet, RoundStats, ScopeBuildError, optimize, optimize_to_fixpoint};
use squash_printer::print_module;

fn round(options: OptionSet, body: Vec<Stmt>) -> String {
    let mut module = Module { body };
    optimize(&mut module, options).unwrap();
    print_module(&module)
}

#[test]
fn test_numeric_literals() {
    let body = vec![Stmt::Expr(vec![
        Expr::num("1000000000000"),
        Expr::num("0.00123400"),
        Expr::num("999999999999"),
    ])];
    assert_eq!(
        round(OptionSet::LITERALS, body),
        "1e12,1234e-6,999999999999;"
    );
}

#[test]
fn test_property_keys() {
    let object = Expr::Object(vec![
        Prop::KeyValue {
            key: PropKey::Str("Infinity".into()),
            value: Expr::num("1"),
        },
        Prop::KeyValue {
            key: PropKey::Computed(Box::new(Expr::str("Infinity"))),
            value: Expr::num("2"),
        },
        Prop::KeyValue {
            key: PropKey::Str("&".into()),
            value: Expr::num("3"),
        },
    ]);
    let body = vec![Stmt::expr(Expr::assign(Expr::ident("o"), object))];
    assert_eq!(
        round(OptionSet::KEYS, body),
        r#"o={Infinity:1,Infinity:2,"&":3};"#
    );
}

#[test]
fn test_arrow_shorthand() {
    let arrow = Expr::arrow(vec![Pattern::ident("a")], vec![Stmt::ret(Expr::num("1"))]);
    assert_eq!(round(OptionSet::ARROW_FN, vec![Stmt::expr(arrow)]), "a=>1;");

    let hoisting = Expr::arrow(
        vec![Pattern::ident("a")],
        vec![
            Stmt::var(VarKind::Var, "m", None),
            Stmt::ret(Expr::num("1")),
        ],
    );
    assert_eq!(
        round(OptionSet::ARROW_FN, vec![Stmt::expr(hoisting)]),
        "(a)=>{var m;return 1;};"
    );
}

#[test]
fn test_if_to_conditional() {
    let statement = Stmt::if_else(
        Expr::ident("a"),
        Stmt::expr(Expr::ident("b")),
        Some(Stmt::expr(Expr::ident("c"))),
    );
    assert_eq!(
        round(OptionSet::IF_TO_CONDITIONAL, vec![statement]),
        "a?b:c;"
    );

    let returning = Stmt::if_else(
        Expr::ident("a"),
        Stmt::block(vec![Stmt::ret(Expr::ident("b"))]),
        Some(Stmt::block(vec![Stmt::ret(Expr::ident("c"))])),
    );
    assert_eq!(
        round(
            OptionSet::IF_TO_CONDITIONAL,
            vec![Stmt::func("f", vec![], vec![returning])]
        ),
        "function f(){return a?b:c;}"
    );
}

#[test]
fn test_nested_blocks_flatten() {
    let body = vec![Stmt::block(vec![Stmt::block(vec![Stmt::Continue(None)])])];
    assert_eq!(round(OptionSet::BLOCKS_TO_STATEMENT, body), "continue;");
}

#[test]
fn test_normalization_runs_without_options() {
    let body = vec![
        Stmt::Empty,
        Stmt::expr(Expr::ident("a")),
        Stmt::expr(Expr::ident("b")),
        Stmt::Empty,
        Stmt::Empty,
    ];
    let mut module = Module { body };
    let stats = optimize(&mut module, OptionSet::empty()).unwrap();
    assert_eq!(stats.rewrites, 4);
    assert_eq!(
        module.body,
        vec![Stmt::Expr(vec![Expr::ident("a"), Expr::ident("b")])]
    );
}

#[test]
fn test_all_passes_reach_a_fixpoint() {
    // var f = function (longParam) { if (longParam) { return true; } else { return undefined; } };
    let func = Expr::func(
        vec![Pattern::ident("longParam")],
        vec![Stmt::if_else(
            Expr::ident("longParam"),
            Stmt::block(vec![Stmt::ret(Expr::Bool(true))]),
            Some(Stmt::block(vec![Stmt::ret(Expr::ident("undefined"))])),
        )],
    );
    let mut module = Module {
        body: vec![Stmt::var(VarKind::Var, "f", Some(func))],
    };
    let rounds = optimize_to_fixpoint(&mut module, OptionSet::all()).unwrap();
    assert_eq!(print_module(&module), "var f=a=>a?!0:void 0;");
    assert!(rounds.len() >= 2);
    assert_eq!(rounds.last().map(RoundStats::mutations), Some(0));
    assert!(rounds[0].names_assigned > 0);

    let again = optimize_to_fixpoint(&mut module, OptionSet::all()).unwrap();
    assert_eq!(again, vec![RoundStats::default()]);
}

#[test]
fn test_dead_bindings_feed_renaming() {
    // function outer() { var unused = 0; var value = g(); return value; }
    let body = vec![Stmt::func(
        "outer",
        vec![],
        vec![
            Stmt::var(VarKind::Var, "unused", Some(Expr::num("0"))),
            Stmt::var(
                VarKind::Var,
                "value",
                Some(Expr::call(Expr::ident("g"), vec![])),
            ),
            Stmt::ret(Expr::ident("value")),
        ],
    )];
    let mut module = Module { body };
    let options = OptionSet::REMOVE_DEAD_BINDINGS | OptionSet::RENAME_IDENTIFIERS;
    let stats = optimize(&mut module, options).unwrap();
    assert_eq!(stats.bindings_removed, 1);
    assert_eq!(stats.names_assigned, 1);
    assert_eq!(print_module(&module), "function outer(){var a=g();return a;}");
}

#[test]
fn test_scope_errors_leave_the_tree_untouched() {
    let body = vec![
        Stmt::expr(Expr::Bool(true)),
        Stmt::var(VarKind::Var, "", None),
    ];
    let mut module = Module { body };
    let before = module.clone();
    let err = optimize(&mut module, OptionSet::all()).unwrap_err();
    assert_eq!(err, ScopeBuildError::EmptyBindingName);
    assert_eq!(module, before);
}
