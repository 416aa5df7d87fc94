use super::*;
use squash_ast::{BinaryOp, VarKind};
use squash_printer::print_module;

fn run(options: OptionSet, body: Vec<Stmt>) -> String {
    let mut module = Module { body };
    Dispatcher::new(options, true).run(&mut module);
    print_module(&module)
}

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::call(Expr::ident(name), args)
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_boolean_and_undefined_literals() {
    let body = vec![
        Stmt::expr(Expr::assign(Expr::ident("x"), Expr::Bool(true))),
        Stmt::expr(Expr::assign(Expr::ident("y"), Expr::ident("undefined"))),
    ];
    assert_eq!(run(OptionSet::LITERALS, body), "x=!0,y=void 0;");
}

#[test]
fn test_undefined_targets_and_bound_undefined_are_kept() {
    let body = vec![Stmt::expr(Expr::assign(
        Expr::ident("undefined"),
        Expr::num("1"),
    ))];
    assert_eq!(run(OptionSet::LITERALS, body), "undefined=1;");

    let mut module = Module {
        body: vec![Stmt::expr(Expr::ident("undefined"))],
    };
    let rewrites = Dispatcher::new(OptionSet::LITERALS, false).run(&mut module);
    assert_eq!(rewrites, 0);
    assert_eq!(print_module(&module), "undefined;");
}

#[test]
fn test_literal_rewrites_are_wrapped_as_member_base() {
    let body = vec![Stmt::expr(Expr::call(
        Expr::member(Expr::Bool(true), "toString"),
        vec![],
    ))];
    assert_eq!(run(OptionSet::LITERALS, body), "(!0).toString();");
}

#[test]
fn test_numeric_property_keys_are_canonicalized() {
    let object = Expr::Object(vec![Prop::KeyValue {
        key: PropKey::Num("0x10".into()),
        value: Expr::num("1000"),
    }]);
    let body = vec![Stmt::expr(Expr::assign(Expr::ident("o"), object))];
    assert_eq!(run(OptionSet::LITERALS, body), "o={16:1e3};");
}

// =============================================================================
// Parentheses
// =============================================================================

#[test]
fn test_redundant_parens_are_removed() {
    let body = vec![
        Stmt::expr(Expr::ident("a").paren()),
        Stmt::expr(call("f", vec![Expr::ident("b").paren()])),
        Stmt::Return(vec![Expr::seq(vec![Expr::ident("c"), Expr::ident("d")])]),
    ];
    assert_eq!(run(OptionSet::UNWRAP_PARENS, body), "a,f(b);return c,d;");
}

#[test]
fn test_argument_sequences_are_not_spliced() {
    let body = vec![Stmt::expr(call(
        "f",
        vec![Expr::seq(vec![Expr::ident("a"), Expr::ident("b")])],
    ))];
    assert_eq!(run(OptionSet::UNWRAP_PARENS, body), "f((a,b));");
}

#[test]
fn test_needed_parens_are_kept() {
    let product = Expr::binary(
        Expr::binary(Expr::ident("a"), BinaryOp::Add, Expr::ident("b")).paren(),
        BinaryOp::Mul,
        Expr::ident("c"),
    );
    let body = vec![
        Stmt::expr(product),
        Stmt::expr(Expr::member(Expr::Object(vec![]).paren(), "x")),
    ];
    assert_eq!(run(OptionSet::UNWRAP_PARENS, body), "(a+b)*c,({}).x;");
}

#[test]
fn test_statement_start_object_keeps_parens() {
    let body = vec![Stmt::expr(Expr::Object(vec![]).paren())];
    assert_eq!(run(OptionSet::UNWRAP_PARENS, body), "({});");
}

#[test]
fn test_calls_in_new_callee_chain_keep_parens() {
    // new (a()).b()  is not  new a().b()
    let callee = Expr::member(Expr::call(Expr::ident("a"), vec![]).paren(), "b");
    let original = vec![Stmt::expr(Expr::new_expr(callee, Some(vec![])))];
    let mut module = Module {
        body: original.clone(),
    };
    Dispatcher::new(OptionSet::UNWRAP_PARENS, true).run(&mut module);
    assert_eq!(module.body, original);

    // new (a.b)()  is  new a.b()
    let mut module = Module {
        body: vec![Stmt::expr(Expr::new_expr(
            Expr::member(Expr::ident("a"), "b").paren(),
            Some(vec![]),
        ))],
    };
    Dispatcher::new(OptionSet::UNWRAP_PARENS, true).run(&mut module);
    assert_eq!(
        module.body,
        vec![Stmt::expr(Expr::new_expr(
            Expr::member(Expr::ident("a"), "b"),
            Some(vec![])
        ))]
    );
}

#[test]
fn test_for_initializer_parens_are_kept() {
    let init = Expr::binary(Expr::ident("a"), BinaryOp::In, Expr::ident("b")).paren();
    let stmt = Stmt::For {
        init: Some(ForInit::Var(VarDecl {
            kind: VarKind::Var,
            decls: vec![squash_ast::VarDeclarator {
                name: Pattern::ident("x"),
                init: Some(init),
            }],
        })),
        test: None,
        update: None,
        body: Box::new(Stmt::Empty),
    };
    assert_eq!(run(OptionSet::UNWRAP_PARENS, vec![stmt]), "for(var x=(a in b);;);");
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn test_function_expression_becomes_arrow() {
    let func = Expr::func(
        vec![Pattern::ident("a"), Pattern::ident("b")],
        vec![Stmt::ret(Expr::ident("a"))],
    );
    let body = vec![Stmt::expr(Expr::assign(Expr::ident("x"), func.clone()))];
    assert_eq!(
        run(OptionSet::FUNCTION_EXPRESSION_TO_ARROW_FUNC, body.clone()),
        "x=(a,b)=>{return a;};"
    );
    assert_eq!(
        run(
            OptionSet::FUNCTION_EXPRESSION_TO_ARROW_FUNC | OptionSet::ARROW_FN,
            body
        ),
        "x=(a,b)=>a;"
    );
}

#[test]
fn test_receiver_dependent_functions_stay() {
    let uses_this = Expr::func(vec![], vec![Stmt::ret(Expr::This)]);
    let uses_arguments = Expr::func(vec![], vec![Stmt::ret(Expr::ident("arguments"))]);
    let constructed = Expr::new_expr(Expr::func(vec![], vec![]), None);
    let body = vec![
        Stmt::expr(Expr::assign(Expr::ident("a"), uses_this)),
        Stmt::expr(Expr::assign(Expr::ident("b"), uses_arguments)),
        Stmt::expr(Expr::assign(Expr::ident("c"), constructed)),
    ];
    let mut module = Module { body: body.clone() };
    Dispatcher::new(OptionSet::FUNCTION_EXPRESSION_TO_ARROW_FUNC, true).run(&mut module);
    // Only normalization merged the statements.
    let merged: Vec<Expr> = body
        .into_iter()
        .flat_map(|stmt| match stmt {
            Stmt::Expr(list) => list,
            _ => Vec::new(),
        })
        .collect();
    assert_eq!(module.body, vec![Stmt::Expr(merged)]);
}

#[test]
fn test_expression_names_are_dropped_unless_referenced() {
    let unused = Expr::named_func("f", vec![], vec![Stmt::ret(Expr::num("1"))]);
    let recursive = Expr::named_func("g", vec![], vec![Stmt::ret(Expr::ident("g"))]);
    let body = vec![Stmt::Expr(vec![
        Expr::assign(Expr::ident("a"), unused),
        Expr::assign(Expr::ident("b"), recursive),
    ])];
    assert_eq!(
        run(
            OptionSet::REMOVE_EXPRESSION_NAMES
                | OptionSet::FUNCTION_EXPRESSION_TO_ARROW_FUNC
                | OptionSet::ARROW_FN,
            body
        ),
        "a=()=>1,b=function g(){return g;};"
    );
}

#[test]
fn test_arrow_shorthand_and_concise_body() {
    let arrow = Expr::arrow(vec![Pattern::ident("a")], vec![Stmt::ret(Expr::num("1"))]);
    assert_eq!(run(OptionSet::ARROW_FN, vec![Stmt::expr(arrow)]), "a=>1;");

    let two = Expr::arrow(
        vec![Pattern::ident("a")],
        vec![Stmt::expr(call("f", vec![])), Stmt::ret(Expr::ident("a"))],
    );
    assert_eq!(run(OptionSet::ARROW_FN, vec![Stmt::expr(two)]), "a=>(f(),a);");
}

#[test]
fn test_arrow_with_hoisted_declaration_is_unchanged() {
    let arrow = Expr::arrow(
        vec![Pattern::ident("a")],
        vec![
            Stmt::var(VarKind::Var, "m", None),
            Stmt::ret(Expr::num("1")),
        ],
    );
    assert_eq!(
        run(OptionSet::ARROW_FN, vec![Stmt::expr(arrow)]),
        "(a)=>{var m;return 1;};"
    );
}

#[test]
fn test_concise_object_body_is_wrapped() {
    let arrow = Expr::arrow(vec![], vec![Stmt::ret(Expr::Object(vec![]))]);
    assert_eq!(run(OptionSet::ARROW_FN, vec![Stmt::expr(arrow)]), "()=>({});");
}

#[test]
fn test_last_empty_return_is_removed() {
    let func = Stmt::func("f", vec![], vec![Stmt::expr(call("g", vec![])), Stmt::ret_void()]);
    assert_eq!(
        run(OptionSet::REMOVE_LAST_EMPTY_RETURN, vec![func]),
        "function f(){g();}"
    );
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_if_else_becomes_ternary() {
    let stmt = Stmt::if_else(
        Expr::ident("a"),
        Stmt::expr(Expr::ident("b")),
        Some(Stmt::expr(Expr::ident("c"))),
    );
    assert_eq!(run(OptionSet::IF_TO_CONDITIONAL, vec![stmt]), "a?b:c;");

    let returns = Stmt::if_else(
        Expr::ident("a"),
        Stmt::block(vec![Stmt::ret(Expr::ident("b"))]),
        Some(Stmt::block(vec![Stmt::ret(Expr::ident("c"))])),
    );
    let func = Stmt::func("f", vec![], vec![returns]);
    assert_eq!(
        run(OptionSet::IF_TO_CONDITIONAL, vec![func]),
        "function f(){return a?b:c;}"
    );
}

#[test]
fn test_if_without_else_is_kept() {
    let stmt = Stmt::if_else(Expr::ident("a"), Stmt::expr(Expr::ident("b")), None);
    assert_eq!(run(OptionSet::IF_TO_CONDITIONAL, vec![stmt]), "if(a)b;");
}

#[test]
fn test_nested_blocks_flatten() {
    let stmt = Stmt::While {
        test: vec![Expr::ident("x")],
        body: Box::new(Stmt::block(vec![Stmt::block(vec![Stmt::block(vec![
            Stmt::Continue(None),
        ])])])),
    };
    assert_eq!(
        run(OptionSet::BLOCKS_TO_STATEMENT, vec![stmt]),
        "while(x)continue;"
    );
}

#[test]
fn test_dangling_else_keeps_block() {
    let stmt = Stmt::if_else(
        Expr::ident("a"),
        Stmt::block(vec![Stmt::if_else(
            Expr::ident("b"),
            Stmt::expr(Expr::ident("c")),
            None,
        )]),
        Some(Stmt::expr(Expr::ident("d"))),
    );
    assert_eq!(
        run(OptionSet::BLOCKS_TO_STATEMENT, vec![stmt]),
        "if(a){if(b)c;}else d;"
    );
}

#[test]
fn test_debugger_is_removed() {
    let body = vec![
        Stmt::expr(Expr::ident("a")),
        Stmt::Debugger,
        Stmt::expr(Expr::ident("b")),
    ];
    assert_eq!(run(OptionSet::REMOVE_DEBUGGER, body.clone()), "a,b;");
    assert_eq!(run(OptionSet::empty(), body), "a;debugger;b;");
}

#[test]
fn test_expression_runs_fold_into_return() {
    let func = Stmt::func(
        "f",
        vec![],
        vec![Stmt::expr(call("g", vec![])), Stmt::ret(Expr::ident("x"))],
    );
    assert_eq!(
        run(OptionSet::COMBINE_EXPRESSION_RUNS, vec![func]),
        "function f(){return g(),x;}"
    );
}

#[test]
fn test_mutation_count_reaches_zero() {
    let body = vec![
        Stmt::Empty,
        Stmt::expr(Expr::ident("a").paren()),
        Stmt::if_else(
            Expr::ident("c"),
            Stmt::block(vec![Stmt::expr(Expr::Bool(false))]),
            Some(Stmt::expr(Expr::ident("d"))),
        ),
    ];
    let mut module = Module { body };
    let first = Dispatcher::new(OptionSet::all(), true).run(&mut module);
    assert!(first > 0);
    let second = Dispatcher::new(OptionSet::all(), true).run(&mut module);
    assert_eq!(second, 0);
    assert_eq!(print_module(&module), "a,c?!1:d;");
}
