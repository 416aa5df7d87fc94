use super::*;
use squash_ast::UnaryOp;

fn add(left: Expr, right: Expr) -> Expr {
    Expr::binary(left, BinaryOp::Add, right)
}

#[test]
fn test_levels_follow_grammar_nesting() {
    assert!(Level::Sequence < Level::Assign);
    assert!(Level::Coalesce < Level::LogicalOr);
    assert!(Level::Additive < Level::Multiplicative);
    assert!(Level::Unary < Level::Update);
    assert!(Level::Call < Level::Member);
    assert_eq!(Level::Additive.next(), Level::Multiplicative);

    assert_eq!(precedence_level(&Expr::ident("a")), Level::Primary);
    assert_eq!(precedence_level(&add(Expr::ident("a"), Expr::ident("b"))), Level::Additive);
    assert_eq!(precedence_level(&Expr::void_0()), Level::Unary);
    assert_eq!(
        precedence_level(&Expr::member(Expr::call(Expr::ident("f"), vec![]), "x")),
        Level::Call
    );
    assert_eq!(
        precedence_level(&Expr::new_expr(Expr::ident("C"), None)),
        Level::New
    );
    assert_eq!(
        precedence_level(&Expr::new_expr(Expr::ident("C"), Some(vec![]))),
        Level::Member
    );
}

#[test]
fn test_binary_operand_slots() {
    let (left, right) = Slot::binary_operands(BinaryOp::Sub);
    let sum = add(Expr::ident("a"), Expr::ident("b"));
    // (a + b) - c is the natural parse, a - (b + c) is not.
    assert!(fits(&sum, left));
    assert!(!fits(&sum, right));

    let (base, exponent) = Slot::binary_operands(BinaryOp::Exp);
    let neg = Expr::unary(UnaryOp::Minus, Expr::ident("a"));
    assert!(!fits(&neg, base));
    let pow = Expr::binary(Expr::ident("a"), BinaryOp::Exp, Expr::ident("b"));
    assert!(!fits(&pow, base));
    assert!(fits(&pow, exponent));
}

#[test]
fn test_nullish_does_not_mix_with_logical_operators() {
    let (left, right) = Slot::binary_operands(BinaryOp::Nullish);
    let or = Expr::binary(Expr::ident("a"), BinaryOp::LogicalOr, Expr::ident("b"));
    let nullish = Expr::binary(Expr::ident("a"), BinaryOp::Nullish, Expr::ident("b"));
    assert!(!fits(&or, left));
    assert!(fits(&nullish, left));
    assert!(!fits(&nullish, right));
    assert!(fits(&Expr::ident("c"), right));
}

#[test]
fn test_literal_rewrites_need_parens_as_member_base() {
    let not_zero = Expr::unary(UnaryOp::Not, Expr::num("0"));
    assert!(needs_parens(&not_zero, Slot::chain_base(Level::Call)));
    assert!(!needs_parens(&not_zero, Slot::at(Level::Assign)));
    assert!(!needs_parens(&not_zero.paren(), Slot::chain_base(Level::Call)));
}

#[test]
fn test_new_callee_rejects_calls() {
    let slot = Slot::chain_base(Level::Member);
    let call_member = Expr::member(Expr::call(Expr::ident("a"), vec![]), "b");
    assert!(!can_unwrap_parens(&call_member, slot));
    assert!(can_unwrap_parens(&Expr::member(Expr::ident("a"), "b"), slot));
    assert!(!can_unwrap_parens(&Expr::new_expr(Expr::ident("A"), None), slot));
}

#[test]
fn test_optional_chain_parens_are_kept_in_chains() {
    let chain = Expr::Member {
        object: Box::new(Expr::ident("a")),
        prop: "b".into(),
        optional: true,
    };
    assert!(is_optional_chain(&chain));
    assert!(!can_unwrap_parens(&chain, Slot::chain_base(Level::Call)));
    assert!(can_unwrap_parens(&chain, Slot::at(Level::Assign)));
}

#[test]
fn test_statement_start_parens_are_kept() {
    let obj = Expr::member(Expr::Object(vec![]), "a");
    assert!(!can_unwrap_parens(&obj, Slot::leftmost(Level::Assign)));
    assert!(can_unwrap_parens(&obj, Slot::at(Level::Assign)));
    assert!(!can_unwrap_parens(&Expr::Object(vec![]), Slot::arrow_body()));
}

#[test]
fn test_unwrap_and_wrap_are_inverse() {
    let slot = Slot::at(Level::Multiplicative);
    let mut sum = add(Expr::ident("a"), Expr::ident("b"));
    assert!(parenthesize_for(&mut sum, slot));
    assert!(!parenthesize_for(&mut sum, slot));
    assert!(!unwrap_parens_in(&mut sum, slot));

    let mut single = Expr::ident("x").paren();
    assert!(unwrap_parens_in(&mut single, slot));
    assert_eq!(single, Expr::ident("x"));

    let mut seq = Expr::seq(vec![Expr::ident("x"), Expr::ident("y")]);
    assert!(!unwrap_parens_in(&mut seq, Slot::at(Level::Assign)));
}

#[test]
fn test_rewrap_wraps_the_leftmost_primary() {
    // {}.a = 1  ->  ({}).a = 1
    let mut expr = Expr::assign(Expr::member(Expr::Object(vec![]), "a"), Expr::num("1"));
    assert!(rewrap_if_ambiguous(&mut expr));
    assert_eq!(
        expr,
        Expr::assign(
            Expr::member(Expr::Object(vec![]).paren(), "a"),
            Expr::num("1")
        )
    );
    assert!(!rewrap_if_ambiguous(&mut expr));

    // function(){}() deep inside a binary left operand
    let mut expr = add(Expr::call(Expr::func(vec![], vec![]), vec![]), Expr::ident("b"));
    assert!(rewrap_if_ambiguous(&mut expr));
    assert!(matches!(
        squash_ast::syntax::leftmost_primary(&expr),
        Expr::Paren(_)
    ));

    let mut body = Expr::member(Expr::Object(vec![]), "a");
    assert!(rewrap_arrow_body(&mut body));
    let mut body = Expr::func(vec![], vec![]);
    assert!(!rewrap_arrow_body(&mut body));
}

#[test]
fn test_destructuring_assignment_is_wrapped_whole() {
    let pattern = Expr::Object(vec![squash_ast::Prop::Shorthand("a".into())]);
    let mut expr = Expr::assign(pattern.clone(), Expr::ident("b"));
    assert!(rewrap_if_ambiguous(&mut expr));
    assert_eq!(expr, Expr::assign(pattern.clone(), Expr::ident("b")).paren());

    let mut body = Expr::assign(pattern.clone(), Expr::ident("b"));
    assert!(rewrap_arrow_body(&mut body));
    assert!(matches!(body, Expr::Paren(_)));
}

#[test]
fn test_leftmost_primary_mut_descends_to_the_innermost_base() {
    // a.b[c]++ + d  ->  a
    let mut expr = add(
        Expr::Update {
            op: squash_ast::UpdateOp::Incr,
            prefix: false,
            arg: Box::new(Expr::index(Expr::member(Expr::ident("a"), "b"), Expr::ident("c"))),
        },
        Expr::ident("d"),
    );
    assert_eq!(*leftmost_primary_mut(&mut expr), Expr::ident("a"));

    // {a} = b stops at the assignment itself
    let pattern = Expr::Object(vec![squash_ast::Prop::Shorthand("a".into())]);
    let mut expr = Expr::assign(pattern.clone(), Expr::ident("b"));
    let before = expr.clone();
    assert_eq!(*leftmost_primary_mut(&mut expr), before);
}
