use super::*;
use squash_ast::{Prop, VarKind};

/// Renames every occurrence that resolves to `(scope, from)`.
struct RenameOne {
    scope: ScopeId,
    from: &'static str,
    to: &'static str,
}

impl ScopeHooks for RenameOne {
    fn ident(&mut self, tree: &ScopeTree, scope: ScopeId, name: &mut String) {
        if name == self.from && tree.resolve(scope, name) == Some(self.scope) {
            *name = self.to.to_string();
        }
    }
}

#[derive(Default)]
struct ListScopes {
    seen: Vec<(ScopeId, usize)>,
}

impl ScopeHooks for ListScopes {
    fn stmts(&mut self, _tree: &ScopeTree, scope: ScopeId, stmts: &mut Vec<Stmt>) {
        self.seen.push((scope, stmts.len()));
    }
}

fn sample() -> Module {
    // var a = 1;
    // function f(a) { { let b = a; } return { a }; }
    Module {
        body: vec![
            Stmt::var(VarKind::Var, "a", Some(Expr::num("1"))),
            Stmt::func(
                "f",
                vec![Pattern::ident("a")],
                vec![
                    Stmt::block(vec![Stmt::var(VarKind::Let, "b", Some(Expr::ident("a")))]),
                    Stmt::ret(Expr::Object(vec![Prop::Shorthand("a".into())])),
                ],
            ),
        ],
    }
}

#[test]
fn test_rename_follows_resolution() {
    let mut m = sample();
    let tree = ScopeTree::build(&m).unwrap();
    let mut hooks = RenameOne {
        scope: ScopeId(1),
        from: "a",
        to: "z",
    };
    ScopeWalker::new(&tree, &mut hooks).walk_module(&mut m);

    // The module-level `a` is untouched.
    assert_eq!(
        m.body[0],
        Stmt::var(VarKind::Var, "a", Some(Expr::num("1")))
    );
    let Stmt::Function(func) = &m.body[1] else {
        panic!("expected function declaration");
    };
    assert_eq!(func.params, vec![Pattern::ident("z")]);
    assert_eq!(
        func.body[0],
        Stmt::block(vec![Stmt::var(VarKind::Let, "b", Some(Expr::ident("z")))])
    );
}

#[test]
fn test_renamed_shorthand_property_is_expanded() {
    let mut m = sample();
    let tree = ScopeTree::build(&m).unwrap();
    let mut hooks = RenameOne {
        scope: ScopeId(1),
        from: "a",
        to: "z",
    };
    ScopeWalker::new(&tree, &mut hooks).walk_module(&mut m);

    let Stmt::Function(func) = &m.body[1] else {
        panic!("expected function declaration");
    };
    assert_eq!(
        func.body[1],
        Stmt::ret(Expr::Object(vec![Prop::KeyValue {
            key: PropKey::Ident("a".into()),
            value: Expr::ident("z"),
        }]))
    );
}

#[test]
fn test_statement_lists_report_their_scope_after_children() {
    let mut m = sample();
    let tree = ScopeTree::build(&m).unwrap();
    let mut hooks = ListScopes::default();
    ScopeWalker::new(&tree, &mut hooks).walk_module(&mut m);

    // Innermost lists complete first.
    assert_eq!(
        hooks.seen,
        vec![(ScopeId(2), 1), (ScopeId(1), 2), (ScopeId::ROOT, 2)]
    );
}
