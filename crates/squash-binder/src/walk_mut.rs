//! Scope-tracking mutable traversal.
//!
//! [`ScopeWalker`] re-enters the scopes of a [`ScopeTree`] while walking the
//! same module by exclusive reference, so rewrites can consult the scope an
//! identifier or statement list lives in. Scopes are entered in exactly the
//! order the builder created them, which lets the walker recover every
//! [`ScopeId`] by counting.
//!
//! Statement-list hooks run after the list's children have been walked, so
//! removing a statement never skips scopes the tree still expects.

use crate::scope::{ScopeId, ScopeKind, ScopeTree};
use squash_ast::visit::{self, VisitMut};
use squash_ast::{
    Arrow, ArrowBody, ArrowParams, CatchClause, Class, ClassMember, Expr, Function, Module,
    Pattern, PatternProp, Prop, PropKey, Stmt,
};

/// Callbacks invoked by [`ScopeWalker`].
pub trait ScopeHooks {
    /// Every identifier occurrence: references, binding positions, and the
    /// names of function and class declarations and expressions.
    fn ident(&mut self, _tree: &ScopeTree, _scope: ScopeId, _name: &mut String) {}

    /// Every statement list, after its statements have been walked.
    fn stmts(&mut self, _tree: &ScopeTree, _scope: ScopeId, _stmts: &mut Vec<Stmt>) {}
}

pub struct ScopeWalker<'a, H> {
    tree: &'a ScopeTree,
    hooks: &'a mut H,
    current_scope_id: ScopeId,
    next_scope: u32,
}

impl<'a, H: ScopeHooks> ScopeWalker<'a, H> {
    pub fn new(tree: &'a ScopeTree, hooks: &'a mut H) -> Self {
        Self {
            tree,
            hooks,
            current_scope_id: ScopeId::ROOT,
            next_scope: 1,
        }
    }

    /// Walk `module`, which must be the module `tree` was built from.
    pub fn walk_module(mut self, module: &mut Module) {
        self.visit_module(module);
        debug_assert_eq!(self.next_scope as usize, self.tree.scope_count());
    }

    fn enter_scope(&mut self, kind: ScopeKind) {
        let id = ScopeId(self.next_scope);
        self.next_scope += 1;
        debug_assert_eq!(self.tree.scope(id).kind, kind);
        debug_assert_eq!(self.tree.scope(id).parent, self.current_scope_id);
        self.current_scope_id = id;
    }

    fn exit_scope(&mut self) {
        let parent = self.tree.scope(self.current_scope_id).parent;
        if !parent.is_none() {
            self.current_scope_id = parent;
        }
    }

    fn ident(&mut self, name: &mut String) {
        self.hooks.ident(self.tree, self.current_scope_id, name);
    }

    fn walk_function(&mut self, func: &mut Function, expression_name: bool) {
        self.enter_scope(ScopeKind::Function);
        if expression_name && let Some(name) = &mut func.name {
            self.hooks.ident(self.tree, self.current_scope_id, name);
        }
        for param in &mut func.params {
            self.visit_pattern(param);
        }
        self.visit_stmts(&mut func.body);
        self.exit_scope();
    }

    fn walk_class(&mut self, class: &mut Class, expression_name: bool) {
        self.enter_scope(ScopeKind::Class);
        if expression_name && let Some(name) = &mut class.name {
            self.hooks.ident(self.tree, self.current_scope_id, name);
        }
        if let Some(super_class) = &mut class.super_class {
            self.visit_expr(super_class);
        }
        for member in &mut class.members {
            match member {
                ClassMember::Method { key, func, .. } => {
                    self.visit_prop_key(key);
                    self.walk_function(func, false);
                }
                ClassMember::Field { key, value, .. } => {
                    self.visit_prop_key(key);
                    if let Some(value) = value {
                        self.visit_expr(value);
                    }
                }
                ClassMember::StaticBlock(body) => {
                    self.enter_scope(ScopeKind::StaticBlock);
                    self.visit_stmts(body);
                    self.exit_scope();
                }
            }
        }
        self.exit_scope();
    }
}

impl<H: ScopeHooks> VisitMut for ScopeWalker<'_, H> {
    fn visit_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        visit::walk_stmts_mut(self, stmts);
        self.hooks.stmts(self.tree, self.current_scope_id, stmts);
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Block(body) => {
                self.enter_scope(ScopeKind::Block);
                self.visit_stmts(body);
                self.exit_scope();
            }
            Stmt::For { .. } | Stmt::ForIn { .. } | Stmt::ForOf { .. } => {
                self.enter_scope(ScopeKind::Block);
                visit::walk_stmt_mut(self, stmt);
                self.exit_scope();
            }
            Stmt::Switch {
                discriminant,
                cases,
            } => {
                for expr in discriminant {
                    self.visit_expr(expr);
                }
                self.enter_scope(ScopeKind::Block);
                for case in cases {
                    if let Some(test) = &mut case.test {
                        for expr in test {
                            self.visit_expr(expr);
                        }
                    }
                    self.visit_stmts(&mut case.body);
                }
                self.exit_scope();
            }
            Stmt::Try {
                block,
                handler,
                finalizer,
            } => {
                self.enter_scope(ScopeKind::Block);
                self.visit_stmts(block);
                self.exit_scope();
                if let Some(handler) = handler {
                    self.visit_catch(handler);
                }
                if let Some(finalizer) = finalizer {
                    self.enter_scope(ScopeKind::Block);
                    self.visit_stmts(finalizer);
                    self.exit_scope();
                }
            }
            Stmt::Function(func) => {
                if let Some(name) = &mut func.name {
                    self.ident(name);
                }
                self.walk_function(func, false);
            }
            Stmt::Class(class) => {
                if let Some(name) = &mut class.name {
                    self.ident(name);
                }
                self.walk_class(class, false);
            }
            _ => visit::walk_stmt_mut(self, stmt),
        }
    }

    fn visit_catch(&mut self, clause: &mut CatchClause) {
        self.enter_scope(ScopeKind::Block);
        if let Some(param) = &mut clause.param {
            self.visit_pattern(param);
        }
        self.visit_stmts(&mut clause.body);
        self.exit_scope();
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Function(func) => self.walk_function(func, true),
            Expr::Class(class) => self.walk_class(class, true),
            _ => visit::walk_expr_mut(self, expr),
        }
    }

    fn visit_function(&mut self, func: &mut Function) {
        self.walk_function(func, false);
    }

    fn visit_arrow(&mut self, arrow: &mut Arrow) {
        self.enter_scope(ScopeKind::Arrow);
        match &mut arrow.params {
            ArrowParams::Bare(name) => self.ident(name),
            ArrowParams::List(params) => {
                for param in params {
                    self.visit_pattern(param);
                }
            }
        }
        match &mut arrow.body {
            ArrowBody::Block(body) => self.visit_stmts(body),
            ArrowBody::Expr(body) => self.visit_expr(body),
        }
        self.exit_scope();
    }

    fn visit_class(&mut self, class: &mut Class) {
        self.walk_class(class, false);
    }

    fn visit_prop(&mut self, prop: &mut Prop) {
        if let Prop::Shorthand(name) = prop {
            let mut renamed = name.clone();
            self.ident(&mut renamed);
            if renamed != *name {
                *prop = Prop::KeyValue {
                    key: PropKey::Ident(std::mem::take(name)),
                    value: Expr::Ident(renamed),
                };
            }
            return;
        }
        visit::walk_prop_mut(self, prop);
    }

    fn visit_pattern_prop(&mut self, prop: &mut PatternProp) {
        if let PatternProp::Shorthand { name, default } = prop {
            let mut renamed = name.clone();
            self.ident(&mut renamed);
            if let Some(default) = default {
                self.visit_expr(default);
            }
            if renamed != *name {
                let target = Pattern::Ident(renamed);
                let value = match default.take() {
                    Some(default) => Pattern::Assign {
                        target: Box::new(target),
                        default,
                    },
                    None => target,
                };
                *prop = PatternProp::KeyValue {
                    key: PropKey::Ident(std::mem::take(name)),
                    value,
                };
            }
            return;
        }
        visit::walk_pattern_prop_mut(self, prop);
    }

    fn visit_ident_ref(&mut self, name: &mut String) {
        self.ident(name);
    }

    fn visit_binding_ident(&mut self, name: &mut String) {
        self.ident(name);
    }
}

#[cfg(test)]
#[path = "../tests/walk_mut.rs"]
mod tests;
