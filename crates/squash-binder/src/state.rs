//! Scope builder.
//!
//! A single read-only traversal that creates scopes in source order, records
//! every declaration in the scope it belongs to, and queues every identifier
//! reference. References are resolved once the traversal is complete, since
//! hoisting lets a reference precede its declaration.

use crate::error::ScopeBuildError;
use crate::scope::{Binding, BindingId, BindingKind, Scope, ScopeId, ScopeKind, ScopeTree};
use squash_ast::visit::{self, Visit};
use squash_ast::{
    Arrow, ArrowBody, ArrowParams, CatchClause, Class, ClassMember, Expr, ForHead, Function, Module,
    Stmt, VarDecl, VarKind,
};
use squash_common::is_valid_identifier_name;
use tracing::{debug, trace};

/// Binder state for one traversal.
pub(crate) struct BinderState {
    tree: ScopeTree,
    current_scope_id: ScopeId,
    /// Declaration context for binding identifiers met inside patterns
    declaring: Option<BindingKind>,
    /// `(scope, name)` of every reference, resolved after the traversal
    references: Vec<(ScopeId, String)>,
    error: Option<ScopeBuildError>,
}

impl BinderState {
    pub(crate) fn new() -> Self {
        Self {
            tree: ScopeTree::with_root(),
            current_scope_id: ScopeId::ROOT,
            declaring: None,
            references: Vec::new(),
            error: None,
        }
    }

    pub(crate) fn bind_module(mut self, module: &Module) -> Result<ScopeTree, ScopeBuildError> {
        self.visit_module(module);
        if let Some(err) = self.error {
            return Err(err);
        }
        self.resolve_references();
        debug!(
            scopes = self.tree.scope_count(),
            bindings = self.tree.binding_count(),
            free = self.tree.free_names.len(),
            "scope tree built"
        );
        Ok(self.tree)
    }

    fn record_error(&mut self, err: ScopeBuildError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    // =========================================================================
    // Scopes
    // =========================================================================

    fn enter_scope(&mut self, kind: ScopeKind) {
        let new_scope_id = ScopeId(self.tree.scopes.len() as u32);
        self.tree
            .scopes
            .push(Scope::new(self.current_scope_id, kind));
        self.tree.scopes[self.current_scope_id.index()]
            .children
            .push(new_scope_id);
        self.current_scope_id = new_scope_id;
    }

    fn exit_scope(&mut self) {
        let parent = self.tree.scope(self.current_scope_id).parent;
        if !parent.is_none() {
            self.current_scope_id = parent;
        }
    }

    /// Flag the current scope and all of its ancestors as dynamic.
    fn mark_dynamic(&mut self) {
        let chain: Vec<ScopeId> = self.tree.ancestors(self.current_scope_id).collect();
        for id in chain {
            self.tree.scopes[id.index()].dynamic = true;
        }
    }

    // =========================================================================
    // Declarations and references
    // =========================================================================

    fn declare(&mut self, scope: ScopeId, name: &str, kind: BindingKind) {
        if name.is_empty() {
            self.record_error(ScopeBuildError::EmptyBindingName);
            return;
        }
        if kind != BindingKind::Implicit && !is_valid_identifier_name(name) {
            self.record_error(ScopeBuildError::InvalidBindingName {
                name: name.to_string(),
            });
            return;
        }
        trace!(scope = scope.0, name, ?kind, "declare");
        let id = BindingId(self.tree.bindings.len() as u32);
        self.tree.bindings.push(Binding {
            name: name.to_string(),
            scope,
            kind,
            ref_count: 0,
        });
        self.tree.scopes[scope.index()]
            .bindings
            .entry(name.to_string())
            .or_default()
            .push(id);
    }

    fn declare_here(&mut self, name: &str, kind: BindingKind) {
        let scope = match kind {
            BindingKind::Var | BindingKind::Function => self.tree.var_scope(self.current_scope_id),
            _ => self.current_scope_id,
        };
        self.declare(scope, name, kind);
    }

    fn reference(&mut self, name: &str) {
        if name.is_empty() {
            self.record_error(ScopeBuildError::EmptyBindingName);
            return;
        }
        self.references
            .push((self.current_scope_id, name.to_string()));
    }

    fn resolve_references(&mut self) {
        for (scope, name) in std::mem::take(&mut self.references) {
            match self.tree.lookup(scope, &name).first().copied() {
                Some(id) => {
                    trace!(scope = scope.0, name = %name, binding = id.0, "resolved");
                    self.tree.bindings[id.index()].ref_count += 1;
                }
                None => {
                    self.tree.free_names.insert(name);
                }
            }
        }
    }

    fn with_declaring<F: FnOnce(&mut Self)>(&mut self, kind: Option<BindingKind>, f: F) {
        let saved = std::mem::replace(&mut self.declaring, kind);
        f(self);
        self.declaring = saved;
    }

    // =========================================================================
    // Scope-creating constructs
    // =========================================================================

    fn bind_function(&mut self, func: &Function, expression_name: bool) {
        self.enter_scope(ScopeKind::Function);
        self.declare(self.current_scope_id, "this", BindingKind::Implicit);
        self.declare(self.current_scope_id, "arguments", BindingKind::Implicit);
        if expression_name && let Some(name) = &func.name {
            self.declare(self.current_scope_id, name, BindingKind::ExpressionName);
        }
        self.with_declaring(Some(BindingKind::Param), |this| {
            for param in &func.params {
                this.visit_pattern(param);
            }
        });
        self.visit_stmts(&func.body);
        self.exit_scope();
    }

    fn bind_class(&mut self, class: &Class, expression_name: bool) {
        self.enter_scope(ScopeKind::Class);
        if expression_name && let Some(name) = &class.name {
            self.declare(self.current_scope_id, name, BindingKind::ExpressionName);
        }
        if let Some(super_class) = &class.super_class {
            self.visit_expr(super_class);
        }
        for member in &class.members {
            match member {
                ClassMember::Method { key, func, .. } => {
                    self.visit_prop_key(key);
                    self.bind_function(func, false);
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

const fn binding_kind(kind: VarKind) -> BindingKind {
    match kind {
        VarKind::Var => BindingKind::Var,
        VarKind::Let => BindingKind::Let,
        VarKind::Const => BindingKind::Const,
    }
}

impl Visit for BinderState {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(body) => {
                self.enter_scope(ScopeKind::Block);
                self.visit_stmts(body);
                self.exit_scope();
            }
            Stmt::For { .. } | Stmt::ForIn { .. } | Stmt::ForOf { .. } => {
                self.enter_scope(ScopeKind::Block);
                visit::walk_stmt(self, stmt);
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
                    if let Some(test) = &case.test {
                        for expr in test {
                            self.visit_expr(expr);
                        }
                    }
                    self.visit_stmts(&case.body);
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
                if let Some(name) = &func.name {
                    self.declare_here(name, BindingKind::Function);
                }
                self.bind_function(func, false);
            }
            Stmt::Class(class) => {
                if let Some(name) = &class.name {
                    self.declare_here(name, BindingKind::Class);
                }
                self.bind_class(class, false);
            }
            Stmt::With { .. } => {
                self.mark_dynamic();
                visit::walk_stmt(self, stmt);
            }
            _ => visit::walk_stmt(self, stmt),
        }
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) {
        let kind = binding_kind(decl.kind);
        for d in &decl.decls {
            self.with_declaring(Some(kind), |this| this.visit_pattern(&d.name));
            if let Some(init) = &d.init {
                self.visit_expr(init);
            }
        }
    }

    fn visit_catch(&mut self, clause: &CatchClause) {
        self.enter_scope(ScopeKind::Block);
        if let Some(param) = &clause.param {
            self.with_declaring(Some(BindingKind::CatchParam), |this| {
                this.visit_pattern(param);
            });
        }
        self.visit_stmts(&clause.body);
        self.exit_scope();
    }

    fn visit_for_head(&mut self, head: &ForHead) {
        match head {
            ForHead::Var(kind, pat) => {
                let kind = binding_kind(*kind);
                self.with_declaring(Some(kind), |this| this.visit_pattern(pat));
            }
            ForHead::Expr(expr) => self.visit_expr(expr),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        let saved = self.declaring.take();
        match expr {
            Expr::This => self.reference("this"),
            Expr::Function(func) => self.bind_function(func, true),
            Expr::Class(class) => self.bind_class(class, true),
            Expr::Call { callee, .. } if matches!(&**callee, Expr::Ident(name) if name == "eval") => {
                self.mark_dynamic();
                visit::walk_expr(self, expr);
            }
            _ => visit::walk_expr(self, expr),
        }
        self.declaring = saved;
    }

    fn visit_function(&mut self, func: &Function) {
        self.bind_function(func, false);
    }

    fn visit_arrow(&mut self, arrow: &Arrow) {
        self.enter_scope(ScopeKind::Arrow);
        self.with_declaring(Some(BindingKind::Param), |this| match &arrow.params {
            ArrowParams::Bare(name) => this.visit_binding_ident(name),
            ArrowParams::List(params) => {
                for param in params {
                    this.visit_pattern(param);
                }
            }
        });
        match &arrow.body {
            ArrowBody::Block(body) => self.visit_stmts(body),
            ArrowBody::Expr(body) => self.visit_expr(body),
        }
        self.exit_scope();
    }

    fn visit_class(&mut self, class: &Class) {
        self.bind_class(class, false);
    }

    fn visit_ident_ref(&mut self, name: &str) {
        self.reference(name);
    }

    fn visit_binding_ident(&mut self, name: &str) {
        match self.declaring {
            Some(kind) => self.declare_here(name, kind),
            None => self.reference(name),
        }
    }
}

impl ScopeTree {
    /// Build the scope tree of a module in one read-only traversal.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(module: &Module) -> Result<Self, ScopeBuildError> {
        BinderState::new().bind_module(module)
    }
}

#[cfg(test)]
#[path = "../tests/state.rs"]
mod tests;
