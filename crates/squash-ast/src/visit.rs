//! Tree visitors.
//!
//! [`Visit`] walks a tree by shared reference and [`VisitMut`] by exclusive
//! reference. Both traverse children in source order and share the same set
//! of hooks, so two visitors that override the same hooks observe nodes in
//! the same sequence. Each hook defaults to the matching `walk_*` function;
//! an override that still wants the children visited calls it explicitly.
//!
//! Identifier occurrences are reported through two hooks: references
//! (`visit_ident_ref`) and binding positions inside patterns
//! (`visit_binding_ident`). Function and class names, labels, and member
//! property names are not identifier occurrences of either kind; visitors
//! that care about them read them in `visit_function` / `visit_class`.

use crate::node::{
    Arg, ArrayElem, Arrow, ArrowBody, ArrowParams, CatchClause, Class, ClassMember, Expr,
    ForHead, ForInit, Function, Module, Pattern, PatternProp, Prop, PropKey, Stmt, SwitchCase,
    Template, VarDecl,
};

// =============================================================================
// Shared-reference visitor
// =============================================================================

pub trait Visit {
    fn visit_module(&mut self, module: &Module) {
        self.visit_stmts(&module.body);
    }
    fn visit_stmts(&mut self, stmts: &[Stmt]) {
        walk_stmts(self, stmts);
    }
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_var_decl(&mut self, decl: &VarDecl) {
        walk_var_decl(self, decl);
    }
    fn visit_catch(&mut self, clause: &CatchClause) {
        walk_catch(self, clause);
    }
    fn visit_for_head(&mut self, head: &ForHead) {
        walk_for_head(self, head);
    }
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
    fn visit_function(&mut self, func: &Function) {
        walk_function(self, func);
    }
    fn visit_arrow(&mut self, arrow: &Arrow) {
        walk_arrow(self, arrow);
    }
    fn visit_class(&mut self, class: &Class) {
        walk_class(self, class);
    }
    fn visit_prop(&mut self, prop: &Prop) {
        walk_prop(self, prop);
    }
    fn visit_prop_key(&mut self, key: &PropKey) {
        walk_prop_key(self, key);
    }
    fn visit_pattern(&mut self, pat: &Pattern) {
        walk_pattern(self, pat);
    }
    fn visit_pattern_prop(&mut self, prop: &PatternProp) {
        walk_pattern_prop(self, prop);
    }
    fn visit_ident_ref(&mut self, _name: &str) {}
    fn visit_binding_ident(&mut self, _name: &str) {}
}

pub fn walk_stmts<V: Visit + ?Sized>(v: &mut V, stmts: &[Stmt]) {
    for stmt in stmts {
        v.visit_stmt(stmt);
    }
}

fn visit_exprs<V: Visit + ?Sized>(v: &mut V, exprs: &[Expr]) {
    for expr in exprs {
        v.visit_expr(expr);
    }
}

pub fn walk_stmt<V: Visit + ?Sized>(v: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Empty | Stmt::Debugger | Stmt::Break(_) | Stmt::Continue(_) => {}
        Stmt::Block(body) => v.visit_stmts(body),
        Stmt::Expr(exprs) | Stmt::Return(exprs) | Stmt::Throw(exprs) => visit_exprs(v, exprs),
        Stmt::Var(decl) => v.visit_var_decl(decl),
        Stmt::Function(func) => v.visit_function(func),
        Stmt::Class(class) => v.visit_class(class),
        Stmt::If { test, cons, alt } => {
            visit_exprs(v, test);
            v.visit_stmt(cons);
            if let Some(alt) = alt {
                v.visit_stmt(alt);
            }
        }
        Stmt::For {
            init,
            test,
            update,
            body,
        } => {
            match init {
                Some(ForInit::Var(decl)) => v.visit_var_decl(decl),
                Some(ForInit::Expr(exprs)) => visit_exprs(v, exprs),
                None => {}
            }
            if let Some(test) = test {
                visit_exprs(v, test);
            }
            if let Some(update) = update {
                visit_exprs(v, update);
            }
            v.visit_stmt(body);
        }
        Stmt::ForIn { left, right, body } => {
            v.visit_for_head(left);
            visit_exprs(v, right);
            v.visit_stmt(body);
        }
        Stmt::ForOf {
            left, right, body, ..
        } => {
            v.visit_for_head(left);
            v.visit_expr(right);
            v.visit_stmt(body);
        }
        Stmt::While { test, body } => {
            visit_exprs(v, test);
            v.visit_stmt(body);
        }
        Stmt::DoWhile { body, test } => {
            v.visit_stmt(body);
            visit_exprs(v, test);
        }
        Stmt::Labeled { body, .. } => v.visit_stmt(body),
        Stmt::Switch {
            discriminant,
            cases,
        } => {
            visit_exprs(v, discriminant);
            for SwitchCase { test, body } in cases {
                if let Some(test) = test {
                    visit_exprs(v, test);
                }
                v.visit_stmts(body);
            }
        }
        Stmt::Try {
            block,
            handler,
            finalizer,
        } => {
            v.visit_stmts(block);
            if let Some(handler) = handler {
                v.visit_catch(handler);
            }
            if let Some(finalizer) = finalizer {
                v.visit_stmts(finalizer);
            }
        }
        Stmt::With { object, body } => {
            visit_exprs(v, object);
            v.visit_stmt(body);
        }
    }
}

pub fn walk_for_head<V: Visit + ?Sized>(v: &mut V, head: &ForHead) {
    match head {
        ForHead::Var(_, pat) => v.visit_pattern(pat),
        ForHead::Expr(expr) => v.visit_expr(expr),
    }
}

pub fn walk_var_decl<V: Visit + ?Sized>(v: &mut V, decl: &VarDecl) {
    for d in &decl.decls {
        v.visit_pattern(&d.name);
        if let Some(init) = &d.init {
            v.visit_expr(init);
        }
    }
}

pub fn walk_catch<V: Visit + ?Sized>(v: &mut V, clause: &CatchClause) {
    if let Some(param) = &clause.param {
        v.visit_pattern(param);
    }
    v.visit_stmts(&clause.body);
}

fn walk_template<V: Visit + ?Sized>(v: &mut V, template: &Template) {
    visit_exprs(v, &template.exprs);
}

fn walk_args<V: Visit + ?Sized>(v: &mut V, args: &[Arg]) {
    for arg in args {
        v.visit_expr(arg.expr());
    }
}

pub fn walk_expr<V: Visit + ?Sized>(v: &mut V, expr: &Expr) {
    match expr {
        Expr::Ident(name) => v.visit_ident_ref(name),
        Expr::This
        | Expr::Super
        | Expr::NewTarget
        | Expr::Num(_)
        | Expr::Str(_)
        | Expr::Bool(_)
        | Expr::Null
        | Expr::Regex { .. } => {}
        Expr::Template(template) => walk_template(v, template),
        Expr::TaggedTemplate { tag, quasi } => {
            v.visit_expr(tag);
            walk_template(v, quasi);
        }
        Expr::Array(elems) => {
            for elem in elems {
                match elem {
                    ArrayElem::Expr(e) | ArrayElem::Spread(e) => v.visit_expr(e),
                    ArrayElem::Hole => {}
                }
            }
        }
        Expr::Object(props) => {
            for prop in props {
                v.visit_prop(prop);
            }
        }
        Expr::Function(func) => v.visit_function(func),
        Expr::Arrow(arrow) => v.visit_arrow(arrow),
        Expr::Class(class) => v.visit_class(class),
        Expr::Paren(items) => visit_exprs(v, items),
        Expr::Unary { arg, .. } | Expr::Update { arg, .. } | Expr::Await(arg) => v.visit_expr(arg),
        Expr::Binary { left, right, .. } => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        Expr::Assign { target, value, .. } => {
            v.visit_expr(target);
            v.visit_expr(value);
        }
        Expr::Conditional { test, cons, alt } => {
            v.visit_expr(test);
            v.visit_expr(cons);
            v.visit_expr(alt);
        }
        Expr::Call { callee, args, .. } => {
            v.visit_expr(callee);
            walk_args(v, args);
        }
        Expr::New { callee, args } => {
            v.visit_expr(callee);
            if let Some(args) = args {
                walk_args(v, args);
            }
        }
        Expr::Member { object, .. } => v.visit_expr(object),
        Expr::Index { object, index, .. } => {
            v.visit_expr(object);
            visit_exprs(v, index);
        }
        Expr::Yield { arg, .. } => {
            if let Some(arg) = arg {
                v.visit_expr(arg);
            }
        }
    }
}

pub fn walk_function<V: Visit + ?Sized>(v: &mut V, func: &Function) {
    for param in &func.params {
        v.visit_pattern(param);
    }
    v.visit_stmts(&func.body);
}

pub fn walk_arrow<V: Visit + ?Sized>(v: &mut V, arrow: &Arrow) {
    match &arrow.params {
        ArrowParams::Bare(name) => v.visit_binding_ident(name),
        ArrowParams::List(params) => {
            for param in params {
                v.visit_pattern(param);
            }
        }
    }
    match &arrow.body {
        ArrowBody::Block(body) => v.visit_stmts(body),
        ArrowBody::Expr(body) => v.visit_expr(body),
    }
}

pub fn walk_class<V: Visit + ?Sized>(v: &mut V, class: &Class) {
    if let Some(super_class) = &class.super_class {
        v.visit_expr(super_class);
    }
    for member in &class.members {
        match member {
            ClassMember::Method { key, func, .. } => {
                v.visit_prop_key(key);
                v.visit_function(func);
            }
            ClassMember::Field { key, value, .. } => {
                v.visit_prop_key(key);
                if let Some(value) = value {
                    v.visit_expr(value);
                }
            }
            ClassMember::StaticBlock(body) => v.visit_stmts(body),
        }
    }
}

pub fn walk_prop<V: Visit + ?Sized>(v: &mut V, prop: &Prop) {
    match prop {
        Prop::KeyValue { key, value } => {
            v.visit_prop_key(key);
            v.visit_expr(value);
        }
        Prop::Shorthand(name) => v.visit_ident_ref(name),
        Prop::Method { key, func, .. } => {
            v.visit_prop_key(key);
            v.visit_function(func);
        }
        Prop::Spread(expr) => v.visit_expr(expr),
    }
}

pub fn walk_prop_key<V: Visit + ?Sized>(v: &mut V, key: &PropKey) {
    if let PropKey::Computed(expr) = key {
        v.visit_expr(expr);
    }
}

pub fn walk_pattern<V: Visit + ?Sized>(v: &mut V, pat: &Pattern) {
    match pat {
        Pattern::Ident(name) => v.visit_binding_ident(name),
        Pattern::Array(elems) => {
            for elem in elems.iter().flatten() {
                v.visit_pattern(elem);
            }
        }
        Pattern::Object(props) => {
            for prop in props {
                v.visit_pattern_prop(prop);
            }
        }
        Pattern::Assign { target, default } => {
            v.visit_pattern(target);
            v.visit_expr(default);
        }
        Pattern::Rest(inner) => v.visit_pattern(inner),
    }
}

pub fn walk_pattern_prop<V: Visit + ?Sized>(v: &mut V, prop: &PatternProp) {
    match prop {
        PatternProp::KeyValue { key, value } => {
            v.visit_prop_key(key);
            v.visit_pattern(value);
        }
        PatternProp::Shorthand { name, default } => {
            v.visit_binding_ident(name);
            if let Some(default) = default {
                v.visit_expr(default);
            }
        }
        PatternProp::Rest(name) => v.visit_binding_ident(name),
    }
}

// =============================================================================
// Exclusive-reference visitor
// =============================================================================

pub trait VisitMut {
    fn visit_module(&mut self, module: &mut Module) {
        self.visit_stmts(&mut module.body);
    }
    fn visit_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        walk_stmts_mut(self, stmts);
    }
    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        walk_stmt_mut(self, stmt);
    }
    fn visit_var_decl(&mut self, decl: &mut VarDecl) {
        walk_var_decl_mut(self, decl);
    }
    fn visit_catch(&mut self, clause: &mut CatchClause) {
        walk_catch_mut(self, clause);
    }
    fn visit_for_head(&mut self, head: &mut ForHead) {
        walk_for_head_mut(self, head);
    }
    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr_mut(self, expr);
    }
    fn visit_function(&mut self, func: &mut Function) {
        walk_function_mut(self, func);
    }
    fn visit_arrow(&mut self, arrow: &mut Arrow) {
        walk_arrow_mut(self, arrow);
    }
    fn visit_class(&mut self, class: &mut Class) {
        walk_class_mut(self, class);
    }
    fn visit_prop(&mut self, prop: &mut Prop) {
        walk_prop_mut(self, prop);
    }
    fn visit_prop_key(&mut self, key: &mut PropKey) {
        walk_prop_key_mut(self, key);
    }
    fn visit_pattern(&mut self, pat: &mut Pattern) {
        walk_pattern_mut(self, pat);
    }
    fn visit_pattern_prop(&mut self, prop: &mut PatternProp) {
        walk_pattern_prop_mut(self, prop);
    }
    fn visit_ident_ref(&mut self, _name: &mut String) {}
    fn visit_binding_ident(&mut self, _name: &mut String) {}
}

pub fn walk_stmts_mut<V: VisitMut + ?Sized>(v: &mut V, stmts: &mut Vec<Stmt>) {
    for stmt in stmts {
        v.visit_stmt(stmt);
    }
}

fn visit_exprs_mut<V: VisitMut + ?Sized>(v: &mut V, exprs: &mut [Expr]) {
    for expr in exprs {
        v.visit_expr(expr);
    }
}

pub fn walk_stmt_mut<V: VisitMut + ?Sized>(v: &mut V, stmt: &mut Stmt) {
    match stmt {
        Stmt::Empty | Stmt::Debugger | Stmt::Break(_) | Stmt::Continue(_) => {}
        Stmt::Block(body) => v.visit_stmts(body),
        Stmt::Expr(exprs) | Stmt::Return(exprs) | Stmt::Throw(exprs) => {
            visit_exprs_mut(v, exprs);
        }
        Stmt::Var(decl) => v.visit_var_decl(decl),
        Stmt::Function(func) => v.visit_function(func),
        Stmt::Class(class) => v.visit_class(class),
        Stmt::If { test, cons, alt } => {
            visit_exprs_mut(v, test);
            v.visit_stmt(cons);
            if let Some(alt) = alt {
                v.visit_stmt(alt);
            }
        }
        Stmt::For {
            init,
            test,
            update,
            body,
        } => {
            match init {
                Some(ForInit::Var(decl)) => v.visit_var_decl(decl),
                Some(ForInit::Expr(exprs)) => visit_exprs_mut(v, exprs),
                None => {}
            }
            if let Some(test) = test {
                visit_exprs_mut(v, test);
            }
            if let Some(update) = update {
                visit_exprs_mut(v, update);
            }
            v.visit_stmt(body);
        }
        Stmt::ForIn { left, right, body } => {
            v.visit_for_head(left);
            visit_exprs_mut(v, right);
            v.visit_stmt(body);
        }
        Stmt::ForOf {
            left, right, body, ..
        } => {
            v.visit_for_head(left);
            v.visit_expr(right);
            v.visit_stmt(body);
        }
        Stmt::While { test, body } => {
            visit_exprs_mut(v, test);
            v.visit_stmt(body);
        }
        Stmt::DoWhile { body, test } => {
            v.visit_stmt(body);
            visit_exprs_mut(v, test);
        }
        Stmt::Labeled { body, .. } => v.visit_stmt(body),
        Stmt::Switch {
            discriminant,
            cases,
        } => {
            visit_exprs_mut(v, discriminant);
            for SwitchCase { test, body } in cases {
                if let Some(test) = test {
                    visit_exprs_mut(v, test);
                }
                v.visit_stmts(body);
            }
        }
        Stmt::Try {
            block,
            handler,
            finalizer,
        } => {
            v.visit_stmts(block);
            if let Some(handler) = handler {
                v.visit_catch(handler);
            }
            if let Some(finalizer) = finalizer {
                v.visit_stmts(finalizer);
            }
        }
        Stmt::With { object, body } => {
            visit_exprs_mut(v, object);
            v.visit_stmt(body);
        }
    }
}

pub fn walk_for_head_mut<V: VisitMut + ?Sized>(v: &mut V, head: &mut ForHead) {
    match head {
        ForHead::Var(_, pat) => v.visit_pattern(pat),
        ForHead::Expr(expr) => v.visit_expr(expr),
    }
}

pub fn walk_var_decl_mut<V: VisitMut + ?Sized>(v: &mut V, decl: &mut VarDecl) {
    for d in &mut decl.decls {
        v.visit_pattern(&mut d.name);
        if let Some(init) = &mut d.init {
            v.visit_expr(init);
        }
    }
}

pub fn walk_catch_mut<V: VisitMut + ?Sized>(v: &mut V, clause: &mut CatchClause) {
    if let Some(param) = &mut clause.param {
        v.visit_pattern(param);
    }
    v.visit_stmts(&mut clause.body);
}

fn walk_args_mut<V: VisitMut + ?Sized>(v: &mut V, args: &mut [Arg]) {
    for arg in args {
        match arg {
            Arg::Expr(e) | Arg::Spread(e) => v.visit_expr(e),
        }
    }
}

pub fn walk_expr_mut<V: VisitMut + ?Sized>(v: &mut V, expr: &mut Expr) {
    match expr {
        Expr::Ident(name) => v.visit_ident_ref(name),
        Expr::This
        | Expr::Super
        | Expr::NewTarget
        | Expr::Num(_)
        | Expr::Str(_)
        | Expr::Bool(_)
        | Expr::Null
        | Expr::Regex { .. } => {}
        Expr::Template(template) => visit_exprs_mut(v, &mut template.exprs),
        Expr::TaggedTemplate { tag, quasi } => {
            v.visit_expr(tag);
            visit_exprs_mut(v, &mut quasi.exprs);
        }
        Expr::Array(elems) => {
            for elem in elems {
                match elem {
                    ArrayElem::Expr(e) | ArrayElem::Spread(e) => v.visit_expr(e),
                    ArrayElem::Hole => {}
                }
            }
        }
        Expr::Object(props) => {
            for prop in props {
                v.visit_prop(prop);
            }
        }
        Expr::Function(func) => v.visit_function(func),
        Expr::Arrow(arrow) => v.visit_arrow(arrow),
        Expr::Class(class) => v.visit_class(class),
        Expr::Paren(items) => visit_exprs_mut(v, items),
        Expr::Unary { arg, .. } | Expr::Update { arg, .. } | Expr::Await(arg) => v.visit_expr(arg),
        Expr::Binary { left, right, .. } => {
            v.visit_expr(left);
            v.visit_expr(right);
        }
        Expr::Assign { target, value, .. } => {
            v.visit_expr(target);
            v.visit_expr(value);
        }
        Expr::Conditional { test, cons, alt } => {
            v.visit_expr(test);
            v.visit_expr(cons);
            v.visit_expr(alt);
        }
        Expr::Call { callee, args, .. } => {
            v.visit_expr(callee);
            walk_args_mut(v, args);
        }
        Expr::New { callee, args } => {
            v.visit_expr(callee);
            if let Some(args) = args {
                walk_args_mut(v, args);
            }
        }
        Expr::Member { object, .. } => v.visit_expr(object),
        Expr::Index { object, index, .. } => {
            v.visit_expr(object);
            visit_exprs_mut(v, index);
        }
        Expr::Yield { arg, .. } => {
            if let Some(arg) = arg {
                v.visit_expr(arg);
            }
        }
    }
}

pub fn walk_function_mut<V: VisitMut + ?Sized>(v: &mut V, func: &mut Function) {
    for param in &mut func.params {
        v.visit_pattern(param);
    }
    v.visit_stmts(&mut func.body);
}

pub fn walk_arrow_mut<V: VisitMut + ?Sized>(v: &mut V, arrow: &mut Arrow) {
    match &mut arrow.params {
        ArrowParams::Bare(name) => v.visit_binding_ident(name),
        ArrowParams::List(params) => {
            for param in params {
                v.visit_pattern(param);
            }
        }
    }
    match &mut arrow.body {
        ArrowBody::Block(body) => v.visit_stmts(body),
        ArrowBody::Expr(body) => v.visit_expr(body),
    }
}

pub fn walk_class_mut<V: VisitMut + ?Sized>(v: &mut V, class: &mut Class) {
    if let Some(super_class) = &mut class.super_class {
        v.visit_expr(super_class);
    }
    for member in &mut class.members {
        match member {
            ClassMember::Method { key, func, .. } => {
                v.visit_prop_key(key);
                v.visit_function(func);
            }
            ClassMember::Field { key, value, .. } => {
                v.visit_prop_key(key);
                if let Some(value) = value {
                    v.visit_expr(value);
                }
            }
            ClassMember::StaticBlock(body) => v.visit_stmts(body),
        }
    }
}

pub fn walk_prop_mut<V: VisitMut + ?Sized>(v: &mut V, prop: &mut Prop) {
    match prop {
        Prop::KeyValue { key, value } => {
            v.visit_prop_key(key);
            v.visit_expr(value);
        }
        Prop::Shorthand(name) => v.visit_ident_ref(name),
        Prop::Method { key, func, .. } => {
            v.visit_prop_key(key);
            v.visit_function(func);
        }
        Prop::Spread(expr) => v.visit_expr(expr),
    }
}

pub fn walk_prop_key_mut<V: VisitMut + ?Sized>(v: &mut V, key: &mut PropKey) {
    if let PropKey::Computed(expr) = key {
        v.visit_expr(expr);
    }
}

pub fn walk_pattern_mut<V: VisitMut + ?Sized>(v: &mut V, pat: &mut Pattern) {
    match pat {
        Pattern::Ident(name) => v.visit_binding_ident(name),
        Pattern::Array(elems) => {
            for elem in elems.iter_mut().flatten() {
                v.visit_pattern(elem);
            }
        }
        Pattern::Object(props) => {
            for prop in props {
                v.visit_pattern_prop(prop);
            }
        }
        Pattern::Assign { target, default } => {
            v.visit_pattern(target);
            v.visit_expr(default);
        }
        Pattern::Rest(inner) => v.visit_pattern(inner),
    }
}

pub fn walk_pattern_prop_mut<V: VisitMut + ?Sized>(v: &mut V, prop: &mut PatternProp) {
    match prop {
        PatternProp::KeyValue { key, value } => {
            v.visit_prop_key(key);
            v.visit_pattern(value);
        }
        PatternProp::Shorthand { name, default } => {
            v.visit_binding_ident(name);
            if let Some(default) = default {
                v.visit_expr(default);
            }
        }
        PatternProp::Rest(name) => v.visit_binding_ident(name),
    }
}
