//! Transform utilities for syntax analysis.
//!
//! Common queries used by the rewrite passes: receiver references inside a
//! function body, hoistable declarations in a statement list, the left-most
//! token of an expression, and side-effect freedom.

use crate::node::{
    ArrayElem, Class, ClassMember, Expr, ForHead, ForInit, Function, Prop, PropKey, Stmt, UnaryOp,
    VarKind,
};
use crate::visit::{self, Visit};

/// Receiver-dependent references found directly in a function body.
///
/// Only the body's own receiver is considered: nested ordinary functions,
/// methods and class field initializers bind their own `this`/`arguments`
/// and are not descended into. Arrow functions inherit the receiver, so
/// their bodies are scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiverUsage {
    pub this: bool,
    pub arguments: bool,
    pub super_: bool,
    pub new_target: bool,
}

impl ReceiverUsage {
    #[must_use]
    pub const fn any(self) -> bool {
        self.this || self.arguments || self.super_ || self.new_target
    }
}

struct ReceiverScan {
    usage: ReceiverUsage,
}

impl Visit for ReceiverScan {
    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::This => self.usage.this = true,
            Expr::Super => self.usage.super_ = true,
            Expr::NewTarget => self.usage.new_target = true,
            _ => visit::walk_expr(self, expr),
        }
    }

    fn visit_ident_ref(&mut self, name: &str) {
        if name == "arguments" {
            self.usage.arguments = true;
        }
    }

    // Regular functions have their own receiver.
    fn visit_function(&mut self, _func: &Function) {}

    fn visit_class(&mut self, class: &Class) {
        // The heritage clause and computed keys evaluate in the outer scope.
        if let Some(super_class) = &class.super_class {
            self.visit_expr(super_class);
        }
        for member in &class.members {
            match member {
                ClassMember::Method { key, .. } | ClassMember::Field { key, .. } => {
                    self.visit_prop_key(key);
                }
                ClassMember::StaticBlock(_) => {}
            }
        }
    }
}

/// Scan a function's parameters and body for receiver-dependent references.
#[must_use]
pub fn receiver_usage(func: &Function) -> ReceiverUsage {
    let mut scan = ReceiverScan {
        usage: ReceiverUsage::default(),
    };
    visit::walk_function(&mut scan, func);
    scan.usage
}

struct NameScan<'a> {
    name: &'a str,
    found: bool,
}

impl Visit for NameScan<'_> {
    fn visit_ident_ref(&mut self, name: &str) {
        if name == self.name {
            self.found = true;
        }
    }
}

/// Check if a function refers to `name` anywhere in its parameters or body,
/// nested functions included. Shadowing is ignored, so the answer errs
/// towards `true`.
#[must_use]
pub fn function_references_name(func: &Function, name: &str) -> bool {
    let mut scan = NameScan { name, found: false };
    visit::walk_function(&mut scan, func);
    scan.found
}

/// Check if a class refers to `name` anywhere in its heritage or members.
#[must_use]
pub fn class_references_name(class: &Class, name: &str) -> bool {
    let mut scan = NameScan { name, found: false };
    visit::walk_class(&mut scan, class);
    scan.found
}

// =============================================================================
// Hoisting
// =============================================================================

/// Check if a statement declares a binding visible outside its textual
/// position in the enclosing list: function and class declarations, any
/// `var`/`let`/`const` at this level, or a `var` nested anywhere in
/// non-function sub-statements.
#[must_use]
pub fn is_hoistable_declaration(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Var(_) | Stmt::Function(_) | Stmt::Class(_) => true,
        _ => contains_nested_var(stmt),
    }
}

/// Check if any statement in a list is a hoistable declaration.
#[must_use]
pub fn has_hoistable_declaration(stmts: &[Stmt]) -> bool {
    stmts.iter().any(is_hoistable_declaration)
}

struct VarScan {
    found: bool,
}

impl Visit for VarScan {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Var(decl) if decl.kind == VarKind::Var => self.found = true,
            Stmt::For {
                init: Some(ForInit::Var(decl)),
                ..
            } if decl.kind == VarKind::Var => self.found = true,
            Stmt::ForIn {
                left: ForHead::Var(VarKind::Var, _),
                ..
            }
            | Stmt::ForOf {
                left: ForHead::Var(VarKind::Var, _),
                ..
            } => self.found = true,
            _ => visit::walk_stmt(self, stmt),
        }
    }

    // Expressions cannot contain statements outside of function bodies.
    fn visit_expr(&mut self, _expr: &Expr) {}
    fn visit_function(&mut self, _func: &Function) {}
    fn visit_class(&mut self, _class: &Class) {}
}

fn contains_nested_var(stmt: &Stmt) -> bool {
    let mut scan = VarScan { found: false };
    scan.visit_stmt(stmt);
    scan.found
}

// =============================================================================
// Left-most primary
// =============================================================================

/// Walk down the left edge of an expression to the node whose first token
/// is also the first token of the whole expression.
///
/// Stops at any node that begins with its own token: prefix operators,
/// `new`, parentheses, and all primaries.
#[must_use]
pub fn leftmost_primary(expr: &Expr) -> &Expr {
    let mut current = expr;
    loop {
        current = match current {
            Expr::Binary { left, .. } => &**left,
            Expr::Assign { target, .. } => &**target,
            Expr::Conditional { test, .. } => &**test,
            Expr::Call { callee, .. } => &**callee,
            Expr::Member { object, .. } | Expr::Index { object, .. } => &**object,
            Expr::TaggedTemplate { tag, .. } => &**tag,
            Expr::Update {
                prefix: false, arg, ..
            } => &**arg,
            _ => return current,
        };
    }
}

/// Check if an expression, placed at the start of a statement, would be
/// read as a block, a declaration, or a `let` declaration instead.
#[must_use]
pub fn starts_with_statement_keyword_or_brace(expr: &Expr) -> bool {
    matches!(
        leftmost_primary(expr),
        Expr::Object(_) | Expr::Function(_) | Expr::Class(_)
    ) || matches!(leftmost_primary(expr), Expr::Ident(name) if name == "let")
}

// =============================================================================
// Side effects
// =============================================================================

/// Check if evaluating an expression can neither throw nor have observable
/// effects. Conservative: anything that may call user code is impure.
#[must_use]
pub fn is_side_effect_free(expr: &Expr) -> bool {
    match expr {
        Expr::Num(_)
        | Expr::Str(_)
        | Expr::Bool(_)
        | Expr::Null
        | Expr::Regex { .. }
        | Expr::Function(_)
        | Expr::Arrow(_) => true,
        Expr::Ident(name) => name == "undefined" || name == "NaN" || name == "Infinity",
        Expr::Template(template) => template.exprs.is_empty(),
        Expr::Unary { op, arg } => {
            matches!(
                op,
                UnaryOp::Not | UnaryOp::Void | UnaryOp::Minus | UnaryOp::BitNot | UnaryOp::Typeof
            ) && is_primitive_literal(arg)
        }
        Expr::Paren(items) => items.iter().all(is_side_effect_free),
        Expr::Array(elems) => elems.iter().all(|elem| match elem {
            ArrayElem::Expr(e) => is_side_effect_free(e),
            ArrayElem::Hole => true,
            ArrayElem::Spread(_) => false,
        }),
        Expr::Object(props) => props.iter().all(|prop| match prop {
            Prop::KeyValue {
                key: PropKey::Computed(_),
                ..
            } => false,
            Prop::KeyValue { value, .. } => is_side_effect_free(value),
            Prop::Method { key, .. } => !matches!(key, PropKey::Computed(_)),
            Prop::Shorthand(_) | Prop::Spread(_) => false,
        }),
        _ => false,
    }
}

fn is_primitive_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Num(_) | Expr::Str(_) | Expr::Bool(_) | Expr::Null => true,
        Expr::Unary { arg, .. } => is_primitive_literal(arg),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/transform_utils.rs"]
mod tests;
