//! Statement and expression folding helpers.
//!
//! These turn runs of statements into comma expressions and back: the
//! if-to-ternary rewrite, concise arrow bodies, block flattening and the
//! statement-list normalization the dispatcher always runs.

use crate::precedence::{Level, Slot, parenthesize_for, rewrap_if_ambiguous};
use squash_ast::syntax::is_hoistable_declaration;
use squash_ast::{Expr, Stmt};

/// A statement list reduced to plain expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprRun {
    /// Expressions in evaluation order; the returned value comes last when
    /// `has_return` is set.
    pub exprs: Vec<Expr>,
    pub has_return: bool,
}

/// Reduce a statement list to a run of expressions.
///
/// Expression statements contribute their comma list, and a `return` with a
/// value ends the run. Empty statements are skipped. Returns `None` when the
/// list cannot be collapsed: a hoistable declaration anywhere in it (even past
/// the return), a bare `return`, a directive prologue, or any other kind of
/// statement before the return.
#[must_use]
pub fn statements_to_expression_and_return(stmts: &[Stmt]) -> Option<ExprRun> {
    if stmts.first().is_some_and(is_directive_like) {
        return None;
    }
    let mut exprs = Vec::new();
    for (index, stmt) in stmts.iter().enumerate() {
        match stmt {
            Stmt::Empty => {}
            Stmt::Expr(list) => exprs.extend(list.iter().cloned()),
            Stmt::Return(list) if !list.is_empty() => {
                if stmts[index + 1..].iter().any(is_hoistable_declaration) {
                    return None;
                }
                exprs.extend(list.iter().cloned());
                return Some(ExprRun {
                    exprs,
                    has_return: true,
                });
            }
            _ => return None,
        }
    }
    Some(ExprRun {
        exprs,
        has_return: false,
    })
}

/// Check if a statement looks like a `"use strict"`-style directive.
#[must_use]
pub fn is_directive_like(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::Expr(list) if matches!(list.as_slice(), [Expr::Str(_)]))
}

/// Join expressions into one operand: bare when there is one, a
/// parenthesized sequence otherwise.
#[must_use]
pub fn join_as_operand(mut exprs: Vec<Expr>) -> Expr {
    if exprs.len() == 1
        && let Some(only) = exprs.pop()
    {
        return only;
    }
    Expr::seq(exprs)
}

fn branch_statements(stmt: &Stmt) -> &[Stmt] {
    match stmt {
        Stmt::Block(body) => body,
        other => std::slice::from_ref(other),
    }
}

/// Fold `if (E) S1 else S2` into one expression or return statement when
/// both branches reduce to the same shape.
///
/// All but the last expression of `E` stay in front as independent
/// expressions; the last becomes the ternary's test.
#[must_use]
pub fn if_to_conditional(test: &[Expr], cons: &Stmt, alt: &Stmt) -> Option<Stmt> {
    let (condition, leading) = test.split_last()?;
    let cons = statements_to_expression_and_return(branch_statements(cons))?;
    let alt = statements_to_expression_and_return(branch_statements(alt))?;
    if cons.exprs.is_empty() || alt.exprs.is_empty() || cons.has_return != alt.has_return {
        return None;
    }

    let mut condition = condition.clone();
    parenthesize_for(&mut condition, Slot::leftmost(Level::Coalesce));
    let ternary = Expr::cond(
        condition,
        join_as_operand(cons.exprs),
        join_as_operand(alt.exprs),
    );

    let mut exprs = leading.to_vec();
    exprs.push(ternary);
    if cons.has_return {
        Some(Stmt::Return(exprs))
    } else {
        if let Some(first) = exprs.first_mut() {
            rewrap_if_ambiguous(first);
        }
        Some(Stmt::Expr(exprs))
    }
}

/// Body of a concise arrow for a block body, or `None` when the block does
/// not reduce to expressions followed by a return.
#[must_use]
pub fn concise_body(body: &[Stmt]) -> Option<Expr> {
    let run = statements_to_expression_and_return(body)?;
    if !run.has_return {
        return None;
    }
    Some(join_as_operand(run.exprs))
}

// =============================================================================
// Blocks
// =============================================================================

/// Check if a statement ends in an `if` with no `else`, which would capture
/// an `else` written right after it.
#[must_use]
pub fn ends_with_open_if(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::If { alt: None, .. } => true,
        Stmt::If { alt: Some(alt), .. } => ends_with_open_if(alt),
        Stmt::For { body, .. }
        | Stmt::ForIn { body, .. }
        | Stmt::ForOf { body, .. }
        | Stmt::While { body, .. }
        | Stmt::Labeled { body, .. }
        | Stmt::With { body, .. } => ends_with_open_if(body),
        _ => false,
    }
}

/// Replace a block holding exactly one statement with that statement.
///
/// Lexical declarations stay in their block. With `before_else`, a block
/// whose statement ends in an open `if` is kept too.
pub fn unwrap_single_statement_block(stmt: &mut Stmt, before_else: bool) -> bool {
    let Stmt::Block(body) = stmt else {
        return false;
    };
    if body.len() != 1 || body[0].is_lexical_declaration() {
        return false;
    }
    if before_else && ends_with_open_if(&body[0]) {
        return false;
    }
    match body.pop() {
        Some(inner) => {
            *stmt = inner;
            true
        }
        None => false,
    }
}

// =============================================================================
// Statement lists
// =============================================================================

/// Drop empty statements and merge consecutive expression statements.
///
/// Empty `var` lists left by dead-binding removal count as empty. Leading
/// directive-like statements are never merged. Returns the number of
/// statements removed.
pub fn normalize_statements(stmts: &mut Vec<Stmt>) -> usize {
    let before = stmts.len();
    let mut out: Vec<Stmt> = Vec::with_capacity(stmts.len());
    let mut in_prologue = true;
    for stmt in stmts.drain(..) {
        if matches!(&stmt, Stmt::Empty) || matches!(&stmt, Stmt::Var(decl) if decl.decls.is_empty()) {
            continue;
        }
        if in_prologue && is_directive_like(&stmt) {
            out.push(stmt);
            continue;
        }
        in_prologue = false;
        match (out.last_mut(), stmt) {
            (Some(Stmt::Expr(prev)), Stmt::Expr(next)) if !is_directive_like_list(prev) => {
                prev.extend(next);
            }
            (_, stmt) => out.push(stmt),
        }
    }
    *stmts = out;
    before - stmts.len()
}

fn is_directive_like_list(list: &[Expr]) -> bool {
    matches!(list, [Expr::Str(_)])
}

/// Fold an expression statement into a directly following `return`,
/// `throw` or `if`: `a; return b` becomes `return a, b`.
///
/// Returns the number of statements folded away.
pub fn combine_expression_runs(stmts: &mut Vec<Stmt>) -> usize {
    let mut folded = 0;
    let mut index = 1;
    while index < stmts.len() {
        let foldable = matches!(&stmts[index - 1], Stmt::Expr(list) if !is_directive_like_list(list))
            && match &stmts[index] {
                Stmt::Return(list) | Stmt::Throw(list) => !list.is_empty(),
                Stmt::If { .. } => true,
                _ => false,
            };
        if !foldable {
            index += 1;
            continue;
        }
        let Stmt::Expr(mut leading) = stmts.remove(index - 1) else {
            continue;
        };
        let target = &mut stmts[index - 1];
        if let Stmt::Return(list) | Stmt::Throw(list) | Stmt::If { test: list, .. } = target {
            leading.append(list);
            *list = leading;
        }
        folded += 1;
    }
    folded
}

#[cfg(test)]
#[path = "../tests/folding.rs"]
mod tests;
