//! Operator precedence and parenthesization.
//!
//! The tree is concrete with respect to parentheses, so every rewrite that
//! moves an expression into a new slot must check whether the slot accepts
//! it bare. [`Slot`] describes what a position in the grammar accepts;
//! [`needs_parens`] and [`can_unwrap_parens`] are exact complements of each
//! other on [`fits`], which keeps wrapping and unwrapping from undoing one
//! another across rounds.

use squash_ast::syntax::{leftmost_primary, starts_with_statement_keyword_or_brace};
use squash_ast::{BinaryOp, Expr};

/// Expression grammar levels, lowest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Sequence,
    Assign,
    Conditional,
    Coalesce,
    LogicalOr,
    LogicalAnd,
    BitOr,
    BitXor,
    BitAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Update,
    /// `new C` without an argument list
    New,
    /// Call expressions and member chains rooted in a call or `?.`
    Call,
    /// Member expressions and `new C()`
    Member,
    Primary,
}

impl Level {
    /// The level one step tighter; used for the right operand of
    /// left-associative operators.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Sequence => Self::Assign,
            Self::Assign => Self::Conditional,
            Self::Conditional => Self::Coalesce,
            Self::Coalesce => Self::LogicalOr,
            Self::LogicalOr => Self::LogicalAnd,
            Self::LogicalAnd => Self::BitOr,
            Self::BitOr => Self::BitXor,
            Self::BitXor => Self::BitAnd,
            Self::BitAnd => Self::Equality,
            Self::Equality => Self::Relational,
            Self::Relational => Self::Shift,
            Self::Shift => Self::Additive,
            Self::Additive => Self::Multiplicative,
            Self::Multiplicative => Self::Exponent,
            Self::Exponent => Self::Unary,
            Self::Unary => Self::Update,
            Self::Update => Self::New,
            Self::New => Self::Call,
            Self::Call => Self::Member,
            Self::Member | Self::Primary => Self::Primary,
        }
    }
}

#[must_use]
pub const fn binary_level(op: BinaryOp) -> Level {
    match op {
        BinaryOp::Nullish => Level::Coalesce,
        BinaryOp::LogicalOr => Level::LogicalOr,
        BinaryOp::LogicalAnd => Level::LogicalAnd,
        BinaryOp::BitOr => Level::BitOr,
        BinaryOp::BitXor => Level::BitXor,
        BinaryOp::BitAnd => Level::BitAnd,
        BinaryOp::EqEq | BinaryOp::NotEq | BinaryOp::EqEqEq | BinaryOp::NotEqEq => Level::Equality,
        BinaryOp::Lt
        | BinaryOp::Gt
        | BinaryOp::LtEq
        | BinaryOp::GtEq
        | BinaryOp::In
        | BinaryOp::InstanceOf => Level::Relational,
        BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => Level::Shift,
        BinaryOp::Add | BinaryOp::Sub => Level::Additive,
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => Level::Multiplicative,
        BinaryOp::Exp => Level::Exponent,
    }
}

/// Grammar level an expression occupies when written without parentheses.
#[must_use]
pub fn precedence_level(expr: &Expr) -> Level {
    match expr {
        Expr::Ident(_)
        | Expr::This
        | Expr::Super
        | Expr::NewTarget
        | Expr::Num(_)
        | Expr::Str(_)
        | Expr::Bool(_)
        | Expr::Null
        | Expr::Regex { .. }
        | Expr::Template(_)
        | Expr::Array(_)
        | Expr::Object(_)
        | Expr::Function(_)
        | Expr::Class(_)
        | Expr::Paren(_) => Level::Primary,
        Expr::Arrow(_) | Expr::Yield { .. } | Expr::Assign { .. } => Level::Assign,
        Expr::Conditional { .. } => Level::Conditional,
        Expr::Binary { op, .. } => binary_level(*op),
        Expr::Unary { .. } | Expr::Await(_) => Level::Unary,
        Expr::Update { .. } => Level::Update,
        Expr::New { args: None, .. } => Level::New,
        Expr::New { args: Some(_), .. } => Level::Member,
        Expr::Call { .. } => Level::Call,
        Expr::Member {
            object, optional, ..
        }
        | Expr::Index {
            object, optional, ..
        } => chain_level(object, *optional),
        Expr::TaggedTemplate { tag, .. } => chain_level(tag, false),
    }
}

fn chain_level(base: &Expr, optional: bool) -> Level {
    if optional || precedence_level(base) == Level::Call {
        Level::Call
    } else {
        Level::Member
    }
}

/// Check if an expression is an optional chain (`a?.b`, `a?.b.c()`), whose
/// parentheses end the chain's short-circuit.
#[must_use]
pub fn is_optional_chain(expr: &Expr) -> bool {
    match expr {
        Expr::Member {
            object, optional, ..
        }
        | Expr::Index {
            object, optional, ..
        }
        | Expr::Call {
            callee: object,
            optional,
            ..
        } => *optional || is_optional_chain(object),
        _ => false,
    }
}

// =============================================================================
// Slots
// =============================================================================

/// What a child position accepts without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub min: Level,
    /// Operand of `??`, which cannot mix with bare `||` / `&&`
    pub coalesce_operand: bool,
    /// Base of a member, call or tagged-template chain
    pub chain_base: bool,
    /// Shares its first token with the enclosing expression
    pub leftmost: bool,
    /// Concise arrow body, which cannot start with `{`
    pub arrow_body: bool,
}

impl Slot {
    #[must_use]
    pub const fn at(min: Level) -> Self {
        Self {
            min,
            coalesce_operand: false,
            chain_base: false,
            leftmost: false,
            arrow_body: false,
        }
    }

    /// A slot that begins its parent expression.
    #[must_use]
    pub const fn leftmost(min: Level) -> Self {
        Self {
            leftmost: true,
            ..Self::at(min)
        }
    }

    /// Object of `.`/`[]`, callee, or tag.
    #[must_use]
    pub const fn chain_base(min: Level) -> Self {
        Self {
            chain_base: true,
            leftmost: true,
            ..Self::at(min)
        }
    }

    /// Left operand of `??`.
    #[must_use]
    pub const fn coalesce() -> Self {
        Self {
            coalesce_operand: true,
            leftmost: true,
            ..Self::at(Level::Coalesce)
        }
    }

    #[must_use]
    pub const fn arrow_body() -> Self {
        Self {
            arrow_body: true,
            ..Self::at(Level::Assign)
        }
    }

    /// Operand slots of a binary expression.
    #[must_use]
    pub fn binary_operands(op: BinaryOp) -> (Self, Self) {
        match op {
            BinaryOp::Nullish => (Self::coalesce(), Self::at(Level::BitOr)),
            // Right-associative, and the base cannot be a bare unary.
            BinaryOp::Exp => (Self::leftmost(Level::Update), Self::at(Level::Exponent)),
            _ => {
                let level = binary_level(op);
                (Self::leftmost(level), Self::at(level.next()))
            }
        }
    }
}

/// Check if an expression can sit in `slot` without parentheses.
#[must_use]
pub fn fits(expr: &Expr, slot: Slot) -> bool {
    let level = precedence_level(expr);
    if level < slot.min {
        return false;
    }
    !(slot.coalesce_operand && matches!(level, Level::LogicalOr | Level::LogicalAnd))
}

/// Check if a bare expression placed in `slot` must be wrapped.
#[must_use]
pub fn needs_parens(expr: &Expr, slot: Slot) -> bool {
    !matches!(expr, Expr::Paren(_)) && !fits(expr, slot)
}

/// Check if a parenthesized single expression can replace its parentheses
/// in `slot` and still parse to the same tree.
#[must_use]
pub fn can_unwrap_parens(inner: &Expr, slot: Slot) -> bool {
    if !fits(inner, slot) {
        return false;
    }
    if slot.chain_base && is_optional_chain(inner) {
        return false;
    }
    // The enclosing expression may itself start a statement.
    if slot.leftmost && starts_with_statement_keyword_or_brace(inner) {
        return false;
    }
    !(slot.arrow_body && matches!(leftmost_primary(inner), Expr::Object(_)))
}

// =============================================================================
// Wrapping
// =============================================================================

/// Replace `expr` with `(expr)`.
pub fn wrap_in_parens(expr: &mut Expr) {
    let inner = std::mem::replace(expr, Expr::Null);
    *expr = Expr::Paren(vec![inner]);
}

/// Wrap `expr` if `slot` does not accept it bare. Returns `true` if it did.
pub fn parenthesize_for(expr: &mut Expr, slot: Slot) -> bool {
    if needs_parens(expr, slot) {
        wrap_in_parens(expr);
        true
    } else {
        false
    }
}

/// Replace `(inner)` by `inner` when `slot` allows it. Returns `true` if it
/// did.
pub fn unwrap_parens_in(expr: &mut Expr, slot: Slot) -> bool {
    let Expr::Paren(items) = expr else {
        return false;
    };
    if items.len() != 1 || !can_unwrap_parens(&items[0], slot) {
        return false;
    }
    if let Some(inner) = items.pop() {
        *expr = inner;
        return true;
    }
    false
}

/// Mutable counterpart of [`leftmost_primary`], used to pick what to wrap.
///
/// Stops at an assignment whose target is an object pattern: `({a}) = b` is
/// not a valid assignment, so the whole `({a} = b)` must be wrapped instead.
pub fn leftmost_primary_mut(expr: &mut Expr) -> &mut Expr {
    let descends = match &*expr {
        Expr::Assign { target, .. } => !matches!(**target, Expr::Object(_)),
        Expr::Binary { .. }
        | Expr::Conditional { .. }
        | Expr::Call { .. }
        | Expr::Member { .. }
        | Expr::Index { .. }
        | Expr::TaggedTemplate { .. }
        | Expr::Update { prefix: false, .. } => true,
        _ => false,
    };
    if !descends {
        return expr;
    }
    match expr {
        Expr::Binary { left, .. } => leftmost_primary_mut(left),
        Expr::Assign { target, .. } => leftmost_primary_mut(target),
        Expr::Conditional { test, .. } => leftmost_primary_mut(test),
        Expr::Call { callee, .. } => leftmost_primary_mut(callee),
        Expr::Member { object, .. } | Expr::Index { object, .. } => leftmost_primary_mut(object),
        Expr::TaggedTemplate { tag, .. } => leftmost_primary_mut(tag),
        Expr::Update { arg, .. } => leftmost_primary_mut(arg),
        other => other,
    }
}

/// Parenthesize the left-most primary of an expression that would be read as
/// a block, declaration or `let` declaration at the start of a statement.
///
/// Returns `true` if a wrap was inserted.
pub fn rewrap_if_ambiguous(expr: &mut Expr) -> bool {
    if !starts_with_statement_keyword_or_brace(expr) {
        return false;
    }
    wrap_in_parens(leftmost_primary_mut(expr));
    true
}

/// Like [`rewrap_if_ambiguous`] for a concise arrow body, where only a
/// leading `{` is ambiguous.
pub fn rewrap_arrow_body(expr: &mut Expr) -> bool {
    if !matches!(leftmost_primary(expr), Expr::Object(_)) {
        return false;
    }
    wrap_in_parens(leftmost_primary_mut(expr));
    true
}

#[cfg(test)]
#[path = "../tests/precedence.rs"]
mod tests;
