//! Syntax tree nodes.
//!
//! The tree is a closed family of enums. Every node exclusively owns its
//! children, and equality is structural. The tree is concrete with respect to
//! parentheses: each parenthesized expression is an explicit [`Expr::Paren`]
//! node, and nothing downstream ever inserts parentheses on its own.
//!
//! The comma operator only exists in two places: inside [`Expr::Paren`], and
//! in statement-level `Vec<Expr>` slots (expression statements, `return`,
//! `throw`, `if`/`while`/`switch` heads, `for` heads, computed indexes).

use serde::{Deserialize, Serialize};

/// Root of a parsed program.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Module {
    pub body: Vec<Stmt>,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `;`
    Empty,
    /// `{ ... }`
    Block(Vec<Stmt>),
    /// `a, b;`
    Expr(Vec<Expr>),
    /// `var`/`let`/`const` declaration
    Var(VarDecl),
    /// Function declaration (always named)
    Function(Function),
    /// Class declaration (always named)
    Class(Class),
    If {
        test: Vec<Expr>,
        cons: Box<Stmt>,
        alt: Option<Box<Stmt>>,
    },
    For {
        init: Option<ForInit>,
        test: Option<Vec<Expr>>,
        update: Option<Vec<Expr>>,
        body: Box<Stmt>,
    },
    ForIn {
        left: ForHead,
        right: Vec<Expr>,
        body: Box<Stmt>,
    },
    ForOf {
        left: ForHead,
        right: Box<Expr>,
        body: Box<Stmt>,
        is_await: bool,
    },
    While {
        test: Vec<Expr>,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        test: Vec<Expr>,
    },
    /// `return a, b;` (an empty list is a bare `return;`)
    Return(Vec<Expr>),
    Throw(Vec<Expr>),
    Break(Option<String>),
    Continue(Option<String>),
    Labeled {
        label: String,
        body: Box<Stmt>,
    },
    Switch {
        discriminant: Vec<Expr>,
        cases: Vec<SwitchCase>,
    },
    Try {
        block: Vec<Stmt>,
        handler: Option<CatchClause>,
        finalizer: Option<Vec<Stmt>>,
    },
    With {
        object: Vec<Expr>,
        body: Box<Stmt>,
    },
    Debugger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub kind: VarKind,
    pub decls: Vec<VarDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclarator {
    pub name: Pattern,
    pub init: Option<Expr>,
}

/// Initializer slot of a C-style `for`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForInit {
    Var(VarDecl),
    Expr(Vec<Expr>),
}

/// Left-hand side of `for-in` / `for-of`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForHead {
    Var(VarKind, Pattern),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// `None` for `default:`
    pub test: Option<Vec<Expr>>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: Vec<Stmt>,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Ident(String),
    This,
    Super,
    /// `new.target`
    NewTarget,
    /// Numeric literal, kept as its source lexeme
    Num(String),
    /// String literal, holding the cooked value
    Str(String),
    Bool(bool),
    Null,
    Regex {
        pattern: String,
        flags: String,
    },
    Template(Template),
    TaggedTemplate {
        tag: Box<Expr>,
        quasi: Template,
    },
    Array(Vec<ArrayElem>),
    Object(Vec<Prop>),
    Function(Box<Function>),
    Arrow(Box<Arrow>),
    Class(Box<Class>),
    /// `( a, b )`
    Paren(Vec<Expr>),
    Unary {
        op: UnaryOp,
        arg: Box<Expr>,
    },
    Update {
        op: UpdateOp,
        prefix: bool,
        arg: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        cons: Box<Expr>,
        alt: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Arg>,
        optional: bool,
    },
    /// `new C` has no argument list, `new C()` has an empty one.
    New {
        callee: Box<Expr>,
        args: Option<Vec<Arg>>,
    },
    /// `a.b`, `a?.b`, `a.#b`
    Member {
        object: Box<Expr>,
        prop: String,
        optional: bool,
    },
    /// `a[b]`, `a?.[b]`
    Index {
        object: Box<Expr>,
        index: Vec<Expr>,
        optional: bool,
    },
    Yield {
        arg: Option<Box<Expr>>,
        delegate: bool,
    },
    Await(Box<Expr>),
}

/// Template literal. `quasis` holds the raw text between substitutions and is
/// always one longer than `exprs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub quasis: Vec<String>,
    pub exprs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayElem {
    Expr(Expr),
    Spread(Expr),
    Hole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arg {
    Expr(Expr),
    Spread(Expr),
}

impl Arg {
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        match self {
            Self::Expr(e) | Self::Spread(e) => e,
        }
    }
}

// =============================================================================
// Functions and classes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Function {
    pub name: Option<String>,
    pub params: Vec<Pattern>,
    pub body: Vec<Stmt>,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub params: ArrowParams,
    pub body: ArrowBody,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrowParams {
    /// `a => ...`
    Bare(String),
    /// `(a, b) => ...`
    List(Vec<Pattern>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrowBody {
    Block(Vec<Stmt>),
    /// Concise body
    Expr(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Class {
    pub name: Option<String>,
    pub super_class: Option<Box<Expr>>,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassMember {
    Method {
        key: PropKey,
        kind: MethodKind,
        is_static: bool,
        func: Function,
    },
    Field {
        key: PropKey,
        is_static: bool,
        value: Option<Expr>,
    },
    StaticBlock(Vec<Stmt>),
}

// =============================================================================
// Object literals and property names
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Prop {
    KeyValue { key: PropKey, value: Expr },
    /// `{ a }`
    Shorthand(String),
    Method {
        key: PropKey,
        kind: MethodKind,
        func: Function,
    },
    Spread(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropKey {
    Ident(String),
    /// Quoted key, holding the cooked value
    Str(String),
    Num(String),
    Computed(Box<Expr>),
    /// `#name` (stored without the `#`)
    Private(String),
}

// =============================================================================
// Binding patterns
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    Ident(String),
    /// `[a, , b]`; a trailing element may be [`Pattern::Rest`]
    Array(Vec<Option<Pattern>>),
    Object(Vec<PatternProp>),
    /// `a = 1`
    Assign {
        target: Box<Pattern>,
        default: Box<Expr>,
    },
    /// `...a`
    Rest(Box<Pattern>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PatternProp {
    KeyValue {
        key: PropKey,
        value: Pattern,
    },
    /// `{ a }` or `{ a = 1 }`
    Shorthand {
        name: String,
        default: Option<Box<Expr>>,
    },
    /// `{ ...rest }`
    Rest(String),
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
    BitNot,
    Typeof,
    Void,
    Delete,
}

impl UnaryOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::BitNot => "~",
            Self::Typeof => "typeof",
            Self::Void => "void",
            Self::Delete => "delete",
        }
    }

    /// Keyword operators need a separating space before an identifier operand.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Typeof | Self::Void | Self::Delete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateOp {
    Incr,
    Decr,
}

impl UpdateOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incr => "++",
            Self::Decr => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    Shl,
    Shr,
    UShr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    In,
    InstanceOf,
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    BitAnd,
    BitOr,
    BitXor,
    LogicalAnd,
    LogicalOr,
    Nullish,
}

impl BinaryOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "**",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::In => "in",
            Self::InstanceOf => "instanceof",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::EqEqEq => "===",
            Self::NotEqEq => "!==",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Nullish => "??",
        }
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::In | Self::InstanceOf)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ExpAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    AndAssign,
    OrAssign,
    NullishAssign,
}

impl AssignOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::ExpAssign => "**=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::UShrAssign => ">>>=",
            Self::BitAndAssign => "&=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
            Self::AndAssign => "&&=",
            Self::OrAssign => "||=",
            Self::NullishAssign => "??=",
        }
    }
}
