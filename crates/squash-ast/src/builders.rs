//! Builder helpers for tree construction.
//!
//! These mirror the shape of hand-written source so tests and callers can
//! assemble trees without spelling out every `Box::new`.

use crate::node::{
    Arg, Arrow, ArrowBody, ArrowParams, AssignOp, BinaryOp, Expr, Function, Pattern, Prop,
    PropKey, Stmt, UnaryOp, VarDecl, VarDeclarator, VarKind,
};

impl Expr {
    /// Create an identifier reference
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Create a numeric literal from its lexeme
    pub fn num(lexeme: impl Into<String>) -> Self {
        Self::Num(lexeme.into())
    }

    /// Create a string literal from its cooked value
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Create a call with plain arguments
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            args: args.into_iter().map(Arg::Expr).collect(),
            optional: false,
        }
    }

    /// Create `new callee(args)`; `None` omits the argument list entirely
    pub fn new_expr(callee: Self, args: Option<Vec<Self>>) -> Self {
        Self::New {
            callee: Box::new(callee),
            args: args.map(|args| args.into_iter().map(Arg::Expr).collect()),
        }
    }

    /// Create a property access `object.prop`
    pub fn member(object: Self, prop: impl Into<String>) -> Self {
        Self::Member {
            object: Box::new(object),
            prop: prop.into(),
            optional: false,
        }
    }

    /// Create an element access `object[index]`
    pub fn index(object: Self, index: Self) -> Self {
        Self::Index {
            object: Box::new(object),
            index: vec![index],
            optional: false,
        }
    }

    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, arg: Self) -> Self {
        Self::Unary {
            op,
            arg: Box::new(arg),
        }
    }

    /// Create `target = value`
    pub fn assign(target: Self, value: Self) -> Self {
        Self::Assign {
            op: AssignOp::Assign,
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn cond(test: Self, cons: Self, alt: Self) -> Self {
        Self::Conditional {
            test: Box::new(test),
            cons: Box::new(cons),
            alt: Box::new(alt),
        }
    }

    /// Wrap in parentheses
    pub fn paren(self) -> Self {
        Self::Paren(vec![self])
    }

    /// Create a parenthesized comma sequence
    pub const fn seq(items: Vec<Self>) -> Self {
        Self::Paren(items)
    }

    /// Create `void 0`
    pub fn void_0() -> Self {
        Self::unary(UnaryOp::Void, Self::num("0"))
    }

    /// Create an object literal with identifier keys
    pub fn object(props: Vec<(&str, Self)>) -> Self {
        Self::Object(
            props
                .into_iter()
                .map(|(key, value)| Prop::KeyValue {
                    key: PropKey::Ident(key.to_string()),
                    value,
                })
                .collect(),
        )
    }

    /// Create an anonymous function expression
    pub fn func(params: Vec<Pattern>, body: Vec<Stmt>) -> Self {
        Self::Function(Box::new(Function {
            name: None,
            params,
            body,
            is_async: false,
            is_generator: false,
        }))
    }

    /// Create a named function expression
    pub fn named_func(name: impl Into<String>, params: Vec<Pattern>, body: Vec<Stmt>) -> Self {
        Self::Function(Box::new(Function {
            name: Some(name.into()),
            params,
            body,
            is_async: false,
            is_generator: false,
        }))
    }

    /// Create a block-bodied arrow function
    pub fn arrow(params: Vec<Pattern>, body: Vec<Stmt>) -> Self {
        Self::Arrow(Box::new(Arrow {
            params: ArrowParams::List(params),
            body: ArrowBody::Block(body),
            is_async: false,
        }))
    }

    /// Create an arrow function with a concise body
    pub fn arrow_expr(params: ArrowParams, body: Self) -> Self {
        Self::Arrow(Box::new(Arrow {
            params,
            body: ArrowBody::Expr(Box::new(body)),
            is_async: false,
        }))
    }
}

impl Stmt {
    /// Create an expression statement holding one expression
    pub fn expr(expr: Expr) -> Self {
        Self::Expr(vec![expr])
    }

    /// Create `return expr;`
    pub fn ret(expr: Expr) -> Self {
        Self::Return(vec![expr])
    }

    /// Create a bare `return;`
    pub const fn ret_void() -> Self {
        Self::Return(Vec::new())
    }

    pub const fn block(stmts: Vec<Self>) -> Self {
        Self::Block(stmts)
    }

    pub fn if_else(test: Expr, cons: Self, alt: Option<Self>) -> Self {
        Self::If {
            test: vec![test],
            cons: Box::new(cons),
            alt: alt.map(Box::new),
        }
    }

    /// Create a single-declarator `var`/`let`/`const`
    pub fn var(kind: VarKind, name: impl Into<String>, init: Option<Expr>) -> Self {
        Self::Var(VarDecl {
            kind,
            decls: vec![VarDeclarator {
                name: Pattern::Ident(name.into()),
                init,
            }],
        })
    }

    /// Create a function declaration
    pub fn func(name: impl Into<String>, params: Vec<Pattern>, body: Vec<Self>) -> Self {
        Self::Function(Function {
            name: Some(name.into()),
            params,
            body,
            is_async: false,
            is_generator: false,
        })
    }
}

impl Pattern {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Attach a default value
    pub fn with_default(self, default: Expr) -> Self {
        Self::Assign {
            target: Box::new(self),
            default: Box::new(default),
        }
    }
}

// =========================================================================
// Node introspection
// =========================================================================

impl Stmt {
    /// Short node kind name, used in trace output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Block(_) => "Block",
            Self::Expr(_) => "ExpressionStatement",
            Self::Var(_) => "VariableStatement",
            Self::Function(_) => "FunctionDeclaration",
            Self::Class(_) => "ClassDeclaration",
            Self::If { .. } => "IfStatement",
            Self::For { .. } => "ForStatement",
            Self::ForIn { .. } => "ForInStatement",
            Self::ForOf { .. } => "ForOfStatement",
            Self::While { .. } => "WhileStatement",
            Self::DoWhile { .. } => "DoStatement",
            Self::Return(_) => "ReturnStatement",
            Self::Throw(_) => "ThrowStatement",
            Self::Break(_) => "BreakStatement",
            Self::Continue(_) => "ContinueStatement",
            Self::Labeled { .. } => "LabeledStatement",
            Self::Switch { .. } => "SwitchStatement",
            Self::Try { .. } => "TryStatement",
            Self::With { .. } => "WithStatement",
            Self::Debugger => "DebuggerStatement",
        }
    }

    /// `let`, `const`, class and function declarations are scoped to the
    /// enclosing block and cannot stand alone as the body of `if`/loops.
    #[must_use]
    pub const fn is_lexical_declaration(&self) -> bool {
        match self {
            Self::Var(decl) => !matches!(decl.kind, VarKind::Var),
            Self::Function(_) | Self::Class(_) => true,
            _ => false,
        }
    }
}

impl Expr {
    /// Short node kind name, used in trace output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "Identifier",
            Self::This => "This",
            Self::Super => "Super",
            Self::NewTarget => "NewTarget",
            Self::Num(_) => "NumericLiteral",
            Self::Str(_) => "StringLiteral",
            Self::Bool(_) => "BooleanLiteral",
            Self::Null => "NullLiteral",
            Self::Regex { .. } => "RegularExpressionLiteral",
            Self::Template(_) => "TemplateLiteral",
            Self::TaggedTemplate { .. } => "TaggedTemplate",
            Self::Array(_) => "ArrayLiteral",
            Self::Object(_) => "ObjectLiteral",
            Self::Function(_) => "FunctionExpression",
            Self::Arrow(_) => "ArrowFunction",
            Self::Class(_) => "ClassExpression",
            Self::Paren(_) => "ParenthesizedExpression",
            Self::Unary { .. } => "UnaryExpression",
            Self::Update { .. } => "UpdateExpression",
            Self::Binary { .. } => "BinaryExpression",
            Self::Assign { .. } => "AssignmentExpression",
            Self::Conditional { .. } => "ConditionalExpression",
            Self::Call { .. } => "CallExpression",
            Self::New { .. } => "NewExpression",
            Self::Member { .. } => "MemberExpression",
            Self::Index { .. } => "ElementAccessExpression",
            Self::Yield { .. } => "YieldExpression",
            Self::Await(_) => "AwaitExpression",
        }
    }
}
