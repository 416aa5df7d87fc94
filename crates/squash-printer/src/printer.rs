//! Compact printer.
//!
//! Renders statements and expressions with no optional whitespace. The tree
//! is concrete with respect to parentheses, so the printer never adds any:
//! a `Paren` node prints as `(...)` and nothing else does.

use crate::spacing::{is_plain_integer_lexeme, needs_space};
use squash_ast::{
    ArrayElem, Arrow, ArrowBody, ArrowParams, CatchClause, Class, ClassMember, Expr, ForHead,
    ForInit, Function, MethodKind, Module, Pattern, Stmt, SwitchCase, VarDecl,
};

pub struct Printer {
    pub(crate) output: String,
    /// The last token was a digits-only numeric literal
    pub(crate) after_integer: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            after_integer: false,
        }
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    /// Write one token, separating it from the previous one when needed.
    pub(crate) fn token(&mut self, s: &str) {
        if needs_space(&self.output, s, self.after_integer) {
            self.output.push(' ');
        }
        self.output.push_str(s);
        self.after_integer = false;
    }

    pub fn emit_module(&mut self, module: &Module) {
        self.emit_stmts(&module.body);
    }

    pub fn emit_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.emit_stmt(stmt);
        }
    }

    fn emit_block(&mut self, stmts: &[Stmt]) {
        self.token("{");
        self.emit_stmts(stmts);
        self.token("}");
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Empty => self.token(";"),
            Stmt::Block(body) => self.emit_block(body),
            Stmt::Expr(exprs) => {
                self.emit_comma_separated(exprs);
                self.token(";");
            }
            Stmt::Var(decl) => {
                self.emit_var_decl(decl);
                self.token(";");
            }
            Stmt::Function(func) => self.emit_function(func),
            Stmt::Class(class) => self.emit_class(class),
            Stmt::If { test, cons, alt } => {
                self.token("if");
                self.emit_parenthesized_head(test);
                self.emit_stmt(cons);
                if let Some(alt) = alt {
                    self.token("else");
                    self.emit_stmt(alt);
                }
            }
            Stmt::For {
                init,
                test,
                update,
                body,
            } => {
                self.token("for");
                self.token("(");
                match init {
                    Some(ForInit::Var(decl)) => self.emit_var_decl(decl),
                    Some(ForInit::Expr(exprs)) => self.emit_comma_separated(exprs),
                    None => {}
                }
                self.token(";");
                if let Some(test) = test {
                    self.emit_comma_separated(test);
                }
                self.token(";");
                if let Some(update) = update {
                    self.emit_comma_separated(update);
                }
                self.token(")");
                self.emit_stmt(body);
            }
            Stmt::ForIn { left, right, body } => {
                self.token("for");
                self.token("(");
                self.emit_for_head(left);
                self.token("in");
                self.emit_comma_separated(right);
                self.token(")");
                self.emit_stmt(body);
            }
            Stmt::ForOf {
                left,
                right,
                body,
                is_await,
            } => {
                self.token("for");
                if *is_await {
                    self.token("await");
                }
                self.token("(");
                self.emit_for_head(left);
                self.token("of");
                self.emit_expr(right);
                self.token(")");
                self.emit_stmt(body);
            }
            Stmt::While { test, body } => {
                self.token("while");
                self.emit_parenthesized_head(test);
                self.emit_stmt(body);
            }
            Stmt::DoWhile { body, test } => {
                self.token("do");
                self.emit_stmt(body);
                self.token("while");
                self.emit_parenthesized_head(test);
                self.token(";");
            }
            Stmt::Return(exprs) => {
                self.token("return");
                self.emit_comma_separated(exprs);
                self.token(";");
            }
            Stmt::Throw(exprs) => {
                self.token("throw");
                self.emit_comma_separated(exprs);
                self.token(";");
            }
            Stmt::Break(label) => {
                self.token("break");
                if let Some(label) = label {
                    self.token(label);
                }
                self.token(";");
            }
            Stmt::Continue(label) => {
                self.token("continue");
                if let Some(label) = label {
                    self.token(label);
                }
                self.token(";");
            }
            Stmt::Labeled { label, body } => {
                self.token(label);
                self.token(":");
                self.emit_stmt(body);
            }
            Stmt::Switch {
                discriminant,
                cases,
            } => {
                self.token("switch");
                self.emit_parenthesized_head(discriminant);
                self.token("{");
                for SwitchCase { test, body } in cases {
                    match test {
                        Some(test) => {
                            self.token("case");
                            self.emit_comma_separated(test);
                        }
                        None => self.token("default"),
                    }
                    self.token(":");
                    self.emit_stmts(body);
                }
                self.token("}");
            }
            Stmt::Try {
                block,
                handler,
                finalizer,
            } => {
                self.token("try");
                self.emit_block(block);
                if let Some(CatchClause { param, body }) = handler {
                    self.token("catch");
                    if let Some(param) = param {
                        self.token("(");
                        self.emit_pattern(param);
                        self.token(")");
                    }
                    self.emit_block(body);
                }
                if let Some(finalizer) = finalizer {
                    self.token("finally");
                    self.emit_block(finalizer);
                }
            }
            Stmt::With { object, body } => {
                self.token("with");
                self.emit_parenthesized_head(object);
                self.emit_stmt(body);
            }
            Stmt::Debugger => {
                self.token("debugger");
                self.token(";");
            }
        }
    }

    fn emit_parenthesized_head(&mut self, exprs: &[Expr]) {
        self.token("(");
        self.emit_comma_separated(exprs);
        self.token(")");
    }

    fn emit_var_decl(&mut self, decl: &VarDecl) {
        self.token(decl.kind.as_str());
        for (i, d) in decl.decls.iter().enumerate() {
            if i > 0 {
                self.token(",");
            }
            self.emit_pattern(&d.name);
            if let Some(init) = &d.init {
                self.token("=");
                self.emit_expr(init);
            }
        }
    }

    fn emit_for_head(&mut self, head: &ForHead) {
        match head {
            ForHead::Var(kind, pat) => {
                self.token(kind.as_str());
                self.emit_pattern(pat);
            }
            ForHead::Expr(expr) => self.emit_expr(expr),
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name) => self.token(name),
            Expr::This => self.token("this"),
            Expr::Super => self.token("super"),
            Expr::NewTarget => {
                self.token("new");
                self.token(".");
                self.token("target");
            }
            Expr::Num(lexeme) => {
                self.token(lexeme);
                self.after_integer = is_plain_integer_lexeme(lexeme);
            }
            Expr::Str(value) => self.emit_string_literal(value),
            Expr::Bool(value) => self.token(if *value { "true" } else { "false" }),
            Expr::Null => self.token("null"),
            Expr::Regex { pattern, flags } => {
                let text = format!("/{pattern}/{flags}");
                self.token(&text);
            }
            Expr::Template(template) => self.emit_template(template),
            Expr::TaggedTemplate { tag, quasi } => {
                self.emit_expr(tag);
                self.emit_template(quasi);
            }
            Expr::Array(elems) => {
                self.token("[");
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    match elem {
                        ArrayElem::Expr(e) => self.emit_expr(e),
                        ArrayElem::Spread(e) => {
                            self.token("...");
                            self.emit_expr(e);
                        }
                        ArrayElem::Hole => {}
                    }
                }
                // A trailing hole needs its own comma.
                if matches!(elems.last(), Some(ArrayElem::Hole)) {
                    self.token(",");
                }
                self.token("]");
            }
            Expr::Object(props) => {
                self.token("{");
                for (i, prop) in props.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    self.emit_property(prop);
                }
                self.token("}");
            }
            Expr::Function(func) => self.emit_function(func),
            Expr::Arrow(arrow) => self.emit_arrow(arrow),
            Expr::Class(class) => self.emit_class(class),
            Expr::Paren(items) => {
                self.token("(");
                self.emit_comma_separated(items);
                self.token(")");
            }
            Expr::Unary { op, arg } => {
                self.token(op.as_str());
                self.emit_expr(arg);
            }
            Expr::Update { op, prefix, arg } => {
                if *prefix {
                    self.token(op.as_str());
                    self.emit_expr(arg);
                } else {
                    self.emit_expr(arg);
                    self.token(op.as_str());
                }
            }
            Expr::Binary { op, left, right } => {
                self.emit_expr(left);
                self.token(op.as_str());
                self.emit_expr(right);
            }
            Expr::Assign { op, target, value } => {
                self.emit_expr(target);
                self.token(op.as_str());
                self.emit_expr(value);
            }
            Expr::Conditional { test, cons, alt } => {
                self.emit_expr(test);
                self.token("?");
                self.emit_expr(cons);
                self.token(":");
                self.emit_expr(alt);
            }
            Expr::Call {
                callee,
                args,
                optional,
            } => {
                self.emit_expr(callee);
                if *optional {
                    self.token("?.");
                }
                self.emit_arguments(args);
            }
            Expr::New { callee, args } => {
                self.token("new");
                self.emit_expr(callee);
                if let Some(args) = args {
                    self.emit_arguments(args);
                }
            }
            Expr::Member {
                object,
                prop,
                optional,
            } => {
                self.emit_expr(object);
                self.token(if *optional { "?." } else { "." });
                self.token(prop);
            }
            Expr::Index {
                object,
                index,
                optional,
            } => {
                self.emit_expr(object);
                if *optional {
                    self.token("?.");
                }
                self.token("[");
                self.emit_comma_separated(index);
                self.token("]");
            }
            Expr::Yield { arg, delegate } => {
                self.token("yield");
                if *delegate {
                    self.token("*");
                }
                if let Some(arg) = arg {
                    self.emit_expr(arg);
                }
            }
            Expr::Await(arg) => {
                self.token("await");
                self.emit_expr(arg);
            }
        }
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    pub(crate) fn emit_function(&mut self, func: &Function) {
        if func.is_async {
            self.token("async");
        }
        self.token("function");
        if func.is_generator {
            self.token("*");
        }
        if let Some(name) = &func.name {
            self.token(name);
        }
        self.emit_parameters(&func.params);
        self.emit_block(&func.body);
    }

    /// Parameter list and body of a method, after its key.
    pub(crate) fn emit_method_tail(&mut self, func: &Function) {
        self.emit_parameters(&func.params);
        self.emit_block(&func.body);
    }

    /// Modifiers and key of a method: `static`, `get`/`set`, `async`, `*`.
    pub(crate) fn emit_method_head(&mut self, kind: MethodKind, func: &Function) {
        match kind {
            MethodKind::Get => self.token("get"),
            MethodKind::Set => self.token("set"),
            MethodKind::Method => {
                if func.is_async {
                    self.token("async");
                }
                if func.is_generator {
                    self.token("*");
                }
            }
        }
    }

    fn emit_arrow(&mut self, arrow: &Arrow) {
        if arrow.is_async {
            self.token("async");
        }
        match &arrow.params {
            ArrowParams::Bare(name) => self.token(name),
            ArrowParams::List(params) => self.emit_parameters(params),
        }
        self.token("=>");
        match &arrow.body {
            ArrowBody::Block(body) => self.emit_block(body),
            ArrowBody::Expr(body) => self.emit_expr(body),
        }
    }

    fn emit_class(&mut self, class: &Class) {
        self.token("class");
        if let Some(name) = &class.name {
            self.token(name);
        }
        if let Some(super_class) = &class.super_class {
            self.token("extends");
            self.emit_expr(super_class);
        }
        self.token("{");
        for member in &class.members {
            match member {
                ClassMember::Method {
                    key,
                    kind,
                    is_static,
                    func,
                } => {
                    if *is_static {
                        self.token("static");
                    }
                    self.emit_method_head(*kind, func);
                    self.emit_prop_key(key);
                    self.emit_method_tail(func);
                }
                ClassMember::Field {
                    key,
                    is_static,
                    value,
                } => {
                    if *is_static {
                        self.token("static");
                    }
                    self.emit_prop_key(key);
                    if let Some(value) = value {
                        self.token("=");
                        self.emit_expr(value);
                    }
                    self.token(";");
                }
                ClassMember::StaticBlock(body) => {
                    self.token("static");
                    self.emit_block(body);
                }
            }
        }
        self.token("}");
    }

    // =========================================================================
    // Patterns
    // =========================================================================

    pub(crate) fn emit_pattern(&mut self, pat: &Pattern) {
        match pat {
            Pattern::Ident(name) => self.token(name),
            Pattern::Array(elems) => {
                self.token("[");
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    if let Some(elem) = elem {
                        self.emit_pattern(elem);
                    }
                }
                if matches!(elems.last(), Some(None)) {
                    self.token(",");
                }
                self.token("]");
            }
            Pattern::Object(props) => {
                self.token("{");
                for (i, prop) in props.iter().enumerate() {
                    if i > 0 {
                        self.token(",");
                    }
                    self.emit_pattern_property(prop);
                }
                self.token("}");
            }
            Pattern::Assign { target, default } => {
                self.emit_pattern(target);
                self.token("=");
                self.emit_expr(default);
            }
            Pattern::Rest(inner) => {
                self.token("...");
                self.emit_pattern(inner);
            }
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}
