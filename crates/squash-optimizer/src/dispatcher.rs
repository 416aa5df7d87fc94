//! Pass dispatcher.
//!
//! A single post-order traversal. Every node is rewritten by each enabled
//! pass that applies to its kind after its children have been rewritten, so a
//! parent always sees the final shape of its subtree. Parentheses around
//! children are settled last: removed where `UNWRAP_PARENS` allows it, and
//! inserted wherever an earlier rewrite left a child its slot cannot hold.
//!
//! Statement-list normalization runs on every list regardless of options.

use crate::folding::{
    combine_expression_runs, concise_body, if_to_conditional, normalize_statements,
    unwrap_single_statement_block,
};
use crate::literals::{KeyContext, canonicalize_key, canonicalize_number, shorten_literal};
use crate::options::OptionSet;
use crate::precedence::{
    Level, Slot, parenthesize_for, rewrap_arrow_body, rewrap_if_ambiguous, unwrap_parens_in,
};
use squash_ast::syntax::{
    class_references_name, function_references_name, has_hoistable_declaration, receiver_usage,
    starts_with_statement_keyword_or_brace,
};
use squash_ast::visit::{self, VisitMut};
use squash_ast::{
    Arg, ArrayElem, Arrow, ArrowBody, ArrowParams, Class, ClassMember, Expr, ForHead, ForInit,
    Function, Module, Pattern, PatternProp, Prop, PropKey, Stmt, UnaryOp, VarDecl,
};
use rustc_hash::FxHashSet;
use tracing::trace;

pub struct Dispatcher {
    options: OptionSet,
    /// No binding named `undefined` exists anywhere in the program.
    undefined_is_free: bool,
    rewrites: usize,
    /// Depth of assignment targets, update operands, `delete` operands and
    /// `for-in`/`for-of` heads being walked.
    target_depth: u32,
    /// Depth of `for (init; ...)` initializers being walked.
    for_init_depth: u32,
    /// The next expression visited is the callee of `new`, possibly inside
    /// one pair of parentheses.
    new_callee: bool,
    /// The next expression visited sits on the member chain of a `new`
    /// callee, where a call would capture the constructor's arguments.
    new_chain: bool,
}

impl Dispatcher {
    #[must_use]
    pub const fn new(options: OptionSet, undefined_is_free: bool) -> Self {
        Self {
            options,
            undefined_is_free,
            rewrites: 0,
            target_depth: 0,
            for_init_depth: 0,
            new_callee: false,
            new_chain: false,
        }
    }

    /// Rewrite `module` in place and return the number of mutations made.
    pub fn run(mut self, module: &mut Module) -> usize {
        self.visit_module(module);
        self.rewrites
    }

    fn enabled(&self, pass: OptionSet) -> bool {
        self.options.contains(pass)
    }

    fn unwrap_enabled(&self) -> bool {
        // `in` inside a for initializer only parses when parenthesized.
        self.enabled(OptionSet::UNWRAP_PARENS) && self.for_init_depth == 0
    }

    fn record(&mut self, pass: &'static str, node: &'static str) {
        self.rewrites += 1;
        trace!(pass, node, "rewrite");
    }

    // =========================================================================
    // Parentheses
    // =========================================================================

    fn settle(&mut self, child: &mut Expr, slot: Slot) {
        if self.unwrap_enabled() && unwrap_parens_in(child, slot) {
            self.record("unwrap-parens", child.kind_name());
        }
        if parenthesize_for(child, slot) {
            self.record("parenthesize", "ParenthesizedExpression");
        }
    }

    fn settle_args(&mut self, args: &mut [Arg]) {
        for arg in args {
            match arg {
                Arg::Expr(expr) | Arg::Spread(expr) => self.settle(expr, Slot::at(Level::Assign)),
            }
        }
    }

    /// Splice parenthesized groups into a comma-list slot.
    ///
    /// At the start of a statement a group whose first item would be read as
    /// a block or declaration keeps its parentheses.
    fn splice(&mut self, list: &mut Vec<Expr>, statement_start: bool) {
        if !self.unwrap_enabled() || !list.iter().any(|expr| matches!(expr, Expr::Paren(_))) {
            return;
        }
        let mut out = Vec::with_capacity(list.len());
        for item in list.drain(..) {
            match item {
                Expr::Paren(inner)
                    if !inner.is_empty()
                        && !(statement_start
                            && out.is_empty()
                            && inner.first().is_some_and(starts_with_statement_keyword_or_brace)) =>
                {
                    out.extend(inner);
                    self.rewrites += 1;
                    trace!(pass = "unwrap-parens", node = "ParenthesizedExpression", "splice");
                }
                other => out.push(other),
            }
        }
        *list = out;
    }

    fn settle_children(&mut self, expr: &mut Expr, new_chain: bool) {
        // A call on the member chain of a `new` callee would take over the
        // constructor's argument list.
        let chain_base = if new_chain {
            Slot::chain_base(Level::Member)
        } else {
            Slot::chain_base(Level::Call)
        };
        match expr {
            Expr::Unary { arg, .. } | Expr::Await(arg) => self.settle(arg, Slot::at(Level::Unary)),
            Expr::Update { prefix, arg, .. } => {
                let slot = if *prefix {
                    Slot::at(Level::New)
                } else {
                    Slot::leftmost(Level::New)
                };
                self.settle(arg, slot);
            }
            Expr::Binary { op, left, right } => {
                let (left_slot, right_slot) = Slot::binary_operands(*op);
                self.settle(left, left_slot);
                self.settle(right, right_slot);
            }
            Expr::Assign { target, value, .. } => {
                self.settle(target, Slot::leftmost(Level::Call));
                self.settle(value, Slot::at(Level::Assign));
            }
            Expr::Conditional { test, cons, alt } => {
                self.settle(test, Slot::leftmost(Level::Coalesce));
                self.settle(cons, Slot::at(Level::Assign));
                self.settle(alt, Slot::at(Level::Assign));
            }
            Expr::Call { callee, args, .. } => {
                self.settle(callee, chain_base);
                self.settle_args(args);
            }
            Expr::New { callee, args } => {
                self.settle(callee, Slot::chain_base(Level::Member));
                if let Some(args) = args {
                    self.settle_args(args);
                }
            }
            Expr::Member { object, .. } => self.settle(object, chain_base),
            Expr::Index { object, index, .. } => {
                self.settle(object, chain_base);
                self.splice(index, false);
            }
            Expr::TaggedTemplate { tag, quasi } => {
                self.settle(tag, chain_base);
                for expr in &mut quasi.exprs {
                    self.settle(expr, Slot::at(Level::Sequence));
                }
            }
            Expr::Template(template) => {
                for expr in &mut template.exprs {
                    self.settle(expr, Slot::at(Level::Sequence));
                }
            }
            Expr::Array(elems) => {
                for elem in elems {
                    match elem {
                        ArrayElem::Expr(expr) | ArrayElem::Spread(expr) => {
                            self.settle(expr, Slot::at(Level::Assign));
                        }
                        ArrayElem::Hole => {}
                    }
                }
            }
            Expr::Paren(items) => self.splice(items, false),
            Expr::Yield { arg: Some(arg), .. } => self.settle(arg, Slot::at(Level::Assign)),
            Expr::Arrow(arrow) => {
                if let ArrowBody::Expr(body) = &mut arrow.body {
                    self.settle(body, Slot::arrow_body());
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // Expression passes
    // =========================================================================

    fn rewrite_expr(&mut self, expr: &mut Expr, new_callee: bool, new_chain: bool) {
        if self.enabled(OptionSet::LITERALS) {
            self.literals(expr);
        }
        if self.enabled(OptionSet::REMOVE_EXPRESSION_NAMES) {
            self.remove_expression_name(expr);
        }
        if self.enabled(OptionSet::FUNCTION_EXPRESSION_TO_ARROW_FUNC) && !new_callee {
            self.function_to_arrow(expr);
        }
        if self.enabled(OptionSet::ARROW_FN)
            && let Expr::Arrow(arrow) = expr
        {
            self.arrow_fn(arrow);
        }
        self.settle_children(expr, new_chain);
    }

    fn literals(&mut self, expr: &mut Expr) {
        if self.target_depth > 0 && matches!(expr, Expr::Ident(_)) {
            return;
        }
        if let Some(short) = shorten_literal(expr, self.undefined_is_free) {
            let node = expr.kind_name();
            *expr = short;
            self.record("literals", node);
        }
    }

    fn remove_expression_name(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Function(func) => {
                if let Some(name) = &func.name
                    && !function_references_name(func, name)
                {
                    func.name = None;
                    self.record("remove-expression-names", "FunctionExpression");
                }
            }
            Expr::Class(class) => {
                if let Some(name) = &class.name
                    && !class_references_name(class, name)
                {
                    class.name = None;
                    self.record("remove-expression-names", "ClassExpression");
                }
            }
            _ => {}
        }
    }

    fn function_to_arrow(&mut self, expr: &mut Expr) {
        let Expr::Function(func) = expr else {
            return;
        };
        if func.name.is_some()
            || func.is_generator
            || receiver_usage(func).any()
            || has_duplicate_params(&func.params)
        {
            return;
        }
        let arrow = Arrow {
            params: ArrowParams::List(std::mem::take(&mut func.params)),
            body: ArrowBody::Block(std::mem::take(&mut func.body)),
            is_async: func.is_async,
        };
        *expr = Expr::Arrow(Box::new(arrow));
        self.record("function-expression-to-arrow-func", "FunctionExpression");
    }

    fn arrow_fn(&mut self, arrow: &mut Arrow) {
        // A hoisted declaration in the body leaves the whole arrow alone.
        if matches!(&arrow.body, ArrowBody::Block(body) if has_hoistable_declaration(body)) {
            return;
        }
        if let ArrowParams::List(params) = &mut arrow.params
            && let [Pattern::Ident(name)] = params.as_mut_slice()
        {
            arrow.params = ArrowParams::Bare(std::mem::take(name));
            self.record("arrow-fn", "ArrowFunction");
        }
        // A concise body inside a for initializer cannot hold a bare `in`.
        if self.for_init_depth > 0 {
            return;
        }
        if let ArrowBody::Block(body) = &arrow.body
            && let Some(mut concise) = concise_body(body)
        {
            rewrap_arrow_body(&mut concise);
            arrow.body = ArrowBody::Expr(Box::new(concise));
            self.record("arrow-fn", "ArrowFunction");
        }
    }

    fn rewrite_key(&mut self, key: &mut PropKey, context: KeyContext) {
        if self.enabled(OptionSet::KEYS) && canonicalize_key(key, context) {
            self.record("keys", "PropertyName");
        }
        match key {
            PropKey::Num(lexeme) if self.enabled(OptionSet::LITERALS) => {
                if let Some(canonical) = canonicalize_number(lexeme) {
                    *lexeme = canonical;
                    self.record("literals", "PropertyName");
                }
            }
            PropKey::Computed(expr) => self.settle(expr, Slot::at(Level::Assign)),
            _ => {}
        }
    }

    // =========================================================================
    // Statement passes
    // =========================================================================

    fn rewrite_stmt(&mut self, stmt: &mut Stmt) {
        self.settle_statement_slots(stmt);

        if self.enabled(OptionSet::REMOVE_DEBUGGER) && matches!(stmt, Stmt::Debugger) {
            *stmt = Stmt::Empty;
            self.record("remove-debugger", "DebuggerStatement");
        }

        if self.enabled(OptionSet::BLOCKS_TO_STATEMENT) {
            self.flatten_bodies(stmt);
        }

        if self.enabled(OptionSet::IF_TO_CONDITIONAL)
            && let Stmt::If {
                test,
                cons,
                alt: Some(alt),
            } = stmt
            && let Some(folded) = if_to_conditional(test, cons, alt)
        {
            *stmt = folded;
            self.record("if-to-conditional", "IfStatement");
        }

        if let Stmt::Expr(list) = stmt
            && let Some(first) = list.first_mut()
            && rewrap_if_ambiguous(first)
        {
            self.record("parenthesize", "ExpressionStatement");
        }
    }

    fn settle_statement_slots(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Expr(list) => self.splice(list, true),
            Stmt::Return(list)
            | Stmt::Throw(list)
            | Stmt::If { test: list, .. }
            | Stmt::While { test: list, .. }
            | Stmt::DoWhile { test: list, .. }
            | Stmt::ForIn { right: list, .. }
            | Stmt::With { object: list, .. } => self.splice(list, false),
            Stmt::For { test, update, .. } => {
                for list in [test, update].into_iter().flatten() {
                    self.splice(list, false);
                }
            }
            Stmt::ForOf { right, .. } => self.settle(right, Slot::at(Level::Assign)),
            Stmt::Switch {
                discriminant,
                cases,
            } => {
                self.splice(discriminant, false);
                for case in cases {
                    if let Some(test) = &mut case.test {
                        self.splice(test, false);
                    }
                }
            }
            _ => {}
        }
    }

    fn flatten_body(&mut self, body: &mut Stmt, before_else: bool) {
        while unwrap_single_statement_block(body, before_else) {
            self.record("blocks-to-statement", "Block");
        }
    }

    fn flatten_bodies(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::If { cons, alt, .. } => {
                self.flatten_body(cons, alt.is_some());
                if let Some(alt) = alt {
                    self.flatten_body(alt, false);
                }
            }
            Stmt::For { body, .. }
            | Stmt::ForIn { body, .. }
            | Stmt::ForOf { body, .. }
            | Stmt::While { body, .. }
            | Stmt::DoWhile { body, .. }
            | Stmt::Labeled { body, .. }
            | Stmt::With { body, .. } => self.flatten_body(body, false),
            _ => {}
        }
    }

    fn rewrite_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        if self.enabled(OptionSet::BLOCKS_TO_STATEMENT) {
            for stmt in stmts.iter_mut() {
                self.flatten_body(stmt, false);
            }
        }

        let removed = normalize_statements(stmts);
        if removed > 0 {
            self.rewrites += removed;
            trace!(pass = "normalize", removed, "statement list");
        }

        if self.enabled(OptionSet::COMBINE_EXPRESSION_RUNS) {
            let folded = combine_expression_runs(stmts);
            if folded > 0 {
                self.rewrites += folded;
                trace!(pass = "combine-expression-runs", folded, "statement list");
            }
        }
    }

    fn drop_trailing_return(&mut self, body: &mut Vec<Stmt>) {
        if self.enabled(OptionSet::REMOVE_LAST_EMPTY_RETURN)
            && matches!(body.last(), Some(Stmt::Return(list)) if list.is_empty())
        {
            body.pop();
            self.record("remove-last-empty-return", "ReturnStatement");
        }
    }
}

fn has_duplicate_params(params: &[Pattern]) -> bool {
    let mut seen = FxHashSet::default();
    params.iter().any(|param| match param {
        Pattern::Ident(name) => !seen.insert(name.as_str()),
        _ => false,
    })
}

impl VisitMut for Dispatcher {
    fn visit_stmts(&mut self, stmts: &mut Vec<Stmt>) {
        visit::walk_stmts_mut(self, stmts);
        self.rewrite_stmts(stmts);
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::For {
                init,
                test,
                update,
                body,
            } => {
                if let Some(init) = init {
                    self.for_init_depth += 1;
                    match init {
                        ForInit::Var(decl) => self.visit_var_decl(decl),
                        ForInit::Expr(list) => {
                            for expr in list {
                                self.visit_expr(expr);
                            }
                        }
                    }
                    self.for_init_depth -= 1;
                }
                for expr in [test, update].into_iter().flatten().flatten() {
                    self.visit_expr(expr);
                }
                self.visit_stmt(body);
            }
            _ => visit::walk_stmt_mut(self, stmt),
        }
        self.rewrite_stmt(stmt);
    }

    fn visit_var_decl(&mut self, decl: &mut VarDecl) {
        visit::walk_var_decl_mut(self, decl);
        for declarator in &mut decl.decls {
            if let Some(init) = &mut declarator.init {
                self.settle(init, Slot::at(Level::Assign));
            }
        }
    }

    fn visit_for_head(&mut self, head: &mut ForHead) {
        match head {
            ForHead::Var(_, pattern) => self.visit_pattern(pattern),
            ForHead::Expr(target) => {
                self.target_depth += 1;
                self.visit_expr(target);
                self.target_depth -= 1;
            }
        }
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        let new_callee = std::mem::take(&mut self.new_callee);
        let new_chain = std::mem::take(&mut self.new_chain);
        match expr {
            Expr::Assign { target, value, .. } => {
                self.target_depth += 1;
                self.visit_expr(target);
                self.target_depth -= 1;
                self.visit_expr(value);
            }
            Expr::Update { arg, .. }
            | Expr::Unary {
                op: UnaryOp::Delete,
                arg,
            } => {
                self.target_depth += 1;
                self.visit_expr(arg);
                self.target_depth -= 1;
            }
            Expr::New { callee, args } => {
                self.new_callee = true;
                self.new_chain = true;
                self.visit_expr(callee);
                self.new_callee = false;
                self.new_chain = false;
                for arg in args.iter_mut().flatten() {
                    match arg {
                        Arg::Expr(expr) | Arg::Spread(expr) => self.visit_expr(expr),
                    }
                }
            }
            Expr::Member { object, .. } if new_chain => {
                self.new_chain = true;
                self.visit_expr(object);
                self.new_chain = false;
            }
            Expr::Index { object, index, .. } if new_chain => {
                self.new_chain = true;
                self.visit_expr(object);
                self.new_chain = false;
                for expr in index {
                    self.visit_expr(expr);
                }
            }
            Expr::TaggedTemplate { tag, quasi } if new_chain => {
                self.new_chain = true;
                self.visit_expr(tag);
                self.new_chain = false;
                for expr in &mut quasi.exprs {
                    self.visit_expr(expr);
                }
            }
            Expr::Paren(items) if new_callee && items.len() == 1 => {
                self.new_callee = true;
                self.visit_expr(&mut items[0]);
                self.new_callee = false;
            }
            _ => visit::walk_expr_mut(self, expr),
        }
        self.rewrite_expr(expr, new_callee, new_chain);
    }

    fn visit_function(&mut self, func: &mut Function) {
        visit::walk_function_mut(self, func);
        self.drop_trailing_return(&mut func.body);
    }

    fn visit_arrow(&mut self, arrow: &mut Arrow) {
        visit::walk_arrow_mut(self, arrow);
        if let ArrowBody::Block(body) = &mut arrow.body {
            self.drop_trailing_return(body);
        }
    }

    fn visit_class(&mut self, class: &mut Class) {
        visit::walk_class_mut(self, class);
        if let Some(super_class) = &mut class.super_class {
            self.settle(super_class, Slot::chain_base(Level::Call));
        }
        for member in &mut class.members {
            match member {
                ClassMember::Method { key, .. } => self.rewrite_key(key, KeyContext::Class),
                ClassMember::Field { key, value, .. } => {
                    self.rewrite_key(key, KeyContext::Class);
                    if let Some(value) = value {
                        self.settle(value, Slot::at(Level::Assign));
                    }
                }
                ClassMember::StaticBlock(_) => {}
            }
        }
    }

    fn visit_prop(&mut self, prop: &mut Prop) {
        visit::walk_prop_mut(self, prop);
        match prop {
            Prop::KeyValue { key, value } => {
                self.rewrite_key(key, KeyContext::Object);
                self.settle(value, Slot::at(Level::Assign));
            }
            Prop::Method { key, .. } => self.rewrite_key(key, KeyContext::Object),
            Prop::Spread(expr) => self.settle(expr, Slot::at(Level::Assign)),
            Prop::Shorthand(_) => {}
        }
    }

    fn visit_pattern(&mut self, pat: &mut Pattern) {
        visit::walk_pattern_mut(self, pat);
        if let Pattern::Assign { default, .. } = pat {
            self.settle(default, Slot::at(Level::Assign));
        }
    }

    fn visit_pattern_prop(&mut self, prop: &mut PatternProp) {
        visit::walk_pattern_prop_mut(self, prop);
        match prop {
            PatternProp::KeyValue { key, .. } => self.rewrite_key(key, KeyContext::Pattern),
            PatternProp::Shorthand {
                default: Some(default),
                ..
            } => self.settle(default, Slot::at(Level::Assign)),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/dispatcher.rs"]
mod tests;
