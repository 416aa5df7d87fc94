//! Helper methods for the printer: lists, properties, keys and literals.

use super::printer::Printer;
use squash_ast::{Arg, Expr, Pattern, PatternProp, Prop, PropKey, Template};
use std::fmt::Write as _;

impl Printer {
    pub(crate) fn emit_comma_separated(&mut self, exprs: &[Expr]) {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.token(",");
            }
            self.emit_expr(expr);
        }
    }

    pub(crate) fn emit_arguments(&mut self, args: &[Arg]) {
        self.token("(");
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.token(",");
            }
            if let Arg::Spread(_) = arg {
                self.token("...");
            }
            self.emit_expr(arg.expr());
        }
        self.token(")");
    }

    pub(crate) fn emit_parameters(&mut self, params: &[Pattern]) {
        self.token("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.token(",");
            }
            self.emit_pattern(param);
        }
        self.token(")");
    }

    pub(crate) fn emit_property(&mut self, prop: &Prop) {
        match prop {
            Prop::KeyValue { key, value } => {
                self.emit_prop_key(key);
                self.token(":");
                self.emit_expr(value);
            }
            Prop::Shorthand(name) => self.token(name),
            Prop::Method { key, kind, func } => {
                self.emit_method_head(*kind, func);
                self.emit_prop_key(key);
                self.emit_method_tail(func);
            }
            Prop::Spread(expr) => {
                self.token("...");
                self.emit_expr(expr);
            }
        }
    }

    pub(crate) fn emit_pattern_property(&mut self, prop: &PatternProp) {
        match prop {
            PatternProp::KeyValue { key, value } => {
                self.emit_prop_key(key);
                self.token(":");
                self.emit_pattern(value);
            }
            PatternProp::Shorthand { name, default } => {
                self.token(name);
                if let Some(default) = default {
                    self.token("=");
                    self.emit_expr(default);
                }
            }
            PatternProp::Rest(name) => {
                self.token("...");
                self.token(name);
            }
        }
    }

    pub(crate) fn emit_prop_key(&mut self, key: &PropKey) {
        match key {
            PropKey::Ident(name) => self.token(name),
            PropKey::Str(value) => self.emit_string_literal(value),
            PropKey::Num(lexeme) => self.token(lexeme),
            PropKey::Computed(expr) => {
                self.token("[");
                self.emit_expr(expr);
                self.token("]");
            }
            PropKey::Private(name) => {
                let text = format!("#{name}");
                self.token(&text);
            }
        }
    }

    pub(crate) fn emit_template(&mut self, template: &Template) {
        let mut text = String::from("`");
        for (i, quasi) in template.quasis.iter().enumerate() {
            text.push_str(quasi);
            match template.exprs.get(i) {
                Some(expr) => {
                    text.push_str("${");
                    self.token(&text);
                    self.emit_expr(expr);
                    text = String::from("}");
                }
                None => break,
            }
        }
        text.push('`');
        self.token(&text);
    }

    /// Write a string literal with whichever quote needs fewer escapes.
    pub(crate) fn emit_string_literal(&mut self, value: &str) {
        let quote = pick_quote(value);
        let mut text = String::with_capacity(value.len() + 2);
        text.push(quote);
        write_escaped(&mut text, value, quote);
        text.push(quote);
        self.token(&text);
    }
}

/// `"` unless the value holds more double quotes than single quotes.
pub(crate) fn pick_quote(value: &str) -> char {
    let doubles = value.chars().filter(|&c| c == '"').count();
    let singles = value.chars().filter(|&c| c == '\'').count();
    if doubles > singles { '\'' } else { '"' }
}

pub(crate) fn write_escaped(out: &mut String, value: &str, quote: char) {
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            // `\0` followed by a digit would read as a legacy octal escape
            '\0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push_str("\\0"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7F' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            _ => out.push(c),
        }
    }
}
