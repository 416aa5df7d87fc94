//! Compact JavaScript printer.
//!
//! Turns an optimized tree back into source text with no optional
//! whitespace, so that output length is a direct measure of the optimizer's
//! work.

mod printer;
mod printer_helpers;
pub mod spacing;

pub use printer::Printer;

use squash_ast::{Expr, Module, Stmt};

#[must_use]
pub fn print_module(module: &Module) -> String {
    let mut printer = Printer::new();
    printer.emit_module(module);
    printer.finish()
}

#[must_use]
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::new();
    printer.emit_stmt(stmt);
    printer.finish()
}

#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    let mut printer = Printer::new();
    printer.emit_expr(expr);
    printer.finish()
}
