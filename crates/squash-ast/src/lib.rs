//! Syntax tree for the squash minifier.
//!
//! The tree is produced by an external parser (usually handed over as JSON)
//! and is rewritten in place by `squash-optimizer`.
//!
//! # Architecture
//!
//! - [`node`]: the closed node taxonomy (`Module`, `Stmt`, `Expr`, patterns,
//!   functions, classes, operators)
//! - [`builders`]: constructor helpers used by rewrites and tests
//! - [`visit`]: shared and exclusive visitors with source-order traversal
//! - [`syntax`]: read-only queries over subtrees

pub mod builders;
pub mod node;
pub mod syntax;
pub mod visit;

pub use node::*;
pub use visit::{Visit, VisitMut};
