//! Scope and binding model.
//!
//! [`ScopeTree::build`] walks a module once, read-only, and records one scope
//! per function and block-like construct together with every declaration and
//! its resolved reference count. The tree is never persisted: the optimizer
//! rebuilds it whenever it needs scope information for the current shape of
//! the module.
//!
//! [`ScopeWalker`] replays the same scope structure over a mutable module so
//! that renaming and dead-binding elimination can act on what the tree found.

mod error;
pub mod scope;
mod state;
pub mod walk_mut;

pub use error::ScopeBuildError;
pub use scope::{Binding, BindingId, BindingKind, Scope, ScopeId, ScopeKind, ScopeTree};
pub use walk_mut::{ScopeHooks, ScopeWalker};
