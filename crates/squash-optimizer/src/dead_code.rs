//! Dead binding removal.
//!
//! Drops variable declarators and function declarations whose binding is never
//! referenced. Only bindings inside functions are candidates; module-level
//! names may be read by other scripts. Removing one binding can leave
//! another unreferenced, so the pass rebuilds the scope tree and repeats
//! until a round removes nothing.

use squash_ast::syntax::is_side_effect_free;
use squash_ast::{Module, Pattern, Stmt};
use squash_binder::{BindingKind, ScopeBuildError, ScopeHooks, ScopeId, ScopeTree, ScopeWalker};
use squash_common::limits::MAX_DEAD_CODE_ROUNDS;
use tracing::{debug, trace};

#[derive(Default)]
struct DeadBindingHooks {
    removed: usize,
}

/// Check if `name`, seen from `scope`, resolves to a removable binding.
fn is_removable(tree: &ScopeTree, scope: ScopeId, name: &str) -> bool {
    let Some(owner) = tree.resolve(scope, name) else {
        return false;
    };
    owner != ScopeId::ROOT
        && tree.is_function_nested(owner)
        && !tree.scope(owner).dynamic
        && tree.is_dead(owner, name)
        && !redeclares_parameter(tree, owner, name)
}

/// Check if `name` in `owner` is also a parameter or catch parameter.
///
/// A `var` redeclaring one assigns the parameter, which `arguments` or the
/// enclosing function can still observe.
fn redeclares_parameter(tree: &ScopeTree, owner: ScopeId, name: &str) -> bool {
    tree.scope(owner).bindings.get(name).is_some_and(|ids| {
        ids.iter().any(|&id| {
            matches!(
                tree.binding(id).kind,
                BindingKind::Param | BindingKind::CatchParam
            )
        })
    })
}

impl ScopeHooks for DeadBindingHooks {
    fn stmts(&mut self, tree: &ScopeTree, scope: ScopeId, stmts: &mut Vec<Stmt>) {
        let before = self.removed;
        stmts.retain_mut(|stmt| match stmt {
            Stmt::Var(decl) => {
                let count = decl.decls.len();
                decl.decls.retain(|d| {
                    let Pattern::Ident(name) = &d.name else {
                        return true;
                    };
                    let pure = d.init.as_ref().is_none_or(is_side_effect_free);
                    !(pure && is_removable(tree, scope, name))
                });
                self.removed += count - decl.decls.len();
                !decl.decls.is_empty()
            }
            Stmt::Function(func) => {
                let dead = func
                    .name
                    .as_deref()
                    .is_some_and(|name| is_removable(tree, scope, name));
                if dead {
                    self.removed += 1;
                }
                !dead
            }
            _ => true,
        });
        if self.removed > before {
            trace!(scope = scope.0, removed = self.removed - before, "dead bindings");
        }
    }
}

/// Remove unreferenced function-local bindings until none are left.
///
/// Returns the number of declarators and declarations removed.
pub fn remove_dead_bindings(module: &mut Module) -> Result<usize, ScopeBuildError> {
    let mut total = 0;
    for round in 0..MAX_DEAD_CODE_ROUNDS {
        let tree = ScopeTree::build(module)?;
        let mut hooks = DeadBindingHooks::default();
        ScopeWalker::new(&tree, &mut hooks).walk_module(module);
        trace!(round, removed = hooks.removed, "dead binding round");
        if hooks.removed == 0 {
            break;
        }
        total += hooks.removed;
    }
    debug!(removed = total, "remove dead bindings");
    Ok(total)
}

#[cfg(test)]
#[path = "../tests/dead_code.rs"]
mod tests;
