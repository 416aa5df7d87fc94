//! Identifier renaming.
//!
//! Bindings are visited most-referenced first and each takes the shortest
//! generated name that no related scope currently uses. Related means the
//! binding's own scope, its ancestors and its descendants: sibling subtrees
//! never see each other's bindings, so they reuse the same short names.

use rustc_hash::{FxHashMap, FxHashSet};
use squash_ast::Module;
use squash_binder::{BindingKind, ScopeBuildError, ScopeHooks, ScopeId, ScopeTree, ScopeWalker};
use squash_common::is_unrenamable_name;
use tracing::{debug, trace};

const NAME_START: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_$";
const NAME_CONTINUE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_$0123456789";

/// The `index`-th generated identifier: `a`, `b`, ... `$`, `aa`, `ba`, ...
///
/// Names never get shorter as `index` grows.
#[must_use]
pub fn generate_short_name(index: usize) -> String {
    let mut name = String::with_capacity(4);
    name.push(char::from(NAME_START[index % NAME_START.len()]));
    let mut rest = index / NAME_START.len();
    while rest > 0 {
        rest -= 1;
        name.push(char::from(NAME_CONTINUE[rest % NAME_CONTINUE.len()]));
        rest /= NAME_CONTINUE.len();
    }
    name
}

/// New names keyed by declaring scope, then by old name.
type RenamePlan = FxHashMap<ScopeId, FxHashMap<String, String>>;

fn is_renamable(tree: &ScopeTree, scope: ScopeId, name: &str) -> bool {
    // Module bindings are visible to other scripts.
    if scope == ScopeId::ROOT || tree.scope(scope).dynamic {
        return false;
    }
    let renamable = tree.scope(scope).bindings.get(name).is_some_and(|ids| {
        ids.iter()
            .all(|&id| tree.binding(id).kind != BindingKind::Implicit)
    });
    renamable && !redeclares_catch_parameter(tree, scope, name)
}

fn has_binding_of_kind(tree: &ScopeTree, scope: ScopeId, name: &str, kind: BindingKind) -> bool {
    tree.scope(scope)
        .bindings
        .get(name)
        .is_some_and(|ids| ids.iter().any(|&id| tree.binding(id).kind == kind))
}

/// Check if `name` is both a catch parameter and a `var` declared inside that
/// catch block. The declaration site resolves to the catch parameter while
/// other uses resolve to the hoisted `var`, so neither can be renamed alone.
fn redeclares_catch_parameter(tree: &ScopeTree, scope: ScopeId, name: &str) -> bool {
    if has_binding_of_kind(tree, scope, name, BindingKind::CatchParam) {
        return has_binding_of_kind(tree, tree.var_scope(scope), name, BindingKind::Var);
    }
    has_binding_of_kind(tree, scope, name, BindingKind::Var)
        && tree.descendants(scope).into_iter().any(|inner| {
            tree.var_scope(inner) == scope
                && has_binding_of_kind(tree, inner, name, BindingKind::CatchParam)
        })
}

fn plan_renames(tree: &ScopeTree) -> RenamePlan {
    // Current names per scope, updated as renames are decided.
    let mut names: Vec<FxHashSet<String>> = (0..tree.scope_count())
        .map(|index| tree.scope(ScopeId(index as u32)).bindings.keys().cloned().collect())
        .collect();
    let free = tree.free_names();
    let mut plan = RenamePlan::default();

    for (scope, name) in tree.all_bindings_by_frequency_descending() {
        if !is_renamable(tree, scope, name) {
            continue;
        }
        let related: Vec<ScopeId> = tree
            .ancestors(scope)
            .chain(tree.descendants(scope))
            .collect();
        let available = (0..)
            .map(generate_short_name)
            .take_while(|candidate| candidate.len() < name.len())
            .find(|candidate| {
                !is_unrenamable_name(candidate)
                    && !free.contains(candidate)
                    && !related
                        .iter()
                        .any(|id| names[id.index()].contains(candidate))
            });
        let Some(short) = available else {
            continue;
        };
        trace!(scope = scope.0, from = name, to = %short, "rename");
        names[scope.index()].remove(name);
        names[scope.index()].insert(short.clone());
        plan.entry(scope)
            .or_default()
            .insert(name.to_string(), short);
    }
    plan
}

struct RenameHooks<'a> {
    plan: &'a RenamePlan,
}

impl ScopeHooks for RenameHooks<'_> {
    fn ident(&mut self, tree: &ScopeTree, scope: ScopeId, name: &mut String) {
        let Some(owner) = tree.resolve(scope, name) else {
            return;
        };
        if let Some(short) = self
            .plan
            .get(&owner)
            .and_then(|renames| renames.get(name.as_str()))
        {
            name.clone_from(short);
        }
    }
}

/// Give bindings shorter names, most referenced first.
///
/// Returns the number of bindings renamed.
pub fn rename_identifiers(module: &mut Module) -> Result<usize, ScopeBuildError> {
    let tree = ScopeTree::build(module)?;
    let plan = plan_renames(&tree);
    let renamed = plan.values().map(FxHashMap::len).sum();
    if renamed > 0 {
        let mut hooks = RenameHooks { plan: &plan };
        ScopeWalker::new(&tree, &mut hooks).walk_module(module);
    }
    debug!(renamed, "rename identifiers");
    Ok(renamed)
}

#[cfg(test)]
#[path = "../tests/rename.rs"]
mod tests;
