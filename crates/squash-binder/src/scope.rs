//! Scope tree and bindings.
//!
//! One [`Scope`] per module, function, arrow, class, static block, and
//! block-like construct (blocks, loops, `catch`, `switch`, `try` bodies).
//! Scopes are stored in pre-order: a scope's id is always greater than its
//! parent's, and ids are handed out in the order a source-order traversal
//! first enters each scope.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use smallvec::SmallVec;

/// Unique identifier for a scope in a [`ScopeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const NONE: Self = Self(u32::MAX);
    pub const ROOT: Self = Self(0);

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for a binding in a [`ScopeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(pub u32);

impl BindingId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Module,
    Function,
    Arrow,
    Class,
    StaticBlock,
    Block,
}

impl ScopeKind {
    /// `var` and function declarations hoist to the nearest scope of this kind.
    #[must_use]
    pub const fn is_var_scope(self) -> bool {
        matches!(
            self,
            Self::Module | Self::Function | Self::Arrow | Self::StaticBlock
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Var,
    Let,
    Const,
    Param,
    Function,
    Class,
    CatchParam,
    /// Name of a function or class expression, visible only inside it
    ExpressionName,
    /// `this` and `arguments` of an ordinary function
    Implicit,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub name: String,
    pub scope: ScopeId,
    pub kind: BindingKind,
    /// Number of read/write occurrences resolved to this binding, not counting
    /// the declaration site.
    pub ref_count: u32,
}

#[derive(Debug, Clone)]
pub struct Scope {
    pub parent: ScopeId,
    pub kind: ScopeKind,
    pub children: Vec<ScopeId>,
    /// Declaration order is preserved; several bindings per name only occur
    /// for repeated parameters and `var` redeclarations.
    pub bindings: IndexMap<String, SmallVec<[BindingId; 1]>, FxBuildHasher>,
    /// Contains a direct `eval(...)` call or a `with` statement, here or in a
    /// descendant scope.
    pub dynamic: bool,
}

impl Scope {
    pub(crate) fn new(parent: ScopeId, kind: ScopeKind) -> Self {
        Self {
            parent,
            kind,
            children: Vec::new(),
            bindings: IndexMap::default(),
            dynamic: false,
        }
    }
}

/// The scope tree of one program, built by [`ScopeTree::build`].
#[derive(Debug, Clone)]
pub struct ScopeTree {
    pub(crate) scopes: Vec<Scope>,
    pub(crate) bindings: Vec<Binding>,
    /// Names referenced somewhere without any visible declaration.
    pub(crate) free_names: FxHashSet<String>,
}

impl ScopeTree {
    pub(crate) fn with_root() -> Self {
        Self {
            scopes: vec![Scope::new(ScopeId::NONE, ScopeKind::Module)],
            bindings: Vec::new(),
            free_names: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    #[must_use]
    pub fn binding(&self, id: BindingId) -> &Binding {
        &self.bindings[id.index()]
    }

    #[must_use]
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub const fn free_names(&self) -> &FxHashSet<String> {
        &self.free_names
    }

    /// `scope` itself followed by each enclosing scope up to the root.
    pub fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), |&id| {
            let parent = self.scope(id).parent;
            (!parent.is_none()).then_some(parent)
        })
    }

    /// Every scope strictly nested inside `scope`, in pre-order.
    #[must_use]
    pub fn descendants(&self, scope: ScopeId) -> Vec<ScopeId> {
        let mut out = Vec::new();
        let mut stack: Vec<ScopeId> = self.scope(scope).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.scope(id).children.iter().rev().copied());
        }
        out
    }

    /// The scope that declares `name` as seen from `scope`, following
    /// standard lexical shadowing.
    #[must_use]
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        self.ancestors(scope)
            .find(|&id| self.scope(id).bindings.contains_key(name))
    }

    /// Bindings for `name` visible from `scope`; empty for free names.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> &[BindingId] {
        self.resolve(scope, name)
            .and_then(|id| self.scope(id).bindings.get(name))
            .map(|ids| ids.as_slice())
            .unwrap_or_default()
    }

    /// Total references to `name` as declared in `scope`.
    #[must_use]
    pub fn name_ref_count(&self, scope: ScopeId, name: &str) -> u32 {
        self.scope(scope).bindings.get(name).map_or(0, |ids| {
            ids.iter().map(|&id| self.binding(id).ref_count).sum()
        })
    }

    /// Every `(scope, name)` pair in the tree, most referenced first.
    ///
    /// Ties keep traversal order: scopes in pre-order, names in declaration
    /// order within a scope.
    #[must_use]
    pub fn all_bindings_by_frequency_descending(&self) -> Vec<(ScopeId, &str)> {
        let mut all: Vec<(ScopeId, &str, u32)> = Vec::with_capacity(self.bindings.len());
        for (index, scope) in self.scopes.iter().enumerate() {
            let id = ScopeId(index as u32);
            for name in scope.bindings.keys() {
                all.push((id, name.as_str(), self.name_ref_count(id, name)));
            }
        }
        // `sort_by` is stable.
        all.sort_by(|a, b| b.2.cmp(&a.2));
        all.into_iter().map(|(id, name, _)| (id, name)).collect()
    }

    /// Check if the name declared in `scope` is never referenced.
    ///
    /// The implicit `this` and `arguments` bindings are never dead.
    #[must_use]
    pub fn is_dead(&self, scope: ScopeId, name: &str) -> bool {
        let Some(ids) = self.scope(scope).bindings.get(name) else {
            return false;
        };
        ids.iter().all(|&id| {
            let binding = self.binding(id);
            binding.kind != BindingKind::Implicit && binding.ref_count == 0
        })
    }

    /// Check if `scope` is, or is nested inside, a function-like scope.
    #[must_use]
    pub fn is_function_nested(&self, scope: ScopeId) -> bool {
        self.ancestors(scope).any(|id| {
            matches!(
                self.scope(id).kind,
                ScopeKind::Function | ScopeKind::Arrow | ScopeKind::StaticBlock
            )
        })
    }

    /// Nearest scope that `var` declarations made in `scope` hoist to.
    #[must_use]
    pub fn var_scope(&self, scope: ScopeId) -> ScopeId {
        self.ancestors(scope)
            .find(|&id| self.scope(id).kind.is_var_scope())
            .unwrap_or(ScopeId::ROOT)
    }

    /// Check if any scope in the tree declares `name`.
    #[must_use]
    pub fn declares_name(&self, name: &str) -> bool {
        self.bindings.iter().any(|binding| binding.name == name)
    }

    /// Check if `name` is declared in `scope`, any ancestor, or any
    /// descendant.
    #[must_use]
    pub fn is_name_in_chain(&self, scope: ScopeId, name: &str) -> bool {
        self.ancestors(scope)
            .chain(self.descendants(scope))
            .any(|id| self.scope(id).bindings.contains_key(name))
    }
}
