//! Rewrite engine of the squash minifier.
//!
//! One call to [`optimize`] is one round: a single dispatcher traversal over
//! the tree, followed by dead-binding removal and identifier renaming when
//! those passes are enabled. Passes interact, so callers wanting the smallest
//! output use [`optimize_to_fixpoint`].
//!
//! # Architecture
//!
//! - [`options`]: the [`OptionSet`] pass selection
//! - [`literals`]: numeric, boolean, `undefined` and key canonicalization
//! - [`precedence`]: grammar levels, parenthesization and unwrapping
//! - [`folding`]: statement and expression folding helpers
//! - [`dispatcher`]: the single traversal applying every per-node pass
//! - [`rename`]: frequency-ordered identifier renaming
//! - [`dead_code`]: unreferenced binding removal

pub mod dead_code;
pub mod dispatcher;
pub mod folding;
pub mod literals;
pub mod options;
pub mod precedence;
pub mod rename;

pub use dead_code::remove_dead_bindings;
pub use dispatcher::Dispatcher;
pub use options::{OptionSet, UnknownPassError};
pub use rename::{generate_short_name, rename_identifiers};
pub use squash_binder::ScopeBuildError;

use squash_ast::Module;
use squash_binder::ScopeTree;
use squash_common::limits::MAX_FIXPOINT_ROUNDS;
use tracing::debug;

/// Mutation counts of one engine round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    /// Rewrites applied by the dispatcher traversal
    pub rewrites: usize,
    pub bindings_removed: usize,
    pub names_assigned: usize,
}

impl RoundStats {
    /// Total number of mutations; zero means the round changed nothing.
    #[must_use]
    pub const fn mutations(&self) -> usize {
        self.rewrites + self.bindings_removed + self.names_assigned
    }
}

/// Run one engine round over `module`.
///
/// The scope tree is built before anything is rewritten, so a malformed tree
/// is reported without touching it.
#[tracing::instrument(level = "debug", skip_all, fields(options = ?options))]
pub fn optimize(module: &mut Module, options: OptionSet) -> Result<RoundStats, ScopeBuildError> {
    let tree = ScopeTree::build(module)?;
    let undefined_is_free = !tree.declares_name("undefined");
    drop(tree);

    let mut stats = RoundStats {
        rewrites: Dispatcher::new(options, undefined_is_free).run(module),
        ..RoundStats::default()
    };
    if options.contains(OptionSet::REMOVE_DEAD_BINDINGS) {
        stats.bindings_removed = remove_dead_bindings(module)?;
    }
    if options.contains(OptionSet::RENAME_IDENTIFIERS) {
        stats.names_assigned = rename_identifiers(module)?;
    }
    debug!(
        rewrites = stats.rewrites,
        bindings_removed = stats.bindings_removed,
        names_assigned = stats.names_assigned,
        "round done"
    );
    Ok(stats)
}

/// Run rounds until one changes nothing, or [`MAX_FIXPOINT_ROUNDS`] rounds
/// have run. Returns the statistics of every round, the last one included.
pub fn optimize_to_fixpoint(
    module: &mut Module,
    options: OptionSet,
) -> Result<Vec<RoundStats>, ScopeBuildError> {
    let mut rounds = Vec::new();
    for _ in 0..MAX_FIXPOINT_ROUNDS {
        let stats = optimize(module, options)?;
        rounds.push(stats);
        if stats.mutations() == 0 {
            break;
        }
    }
    debug!(rounds = rounds.len(), "fixpoint reached");
    Ok(rounds)
}
