//! Centralized limits and thresholds for the minifier.
//!
//! # Categories
//!
//! - **Operation Counts**: Limits that bound the fixpoint loops
//! - **Numeric Bounds**: Constants of the literal grammar

// =============================================================================
// Operation Counts
// =============================================================================

/// Maximum number of engine rounds run by the fixpoint driver.
///
/// Every enabled rewrite strictly shrinks the program or leaves it unchanged,
/// so a real program converges in a handful of rounds. The guard only matters
/// if two rewrites ever start undoing each other.
///
/// ```javascript
/// // Round 1 turns the if/else into a ternary return, round 2 collapses
/// // the now single-return body into a concise arrow body.
/// const f = (a) => { if (a) { return 1; } else { return 2; } };
/// ```
pub const MAX_FIXPOINT_ROUNDS: usize = 32;

/// Maximum number of scope-rebuild-then-sweep rounds in dead-binding
/// elimination.
///
/// Each round removes at least one declaration or stops, so this is only
/// reached on pathological inputs with long chains of bindings that keep
/// each other alive one level at a time.
///
/// ```javascript
/// function f() {
///     var a = 1;
///     var b = () => a; // removing `b` makes `a` dead in the next round
/// }
/// ```
pub const MAX_DEAD_CODE_ROUNDS: usize = 64;

// =============================================================================
// Numeric Bounds
// =============================================================================

/// Largest integer exactly representable as an IEEE-754 double (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;
