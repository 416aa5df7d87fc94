//! Pass selection.
//!
//! An [`OptionSet`] is threaded explicitly through every engine invocation;
//! there is no process-wide configuration.

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Passes enabled for one engine invocation.
    ///
    /// Statement-list normalization is not a flag: it always runs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OptionSet: u32 {
        const LITERALS = 1 << 0;
        const ARROW_FN = 1 << 1;
        const IF_TO_CONDITIONAL = 1 << 2;
        const REMOVE_DEBUGGER = 1 << 3;
        const RENAME_IDENTIFIERS = 1 << 4;
        const BLOCKS_TO_STATEMENT = 1 << 5;
        const KEYS = 1 << 6;
        const REMOVE_EXPRESSION_NAMES = 1 << 7;
        const FUNCTION_EXPRESSION_TO_ARROW_FUNC = 1 << 8;
        const UNWRAP_PARENS = 1 << 9;
        const REMOVE_LAST_EMPTY_RETURN = 1 << 10;
        const COMBINE_EXPRESSION_RUNS = 1 << 11;
        const REMOVE_DEAD_BINDINGS = 1 << 12;
    }
}

/// Command-line names of the passes, in flag order.
const PASS_NAMES: &[(&str, OptionSet)] = &[
    ("literals", OptionSet::LITERALS),
    ("arrow-fn", OptionSet::ARROW_FN),
    ("if-to-conditional", OptionSet::IF_TO_CONDITIONAL),
    ("remove-debugger", OptionSet::REMOVE_DEBUGGER),
    ("rename-identifiers", OptionSet::RENAME_IDENTIFIERS),
    ("blocks-to-statement", OptionSet::BLOCKS_TO_STATEMENT),
    ("keys", OptionSet::KEYS),
    ("remove-expression-names", OptionSet::REMOVE_EXPRESSION_NAMES),
    (
        "function-expression-to-arrow-func",
        OptionSet::FUNCTION_EXPRESSION_TO_ARROW_FUNC,
    ),
    ("unwrap-parens", OptionSet::UNWRAP_PARENS),
    ("remove-last-empty-return", OptionSet::REMOVE_LAST_EMPTY_RETURN),
    ("combine-expression-runs", OptionSet::COMBINE_EXPRESSION_RUNS),
    ("remove-dead-bindings", OptionSet::REMOVE_DEAD_BINDINGS),
];

impl OptionSet {
    /// Look up a single pass by its kebab-case name.
    #[must_use]
    pub fn from_pass_name(name: &str) -> Option<Self> {
        PASS_NAMES
            .iter()
            .find(|(pass, _)| *pass == name)
            .map(|&(_, flag)| flag)
    }

    /// Kebab-case names of every enabled pass.
    pub fn pass_names(self) -> impl Iterator<Item = &'static str> {
        PASS_NAMES
            .iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|&(name, _)| name)
    }
}

/// Error for an unrecognized pass name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPassError {
    pub name: String,
}

impl fmt::Display for UnknownPassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pass '{}'; valid passes are: ", self.name)?;
        for (i, (name, _)) in PASS_NAMES.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownPassError {}

impl FromStr for OptionSet {
    type Err = UnknownPassError;

    /// Parse a comma-separated list of pass names. `all` enables every
    /// pass; the empty string enables none.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = Self::empty();
        for name in s.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            if name == "all" {
                options |= Self::all();
                continue;
            }
            options |= Self::from_pass_name(name).ok_or_else(|| UnknownPassError {
                name: name.to_string(),
            })?;
        }
        Ok(options)
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
