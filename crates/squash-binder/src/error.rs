//! Scope construction errors.

/// A tree the scope builder cannot model.
///
/// The optimizer treats this as fatal for the current round: no rewrite that
/// depends on scopes runs against a partially built tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeBuildError {
    /// A declaration or reference with empty identifier text
    EmptyBindingName,
    /// A declared name that is not a valid identifier
    InvalidBindingName { name: String },
}

impl std::fmt::Display for ScopeBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBindingName => write!(f, "identifier with empty name"),
            Self::InvalidBindingName { name } => {
                write!(f, "declared name '{name}' is not a valid identifier")
            }
        }
    }
}

impl std::error::Error for ScopeBuildError {}
