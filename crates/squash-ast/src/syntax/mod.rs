//! Syntax utilities shared by the binder and the optimizer.

pub mod transform_utils;

pub use transform_utils::{
    ReceiverUsage, class_references_name, function_references_name, has_hoistable_declaration,
    is_hoistable_declaration, is_side_effect_free, leftmost_primary, receiver_usage, starts_with_statement_keyword_or_brace,
};
