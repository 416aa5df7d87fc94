//! Common tables and utilities for the squash minifier.
//!
//! This crate provides foundational pieces used across all squash crates:
//! - Identifier classification (`is_identifier_start`, `is_identifier_continue`,
//!   `is_valid_identifier_name`)
//! - Reserved-word tables consulted by renaming and key canonicalization
//! - Centralized limits and thresholds

// Identifier oracle
pub mod identifier;
pub use identifier::{is_identifier_continue, is_identifier_start, is_valid_identifier_name};

// Reserved words
pub mod reserved;
pub use reserved::{is_reserved_word, is_unrenamable_name};

// Centralized limits and thresholds
pub mod limits;
