//! Token separation.
//!
//! The printer writes tokens back to back. A single space goes between two
//! tokens exactly when writing them adjacently would lex differently.

use squash_common::is_identifier_continue;

/// Check if `next` must be separated from the text already written.
///
/// `after_integer` is set when the previous token was a numeric literal made
/// of decimal digits only, where a following `.` would be read as a decimal
/// point.
#[must_use]
pub fn needs_space(written: &str, next: &str, after_integer: bool) -> bool {
    let (Some(prev), Some(first)) = (written.chars().next_back(), next.chars().next()) else {
        return false;
    };

    // `a in`, `typeof x`, `1 in y`
    if is_identifier_continue(prev) && is_identifier_continue(first) {
        return true;
    }
    match (prev, first) {
        // `a+ +b`, `a- -b`, `a++ +b`
        ('+', '+') | ('-', '-') => true,
        // `a/ /re/`, `a/ /*...` would open a comment
        ('/', '/' | '*') => true,
        (_, '.') => after_integer,
        // `a<!--` opens an HTML-like comment
        ('!', '-') => written.ends_with("<!") && next.starts_with("--"),
        // `a-->` closes one
        ('-', '>') => written.ends_with("--"),
        _ => false,
    }
}

/// Check if a numeric lexeme is a run of decimal digits, so that a `.`
/// written right after it would extend the literal.
#[must_use]
pub fn is_plain_integer_lexeme(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit() || b == b'_')
}

#[cfg(test)]
#[path = "../tests/spacing.rs"]
mod tests;
