//! Identifier classification over Unicode scalar values.
//!
//! Start characters are `$`, `_`, the `\` that introduces a unicode escape, and
//! everything in the Unicode `ID_Start` set. Continue characters add
//! everything in `ID_Continue` (digits, combining marks, connector punctuation,
//! `Other_ID_Continue`) plus ZWNJ and ZWJ. The Unicode tables come from
//! `unicode-ident`, whose derived properties already exclude `Pattern_Syntax`
//! and `Pattern_White_Space`.

/// U+200C ZERO WIDTH NON-JOINER
const ZWNJ: char = '\u{200C}';
/// U+200D ZERO WIDTH JOINER
const ZWJ: char = '\u{200D}';

/// Check if a code point can start an identifier.
#[must_use]
pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic() || ch == '$' || ch == '_' || ch == '\\';
    }
    unicode_ident::is_xid_start(ch)
}

/// Check if a code point can continue an identifier.
#[must_use]
pub fn is_identifier_continue(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '$' || ch == '_' || ch == '\\';
    }
    ch == ZWNJ || ch == ZWJ || unicode_ident::is_xid_continue(ch)
}

/// Check if a cooked string is a valid identifier name.
///
/// The text is already unescaped, so a literal backslash cannot be written
/// back out as an identifier and disqualifies the name. Reserved words are
/// valid identifier *names*; callers that need a binding identifier must also
/// consult [`crate::is_reserved_word`].
#[must_use]
pub fn is_valid_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first == '\\' || !is_identifier_start(first) {
        return false;
    }
    chars.all(|ch| ch != '\\' && is_identifier_continue(ch))
}

#[cfg(test)]
#[path = "../tests/identifier.rs"]
mod tests;
