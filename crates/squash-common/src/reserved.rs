//! Reserved words.

/// Keywords, future reserved words, strict-mode reserved words, and the
/// literal names `null`, `true`, `false`.
///
/// None of these may be used as a binding identifier, so the renamer never
/// hands them out.
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    matches!(
        name,
        "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "false"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "implements"
            | "import"
            | "in"
            | "instanceof"
            | "interface"
            | "let"
            | "new"
            | "null"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
    )
}

/// Names that must never be produced by renaming even though they are not
/// reserved words: they carry meaning for the runtime.
#[must_use]
pub fn is_unrenamable_name(name: &str) -> bool {
    is_reserved_word(name)
        || matches!(
            name,
            "arguments" | "eval" | "undefined" | "NaN" | "Infinity" | "of" | "as" | "async"
        )
}
