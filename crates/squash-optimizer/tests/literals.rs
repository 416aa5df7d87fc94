use super::*;

fn canon(lexeme: &str) -> String {
    canonicalize_number(lexeme).unwrap_or_else(|| lexeme.to_string())
}

#[test]
fn test_trailing_zeros_become_scientific() {
    assert_eq!(canon("1000000000000"), "1e12");
    assert_eq!(canon("1000"), "1e3");
    assert_eq!(canon("100"), "100");
    assert_eq!(canon("1_000_000"), "1e6");
}

#[test]
fn test_small_fractions_become_scientific() {
    assert_eq!(canon("0.00123400"), "1234e-6");
    assert_eq!(canon("0.001"), "1e-3");
    // Same length: plain decimal wins.
    assert_eq!(canon("0.01"), "0.01");
    assert_eq!(canon("1.50"), "1.5");
    assert_eq!(canon(".5"), ".5");
}

#[test]
fn test_hex_only_when_strictly_shorter() {
    assert_eq!(canon("999999999999"), "999999999999");
    assert_eq!(canon("1000000000001"), "0xe8d4a51001");
}

#[test]
fn test_other_radixes_decay_to_decimal() {
    assert_eq!(canon("0x0001"), "1");
    assert_eq!(canon("0b1010"), "10");
    assert_eq!(canon("0o17"), "15");
    assert_eq!(canon("0xFF"), "255");
    assert_eq!(canon("0.0"), "0");
    assert_eq!(canon("5."), "5");
}

#[test]
fn test_outside_domain_is_untouched() {
    assert_eq!(canonicalize_number("017"), None);
    assert_eq!(canonicalize_number("08"), None);
    assert_eq!(canonicalize_number("10n"), None);
    assert_eq!(canonicalize_number("9007199254740993"), None);
    assert_eq!(canonicalize_number("0x20000000000000"), None);
    assert_eq!(canonicalize_number("1e400"), None);
}

#[test]
fn test_huge_negative_exponents_stay_scientific() {
    assert_eq!(canonicalize_number("1e-300000000"), None);
    assert_eq!(canon("0.5e-400"), "5e-401");
    assert_eq!(canon("0.0000000001"), "1e-10");
}

#[test]
fn test_canonical_form_is_idempotent_and_never_longer() {
    for lexeme in [
        "0", "7", "10", "1000", "123000", "0x10", "0b111", "0.5", "0.000001", "12.34e5",
        "4.2e-3", "9007199254740991", "1000000000001",
    ] {
        let once = canon(lexeme);
        assert!(once.len() <= lexeme.len(), "{lexeme} grew to {once}");
        assert_eq!(canon(&once), once, "{lexeme} is not stable");
    }
    assert_eq!(canon("12.34e5"), "1234e3");
    assert_eq!(canon("4.2e-3"), "42e-4");
}

#[test]
fn test_canonical_decimal_integer() {
    assert!(is_canonical_decimal_integer("0"));
    assert!(is_canonical_decimal_integer("42"));
    assert!(is_canonical_decimal_integer("9007199254740991"));
    assert!(!is_canonical_decimal_integer("9007199254740992"));
    assert!(!is_canonical_decimal_integer("007"));
    assert!(!is_canonical_decimal_integer("1e3"));
    assert!(!is_canonical_decimal_integer(""));
    assert!(!is_canonical_decimal_integer("-1"));
}

#[test]
fn test_literal_expressions() {
    assert_eq!(
        shorten_literal(&Expr::Bool(true), true),
        Some(Expr::unary(UnaryOp::Not, Expr::num("0")))
    );
    assert_eq!(
        shorten_literal(&Expr::Bool(false), true),
        Some(Expr::unary(UnaryOp::Not, Expr::num("1")))
    );
    assert_eq!(
        shorten_literal(&Expr::ident("undefined"), true),
        Some(Expr::void_0())
    );
    assert_eq!(shorten_literal(&Expr::ident("undefined"), false), None);
    assert_eq!(shorten_literal(&Expr::num("10"), true), None);
}

#[test]
fn test_quoted_keys_become_bare() {
    let mut key = PropKey::Str("Infinity".into());
    assert!(canonicalize_key(&mut key, KeyContext::Object));
    assert_eq!(key, PropKey::Ident("Infinity".into()));

    let mut key = PropKey::Str("if".into());
    assert!(canonicalize_key(&mut key, KeyContext::Object));
    assert_eq!(key, PropKey::Ident("if".into()));

    let mut key = PropKey::Str("12".into());
    assert!(canonicalize_key(&mut key, KeyContext::Pattern));
    assert_eq!(key, PropKey::Num("12".into()));

    for unchanged in ["&", "01", "a-b", "", "1.5"] {
        let mut key = PropKey::Str(unchanged.into());
        assert!(!canonicalize_key(&mut key, KeyContext::Object));
        assert_eq!(key, PropKey::Str(unchanged.into()));
    }
}

#[test]
fn test_computed_literal_keys_collapse() {
    let mut key = PropKey::Computed(Box::new(Expr::str("Infinity")));
    assert!(canonicalize_key(&mut key, KeyContext::Object));
    assert_eq!(key, PropKey::Ident("Infinity".into()));

    let mut key = PropKey::Computed(Box::new(Expr::str("&")));
    assert!(canonicalize_key(&mut key, KeyContext::Object));
    assert_eq!(key, PropKey::Str("&".into()));

    let mut key = PropKey::Computed(Box::new(Expr::ident("k")));
    assert!(!canonicalize_key(&mut key, KeyContext::Object));
}

#[test]
fn test_keys_with_special_meaning_are_kept() {
    let mut key = PropKey::Computed(Box::new(Expr::str("__proto__")));
    assert!(!canonicalize_key(&mut key, KeyContext::Object));

    let mut key = PropKey::Str("constructor".into());
    assert!(!canonicalize_key(&mut key, KeyContext::Class));

    let mut key = PropKey::Str("constructor".into());
    assert!(canonicalize_key(&mut key, KeyContext::Object));
}
