//! Literal canonicalization.
//!
//! Numeric literals are rewritten to the shortest of their plain decimal,
//! scientific and hexadecimal spellings, keeping the exact double value.
//! Quoted property keys become bare identifiers or numbers when that keeps
//! the key's string form.

use squash_ast::{Expr, PropKey, UnaryOp};
use squash_common::is_valid_identifier_name;
use squash_common::limits::MAX_SAFE_INTEGER;

/// Value of a numeric literal the canonicalizer can reason about exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NumericValue {
    Integer(u64),
    /// `digits * 10^exponent` with `exponent < 0`; `digits` has no leading
    /// or trailing zeros.
    Fraction { digits: String, exponent: i32 },
}

/// Shortest spelling of a numeric literal, or `None` when no spelling is
/// strictly shorter than `lexeme` or the literal is outside the handled
/// domain (BigInt, legacy octal, unsafe integers).
#[must_use]
pub fn canonicalize_number(lexeme: &str) -> Option<String> {
    let cleaned = lexeme.replace('_', "");
    let candidate = match parse_numeric(&cleaned)? {
        NumericValue::Integer(value) => shortest_integer(value),
        NumericValue::Fraction { digits, exponent } => shortest_fraction(&digits, exponent)?,
    };
    (candidate.len() < lexeme.len()).then_some(candidate)
}

/// Check if `s` is a safe integer already written in minimal decimal form:
/// ASCII digits only, no leading zero unless it is exactly `"0"`.
#[must_use]
pub fn is_canonical_decimal_integer(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 16
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'))
        && s.parse::<u64>().is_ok_and(|value| value <= MAX_SAFE_INTEGER)
}

fn parse_numeric(s: &str) -> Option<NumericValue> {
    if s.ends_with('n') {
        return None;
    }
    let bytes = s.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let value = u64::from_str_radix(&s[2..], radix).ok()?;
            return (value <= MAX_SAFE_INTEGER).then_some(NumericValue::Integer(value));
        }
    }
    parse_decimal(s)
}

fn parse_decimal(s: &str) -> Option<NumericValue> {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(at) => (&s[..at], s[at + 1..].parse::<i32>().ok()?),
        None => (s, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || (int_part.is_empty() && frac_part.is_empty())
    {
        return None;
    }
    // Legacy octal `017` and leading-zero decimals `08`.
    if int_part.len() > 1 && int_part.starts_with('0') {
        return None;
    }

    let joined = format!("{int_part}{frac_part}");
    let significant = joined.trim_start_matches('0');
    if significant.is_empty() {
        return Some(NumericValue::Integer(0));
    }
    let digits = significant.trim_end_matches('0');
    let trailing_zeros = i32::try_from(significant.len() - digits.len()).ok()?;
    let exponent = exponent
        .checked_sub(i32::try_from(frac_part.len()).ok()?)?
        .checked_add(trailing_zeros)?;

    if digits.len() > 16 || digits.parse::<u64>().ok()? > MAX_SAFE_INTEGER {
        return None;
    }
    if exponent >= 0 {
        let significand: u64 = digits.parse().ok()?;
        let value = 10u64
            .checked_pow(u32::try_from(exponent).ok()?)
            .and_then(|scale| significand.checked_mul(scale))?;
        return (value <= MAX_SAFE_INTEGER).then_some(NumericValue::Integer(value));
    }
    Some(NumericValue::Fraction {
        digits: digits.to_string(),
        exponent,
    })
}

/// Ties prefer decimal, then scientific, then hexadecimal.
fn shortest_integer(value: u64) -> String {
    let decimal = value.to_string();
    let mut best = decimal.clone();

    let significant = decimal.trim_end_matches('0');
    let zeros = decimal.len() - significant.len();
    if value != 0 && zeros > 0 {
        let scientific = format!("{significant}e{zeros}");
        if scientific.len() < best.len() {
            best = scientific;
        }
    }

    let hex = format!("0x{value:x}");
    if hex.len() < best.len() {
        best = hex;
    }
    best
}

fn shortest_fraction(digits: &str, exponent: i32) -> Option<String> {
    let shift = usize::try_from(exponent.checked_neg()?).ok()?;
    // The exponent is unbounded, so the plain form is measured before it is built.
    let plain_len = if shift >= digits.len() {
        shift + 2
    } else {
        digits.len() + 1
    };
    let scientific = format!("{digits}e{exponent}");
    if scientific.len() < plain_len {
        return Some(scientific);
    }
    Some(if shift >= digits.len() {
        format!("0.{}{digits}", "0".repeat(shift - digits.len()))
    } else {
        let point = digits.len() - shift;
        format!("{}.{}", &digits[..point], &digits[point..])
    })
}

// =============================================================================
// Expression literals
// =============================================================================

/// Shorter spelling of a literal expression: `!0`, `!1`, `void 0`, or a
/// canonical number. `undefined` is only rewritten when `undefined_is_free`.
#[must_use]
pub fn shorten_literal(expr: &Expr, undefined_is_free: bool) -> Option<Expr> {
    match expr {
        Expr::Bool(value) => Some(Expr::unary(
            UnaryOp::Not,
            Expr::num(if *value { "0" } else { "1" }),
        )),
        Expr::Ident(name) if undefined_is_free && name == "undefined" => Some(Expr::void_0()),
        Expr::Num(lexeme) => canonicalize_number(lexeme).map(Expr::Num),
        _ => None,
    }
}

// =============================================================================
// Property keys
// =============================================================================

/// Where a property key appears; some bare keys mean something else than
/// their quoted form in classes and object literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Object,
    Class,
    Pattern,
}

/// Rewrite a quoted or computed-literal key to its bare form.
///
/// Returns `true` if the key changed.
pub fn canonicalize_key(key: &mut PropKey, context: KeyContext) -> bool {
    match key {
        PropKey::Str(value) => {
            if context == KeyContext::Class && is_special_class_key(value) {
                return false;
            }
            match bare_key(value) {
                Some(bare) => {
                    *key = bare;
                    true
                }
                None => false,
            }
        }
        PropKey::Computed(expr) => {
            let literal = match &**expr {
                Expr::Str(value) => {
                    // `["__proto__"]` defines an own property, `__proto__:` sets the prototype.
                    if context == KeyContext::Object && value == "__proto__" {
                        return false;
                    }
                    if context == KeyContext::Class && is_special_class_key(value) {
                        return false;
                    }
                    bare_key(value).unwrap_or_else(|| PropKey::Str(value.clone()))
                }
                Expr::Num(lexeme) => PropKey::Num(lexeme.clone()),
                _ => return false,
            };
            *key = literal;
            true
        }
        PropKey::Ident(_) | PropKey::Num(_) | PropKey::Private(_) => false,
    }
}

fn bare_key(value: &str) -> Option<PropKey> {
    if is_valid_identifier_name(value) {
        Some(PropKey::Ident(value.to_string()))
    } else if is_canonical_decimal_integer(value) {
        Some(PropKey::Num(value.to_string()))
    } else {
        None
    }
}

fn is_special_class_key(value: &str) -> bool {
    value == "constructor" || value == "prototype"
}

#[cfg(test)]
#[path = "../tests/literals.rs"]
mod tests;
