//! Numeric coercion and the drop-on-failure filter.
//!
//! Coercion is split into two explicit stages: [`to_number`] answers
//! `Option<f64>` for any value, and [`numeric_sequence`] keeps the `Some`s.
//! A failed parse is *never* defaulted to `0.0`; that would silently change
//! every aggregate downstream.

use std::cmp::Ordering;

use flexnum_common::Value;

/// Best-effort numeric view of `value`.
///
/// - Numbers map to themselves; `NaN` counts as a failed coercion.
/// - Booleans map to `1.0`/`0.0`, `Null` to `0.0`, `Undefined` fails.
/// - Text is parsed by [`parse_numeric_text`].
/// - Arrays and objects go through their primitive (string) form, so `[]`
///   is `0.0`, `["7"]` is `7.0` and `[1, 2]` fails.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Number(n) if n.is_nan() => None,
        Value::Number(n) => Some(*n),
        Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Undefined => None,
        Value::Text(s) => parse_numeric_text(s),
        Value::Array(_) | Value::Object(_) => value
            .to_primitive()
            .ok()
            .and_then(|primitive| to_number(&primitive)),
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parses a numeric literal the way a loose host `Number(text)` would.
///
/// Accepts surrounding whitespace, blank text (→ `0.0`), signed decimal and
/// exponent literals, signed `Infinity`, and unsigned `0x`/`0o`/`0b`
/// integers. Rust-only spellings such as `inf`, `nan` or `1_000` are rejected.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let s = text.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(n) = parse_radix_literal(s) {
        return Some(n);
    }
    if is_decimal_literal(s.as_bytes()) {
        return s.parse::<f64>().ok();
    }
    None
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    s[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(b: &[u8]) -> bool {
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        i += 1;
        if i < b.len() && matches!(b[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}

/// Coerces every leaf and drops the ones that are not numbers.
pub fn numeric_sequence<'a, I>(leaves: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Value>,
{
    leaves.into_iter().filter_map(to_number).collect()
}

/// [`numeric_sequence`] followed by a stable ascending sort.
///
/// Equal values (including `-0.0` against `0.0`) keep their input order.
pub fn sorted_numeric_sequence<'a, I>(leaves: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut nums = numeric_sequence(leaves);
    nums.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    nums
}
