use flexnum_common::Value;

use crate::coercion::to_number;

/// Magnitude from which fixed-point rounding leaves a number untouched.
pub const TO_FIXED_LIMIT: f64 = 1e21;

/// Largest integer a double represents exactly (2^53 − 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rounds `x` to `digits` decimal places and returns the result as a number.
///
/// Rounding works on the *exact* decimal expansion of the double and rounds
/// halfway cases away from zero, so `2.5 → 3` and `1.25 → 1.3` while
/// `1.005 → 1` (the stored double sits just below `1.005`). Non-finite
/// values and magnitudes `>= 1e21` come back unchanged.
pub fn to_fixed(x: f64, digits: u8) -> f64 {
    if !x.is_finite() || x.abs() >= TO_FIXED_LIMIT {
        return x;
    }
    let digits = usize::from(digits);
    let abs = x.abs();
    let precision = exact_fraction_digits(abs).max(digits + 1);
    let exact = format!("{abs:.precision$}");
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        increment_decimal(&mut kept);
    }

    let int_len = kept.len() - digits;
    let mut fixed = String::with_capacity(kept.len() + 2);
    if x < 0.0 {
        fixed.push('-');
    }
    fixed.extend(kept[..int_len].iter().map(|&b| char::from(b)));
    if digits > 0 {
        fixed.push('.');
        fixed.extend(kept[int_len..].iter().map(|&b| char::from(b)));
    }
    fixed.parse::<f64>().unwrap_or(x)
}

/// Number of fractional decimal digits in the exact expansion of `x`.
///
/// A finite double is `m * 2^e`; when `e < 0` its decimal expansion ends
/// after exactly `-e` digits once trailing zero bits of `m` are removed.
fn exact_fraction_digits(x: f64) -> usize {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return 0;
    }
    let exp = exp + mantissa.trailing_zeros() as i32;
    usize::try_from(-exp).unwrap_or(0)
}

/// Adds one unit in the last place to a string of ASCII digits.
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Numeric view of an optional positional argument, `NaN` when missing or
/// not coercible.
pub fn num_arg(args: &[Value], idx: usize) -> f64 {
    args.get(idx).and_then(to_number).unwrap_or(f64::NAN)
}
