//! Canonical string rendering of numbers.
//!
//! Text comparison and array-to-number coercion both go through the string
//! form of a value, so the rendering has to be stable and host-compatible:
//! shortest round-trip digits, no trailing `.0`, `Infinity`/`NaN` spelled out
//! and exponent notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.

/// Magnitude at and above which numbers render in exponent form.
pub const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero numbers render in exponent form.
pub const EXPONENT_LOWER: f64 = 1e-6;

pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // -0 renders as "0"
        return "0".to_string();
    }
    let abs = n.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&abs) {
        return format!("{n}");
    }
    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

#[cfg(test)]
mod tests {
    use super::number_to_string;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-42.0), "-42");
        assert_eq!(number_to_string(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(1.01 + 2.02), "3.0300000000000002");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn exponent_form_outside_plain_window() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e300), "1.5e+300");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(-2.5e-9), "-2.5e-9");
    }

    #[test]
    fn specials_are_spelled_out() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }
}
