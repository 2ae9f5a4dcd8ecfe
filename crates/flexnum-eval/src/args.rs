//! Argument shape handling shared by every aggregate.
//!
//! Aggregates accept two calling forms, selected by the shape of the first
//! argument:
//!
//! - **Sequence**: `f([a, [b, c], …], fraction?)`. The first argument is an
//!   array; it is flattened and the second argument is the rounding
//!   precision. Anything after that is ignored.
//! - **Variadic**: `f(a, [b], c, …)`. Every argument is flattened into the
//!   data set and no rounding applies, so a trailing number is *data*.

use flexnum_common::Value;

use crate::builtins::utils::to_fixed;
use crate::coercion::{numeric_sequence, sorted_numeric_sequence};
use crate::flatten::leaves;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CallShape {
    Sequence,
    Variadic,
}

/// Decimal-rounding precision in `[0, 20]`. The default is 0 places.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FractionSpec(u8);

impl FractionSpec {
    pub const MAX_DIGITS: u8 = 20;

    pub fn new(digits: u8) -> Option<Self> {
        (digits <= Self::MAX_DIGITS).then_some(Self(digits))
    }

    /// Reads a precision from an arbitrary value with leading-integer
    /// semantics: `2`, `2.7`, `"2"` and `"2 places"` all give 2. Values with
    /// no leading integer, or outside `[0, 20]`, give `None`.
    pub fn parse(value: &Value) -> Option<Self> {
        let n = match value {
            Value::Int(i) => *i,
            other => parse_leading_int(&other.to_js_string())?,
        };
        u8::try_from(n).ok().and_then(Self::new)
    }

    pub fn digits(self) -> u8 {
        self.0
    }

    pub fn apply(self, x: f64) -> f64 {
        to_fixed(x, self.0)
    }
}

/// Leading signed integer of `s`, after leading whitespace. A `0x` prefix
/// switches to base 16. Trailing garbage is ignored.
pub(crate) fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let mut acc: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen = true;
        acc = acc.saturating_mul(i64::from(radix)).saturating_add(i64::from(d));
    }
    seen.then_some(if negative { -acc } else { acc })
}

/// Normalised view of an aggregate's arguments.
#[derive(Debug, Clone)]
pub struct CallArgs<'a> {
    shape: CallShape,
    leaves: Vec<&'a Value>,
    fraction: Option<&'a Value>,
}

impl<'a> CallArgs<'a> {
    /// Picks the calling form from the first argument.
    pub fn parse(args: &'a [Value]) -> Self {
        match args.first() {
            Some(Value::Array(items)) => Self::from_sequence(items, args.get(1)),
            _ => Self::from_variadic(args),
        }
    }

    pub fn from_sequence(items: &'a [Value], fraction: Option<&'a Value>) -> Self {
        Self {
            shape: CallShape::Sequence,
            leaves: leaves(items),
            fraction,
        }
    }

    pub fn from_variadic(args: &'a [Value]) -> Self {
        Self {
            shape: CallShape::Variadic,
            leaves: leaves(args),
            fraction: None,
        }
    }

    pub fn shape(&self) -> CallShape {
        self.shape
    }

    pub fn leaves(&self) -> &[&'a Value] {
        &self.leaves
    }

    pub fn numbers(&self) -> Vec<f64> {
        let nums = numeric_sequence(self.leaves.iter().copied());
        #[cfg(feature = "tracing")]
        if nums.len() < self.leaves.len() {
            tracing::debug!(
                leaves = self.leaves.len(),
                numeric = nums.len(),
                "non-numeric arguments dropped"
            );
        }
        nums
    }

    pub fn sorted_numbers(&self) -> Vec<f64> {
        sorted_numeric_sequence(self.leaves.iter().copied())
    }

    /// Rounding precision; always `None` for the variadic form.
    pub fn fraction(&self) -> Option<FractionSpec> {
        match self.shape {
            CallShape::Sequence => self.fraction.and_then(FractionSpec::parse),
            CallShape::Variadic => None,
        }
    }

    /// Applies the optional rounding to a finished result.
    pub fn finish(&self, result: f64) -> f64 {
        match self.fraction() {
            Some(f) => f.apply(result),
            None => result,
        }
    }
}
