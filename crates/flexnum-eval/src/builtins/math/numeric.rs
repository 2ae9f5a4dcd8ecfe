use flexnum_common::Value;

use crate::args::FractionSpec;
use crate::builtins::MATH;
use crate::builtins::utils::num_arg;
use crate::coercion::to_number;
use crate::error::EvalError;
use crate::func_caps;
use crate::function::Function;

/// Precision `logBase` rounds to when the caller gives none. Enough to hide
/// the `ln(x) / ln(b)` error on exact powers (`log2(1024)` is `10.000000000000002`
/// before rounding).
pub const LOG_DEFAULT_FRACTION: u8 = 13;

/// Euclidean distance between two `[x, y]` points.
///
/// Anything that is not a two-element array, or a coordinate that does not
/// coerce to a number, gives `NaN`.
pub fn distance(a: &Value, b: &Value) -> f64 {
    match (point(a), point(b)) {
        (Some((ax, ay)), Some((bx, by))) => (bx - ax).hypot(by - ay),
        _ => f64::NAN,
    }
}

fn point(v: &Value) -> Option<(f64, f64)> {
    match v {
        Value::Array(items) if items.len() == 2 => {
            Some((to_number(&items[0])?, to_number(&items[1])?))
        }
        _ => None,
    }
}

/// `log(x) / log(base)` rounded to [`LOG_DEFAULT_FRACTION`] places.
pub fn log_base(base: f64, x: f64) -> f64 {
    log_base_with(base, x, FractionSpec::new(LOG_DEFAULT_FRACTION))
}

/// `log(x) / log(base)` with explicit rounding; `None` leaves the quotient as
/// computed. Non-positive inputs and `base == 1` give `NaN` or an infinity,
/// which no rounding touches.
pub fn log_base_with(base: f64, x: f64, fraction: Option<FractionSpec>) -> f64 {
    // ln(0) is -inf, which would otherwise turn ln(x) / ln(0) into a finite -0
    if base <= 0.0 {
        return f64::NAN;
    }
    let raw = x.ln() / base.ln();
    match fraction {
        Some(f) => f.apply(raw),
        None => raw,
    }
}

/* ───────────────────────── distance() ───────────────────────── */

#[derive(Debug)]
pub struct DistanceFn;

impl Function for DistanceFn {
    func_caps!(PURE, NUMERIC_ONLY);

    fn name(&self) -> &'static str {
        "distance"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["dist"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        let undefined = Value::Undefined;
        let a = args.first().unwrap_or(&undefined);
        let b = args.get(1).unwrap_or(&undefined);
        Ok(Value::Number(distance(a, b)))
    }
}

/* ───────────────────────── logBase() ────────────────────────── */

#[derive(Debug)]
pub struct LogBaseFn;

/// `logBase(base, x, fraction?)`
///
/// # Remarks
/// - `base` and `x` are coerced like any numeric argument; failures give `NaN`.
/// - Only a numeric `fraction` overrides the default of 13 places. A numeric
///   fraction outside `[0, 20]` disables rounding.
impl Function for LogBaseFn {
    func_caps!(PURE, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "logBase"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["logMn"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        let fraction = match args.get(2) {
            Some(v) if v.is_number() => FractionSpec::parse(v),
            _ => FractionSpec::new(LOG_DEFAULT_FRACTION),
        };
        Ok(Value::Number(log_base_with(
            num_arg(args, 0),
            num_arg(args, 1),
            fraction,
        )))
    }
}
