use flexnum_common::Value;

use crate::args::CallArgs;
use crate::builtins::MATH;
use crate::builtins::stats::mean;
use crate::error::EvalError;
use crate::func_caps;
use crate::function::Function;

/// Total of every numeric leaf.
///
/// # Remarks
/// - Leaves that do not coerce to a number are dropped, never counted as 0.
/// - An empty data set sums to `0`.
/// - In the sequence form (`sum([..], fraction)`) the total is rounded.
///
/// ```
/// use flexnum_common::values;
/// use flexnum_eval::sum;
///
/// assert_eq!(sum(&values![1, values![2, 3], 4]), 10.0);
/// assert_eq!(sum(&values![values![1.01, 2.02], 2]), 3.03);
/// assert_eq!(sum(&values!["ABC", 2, "3"]), 5.0);
/// ```
pub fn sum(args: &[Value]) -> f64 {
    let call = CallArgs::parse(args);
    let total = call.numbers().iter().fold(0.0, |acc, n| acc + n);
    call.finish(total)
}

/// Arithmetic mean of the numeric leaves, `NaN` when there are none.
pub fn average(args: &[Value]) -> f64 {
    let call = CallArgs::parse(args);
    call.finish(mean(&call.numbers()))
}

/// Largest numeric leaf, `-Infinity` for an empty data set. `+0` ranks
/// above `-0`.
pub fn max_of(args: &[Value]) -> f64 {
    let call = CallArgs::parse(args);
    let max = call.numbers().into_iter().fold(f64::NEG_INFINITY, |acc, n| {
        if n > acc || (n == acc && acc.is_sign_negative()) { n } else { acc }
    });
    call.finish(max)
}

/// Smallest numeric leaf, `+Infinity` for an empty data set. `-0` ranks
/// below `+0`.
pub fn min_of(args: &[Value]) -> f64 {
    let call = CallArgs::parse(args);
    let min = call.numbers().into_iter().fold(f64::INFINITY, |acc, n| {
        if n < acc || (n == acc && n.is_sign_negative()) { n } else { acc }
    });
    call.finish(min)
}

/* ─────────────────────────── sum() ──────────────────────────── */

#[derive(Debug)]
pub struct SumFn;

impl Function for SumFn {
    func_caps!(PURE, REDUCTION, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "sum"
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(sum(args)))
    }
}

/* ───────────────────────── average() ────────────────────────── */

#[derive(Debug)]
pub struct AverageFn;

impl Function for AverageFn {
    func_caps!(PURE, REDUCTION, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "average"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["avg"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(average(args)))
    }
}

/* ─────────────────────── maxOf() / minOf() ──────────────────── */

#[derive(Debug)]
pub struct MaxOfFn;

impl Function for MaxOfFn {
    func_caps!(PURE, REDUCTION, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "maxOf"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["maxi"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(max_of(args)))
    }
}

#[derive(Debug)]
pub struct MinOfFn;

impl Function for MinOfFn {
    func_caps!(PURE, REDUCTION, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "minOf"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["mini"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(min_of(args)))
    }
}
