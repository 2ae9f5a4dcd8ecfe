use flexnum_common::Value;

use crate::args::CallArgs;
use crate::builtins::MATH;
use crate::error::EvalError;
use crate::func_caps;
use crate::function::Function;

/// Arithmetic mean, `NaN` for an empty slice.
pub(crate) fn mean(nums: &[f64]) -> f64 {
    if nums.is_empty() {
        return f64::NAN;
    }
    nums.iter().fold(0.0, |acc, n| acc + n) / nums.len() as f64
}

fn sum_of_squares(nums: &[f64], mean: f64) -> f64 {
    nums.iter().fold(0.0, |ss, &v| {
        let d = v - mean;
        ss + d * d
    })
}

fn population_variance(nums: &[f64]) -> f64 {
    if nums.is_empty() {
        return f64::NAN;
    }
    sum_of_squares(nums, mean(nums)) / nums.len() as f64
}

fn sample_stddev(nums: &[f64]) -> f64 {
    let n = nums.len();
    if n < 2 {
        return f64::NAN;
    }
    (sum_of_squares(nums, mean(nums)) / (n - 1) as f64).sqrt()
}

/// Population variance (`n` in the denominator).
///
/// # Remarks
/// - Non-numeric leaves are dropped before `n` is counted.
/// - Returns `NaN` when no numeric leaf remains.
pub fn variance(args: &[Value]) -> f64 {
    let call = CallArgs::parse(args);
    call.finish(population_variance(&call.numbers()))
}

/// Population standard deviation, the square root of [`variance`].
pub fn stddev(args: &[Value]) -> f64 {
    let call = CallArgs::parse(args);
    call.finish(population_variance(&call.numbers()).sqrt())
}

/// Sample standard deviation (`n - 1`) divided by the mean.
///
/// Fewer than two numeric leaves give `NaN`; a zero mean gives an infinity
/// or `NaN`.
pub fn coefficient_of_variation(args: &[Value]) -> f64 {
    let call = CallArgs::parse(args);
    let nums = call.numbers();
    call.finish(sample_stddev(&nums) / mean(&nums))
}

#[derive(Debug)]
pub struct VarianceFn; // population variance

impl Function for VarianceFn {
    func_caps!(PURE, REDUCTION, NUMERIC_ONLY, FRACTION);
    fn name(&self) -> &'static str {
        "variance"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["var"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(variance(args)))
    }
}

#[derive(Debug)]
pub struct StddevFn;

impl Function for StddevFn {
    func_caps!(PURE, REDUCTION, NUMERIC_ONLY, FRACTION);
    fn name(&self) -> &'static str {
        "stddev"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["std"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(stddev(args)))
    }
}

#[derive(Debug)]
pub struct CoefficientOfVariationFn;

impl Function for CoefficientOfVariationFn {
    func_caps!(PURE, REDUCTION, NUMERIC_ONLY, FRACTION);
    fn name(&self) -> &'static str {
        "coefficientOfVariation"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["cv"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(coefficient_of_variation(args)))
    }
}

pub fn register_builtins() {
    crate::register_functions!(VarianceFn, StddevFn, CoefficientOfVariationFn);
}
