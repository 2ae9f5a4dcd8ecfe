use flexnum_common::{Value, ValueError, ValueKind};

use crate::args::{CallArgs, FractionSpec};
use crate::builtins::NUMBER;
use crate::builtins::utils::to_fixed;
use crate::error::EvalError;
use crate::func_caps;
use crate::function::Function;

/// Clamps `x` into `[lowest, highest]` of the numeric bound set.
///
/// `bounds` follows the aggregate calling forms: `clamp(x, &[array, fraction])`
/// reads the bounds from the array and rounds the result, anything else uses
/// every bound argument as-is. A single bound `b` pins the result to `b`; no
/// usable bound leaves `x` unchanged.
///
/// ```
/// use flexnum_common::values;
/// use flexnum_eval::clamp;
///
/// assert_eq!(clamp(10.0, &values![values![false, "Hi", values![-1], "7"]]), 7.0);
/// assert_eq!(clamp(-3.0, &values![0, 5]), 0.0);
/// ```
pub fn clamp(x: f64, bounds: &[Value]) -> f64 {
    let call = CallArgs::parse(bounds);
    let sorted = call.sorted_numbers();
    let clamped = match (sorted.first(), sorted.last()) {
        (Some(&lo), _) if x < lo => lo,
        (_, Some(&hi)) if x > hi => hi,
        _ => x,
    };
    call.finish(clamped)
}

/// Rounds `x` to `fraction` places (0 when absent or unreadable) and keeps
/// the result a number.
pub fn to_fixed_num(x: f64, fraction: Option<&Value>) -> f64 {
    let digits = fraction
        .and_then(FractionSpec::parse)
        .unwrap_or_default()
        .digits();
    to_fixed(x, digits)
}

fn receiver(args: &[Value]) -> Result<f64, EvalError> {
    let this = match args.first() {
        Some(v) => v.expect_kind(ValueKind::Number)?,
        None => {
            return Err(ValueError::KindMismatch {
                expected: ValueKind::Number,
                found: ValueKind::Undefined,
            }
            .into());
        }
    };
    Ok(this.as_f64().unwrap_or(f64::NAN))
}

#[derive(Debug)]
pub struct ClampFn;

/// `clamp(receiver, bounds...)` with a number receiver.
impl Function for ClampFn {
    func_caps!(PURE, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "clamp"
    }
    fn namespace(&self) -> &'static str {
        NUMBER
    }
    fn min_args(&self) -> usize {
        1
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        let x = receiver(args)?;
        Ok(Value::Number(clamp(x, &args[1..])))
    }
}

#[derive(Debug)]
pub struct ToFixedNumFn;

impl Function for ToFixedNumFn {
    func_caps!(PURE, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "toFixedNum"
    }
    fn namespace(&self) -> &'static str {
        NUMBER
    }
    fn min_args(&self) -> usize {
        1
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        let x = receiver(args)?;
        Ok(Value::Number(to_fixed_num(x, args.get(1))))
    }
}

pub fn register_builtins() {
    crate::register_functions!(ClampFn, ToFixedNumFn);
}
