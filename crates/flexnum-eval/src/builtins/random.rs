//! Volatile functions: `rangedRandom`.
use flexnum_common::Value;
use rand::Rng;

use crate::args::FractionSpec;
use crate::builtins::MATH;
use crate::builtins::utils::MAX_SAFE_INTEGER;
use crate::coercion::sorted_numeric_sequence;
use crate::error::EvalError;
use crate::flatten::leaves;
use crate::func_caps;
use crate::function::Function;

/// Uniform random number in `[min, max)` of a range, drawn from the
/// thread-local generator. See [`ranged_random_with`].
pub fn ranged_random(args: &[Value]) -> f64 {
    ranged_random_with(&mut rand::thread_rng(), args)
}

/// Uniform random number in `[min, max)` of `args[0]`, optionally rounded to
/// `args[1]` places.
///
/// # Remarks
/// - An array range is flattened and its numeric leaves sorted; the first and
///   last give the interval.
/// - A scalar range `r` means `[0, r]`, or `[0, 1]` when `r` is falsy or missing.
/// - Infinite bounds are pulled in to `±(2^53 - 1)`.
/// - When a fraction is present the draw is rounded, so `max` itself becomes
///   reachable. A fraction that cannot be read means 0 places.
/// - A range with no numeric leaf gives `NaN`.
pub fn ranged_random_with<R: Rng>(rng: &mut R, args: &[Value]) -> f64 {
    let bounds = range_bounds(args.first());
    let (Some(&min), Some(&max)) = (bounds.first(), bounds.last()) else {
        return f64::NAN;
    };
    let draw = rng.r#gen::<f64>() * (max - min) + min;
    match args.get(1) {
        None | Some(Value::Undefined) => draw,
        Some(fraction) => FractionSpec::parse(fraction).unwrap_or_default().apply(draw),
    }
}

fn range_bounds(range: Option<&Value>) -> Vec<f64> {
    let zero = Value::Int(0);
    let one = Value::Int(1);
    let candidates: Vec<&Value> = match range {
        Some(Value::Array(items)) => leaves(items),
        Some(upper) if upper.is_truthy() => vec![&zero, upper],
        _ => vec![&zero, &one],
    };
    sorted_numeric_sequence(candidates)
        .into_iter()
        .map(|b| b.clamp(-MAX_SAFE_INTEGER, MAX_SAFE_INTEGER))
        .collect()
}

#[derive(Debug)]
pub struct RangedRandomFn;

impl Function for RangedRandomFn {
    func_caps!(VOLATILE, NUMERIC_ONLY, FRACTION);

    fn name(&self) -> &'static str {
        "rangedRandom"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["rand"]
    }
    fn namespace(&self) -> &'static str {
        MATH
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::Number(ranged_random(args)))
    }
}

pub fn register_builtins() {
    crate::register_functions!(RangedRandomFn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexnum_common::values;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn draws_stay_inside_the_range() {
        let mut rng = rng();
        let args = values![values![500, "100", "junk"]];
        for _ in 0..500 {
            let r = ranged_random_with(&mut rng, &args);
            assert!((100.0..500.0).contains(&r), "{r}");
        }
    }

    #[test]
    fn rounded_draws_are_integers_and_may_hit_max() {
        let mut rng = rng();
        let args = values![values![0, 1], 0];
        let draws: Vec<f64> = (0..200).map(|_| ranged_random_with(&mut rng, &args)).collect();
        assert!(draws.iter().all(|d| *d == 0.0 || *d == 1.0));
        assert!(draws.contains(&1.0));
    }

    #[test]
    fn scalar_and_missing_ranges() {
        let mut rng = rng();
        for _ in 0..100 {
            let r = ranged_random_with(&mut rng, &values![10]);
            assert!((0.0..10.0).contains(&r));
            let r = ranged_random_with(&mut rng, &[]);
            assert!((0.0..1.0).contains(&r));
            let r = ranged_random_with(&mut rng, &values![0, 0]);
            assert!(r == 0.0 || r == 1.0);
        }
    }

    #[test]
    fn single_point_range() {
        assert_eq!(ranged_random_with(&mut rng(), &values![values![4]]), 4.0);
    }

    #[test]
    fn infinite_bounds_are_clamped() {
        let bounds = range_bounds(Some(&Value::from(values![f64::NEG_INFINITY, "Infinity"])));
        assert_eq!(bounds, vec![-MAX_SAFE_INTEGER, MAX_SAFE_INTEGER]);
        let r = ranged_random_with(&mut rng(), &values![f64::INFINITY]);
        assert!((0.0..=MAX_SAFE_INTEGER).contains(&r));
    }

    #[test]
    fn empty_range_is_nan() {
        assert!(ranged_random_with(&mut rng(), &values![values!["a", "b"]]).is_nan());
        assert!(ranged_random_with(&mut rng(), &values![values![]]).is_nan());
    }

    #[test]
    fn thread_rng_entry_point() {
        let r = ranged_random(&values![values![100, 500], 0]);
        assert_eq!(r.fract(), 0.0);
        assert!((100.0..=500.0).contains(&r));
    }
}
