use crate::builtins::compare::{ChainOutcome, check_number};
use crate::builtins::random::ranged_random_with;
use crate::builtins::utils::to_fixed;
use crate::coercion::sorted_numeric_sequence;
use crate::flatten::flatten;
use crate::{average, max_of, min_of, sum};
use flexnum_common::Value;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1000i64..1000).prop_map(Value::Int),
        (-1e6f64..1e6).prop_map(Value::Number),
        "[a-z0-9 .-]{0,6}".prop_map(Value::Text),
        any::<bool>().prop_map(Value::Boolean),
        Just(Value::Null),
        Just(Value::Undefined),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Value::Array)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn flatten_is_idempotent(items in proptest::collection::vec(nested(), 0..8)) {
        let once = flatten(&items);
        prop_assert!(!once.iter().any(Value::is_array));
        prop_assert_eq!(flatten(&once), once);
    }

    #[test]
    fn nesting_does_not_change_totals(xs in proptest::collection::vec(-1000i32..1000, 0..40)) {
        let flat: Vec<Value> = xs.iter().copied().map(Value::from).collect();
        let expected: f64 = xs.iter().map(|&x| f64::from(x)).sum();
        let (head, tail) = flat.split_at(flat.len() / 2);
        let nested = vec![Value::Array(vec![
            Value::Array(head.to_vec()),
            Value::Array(tail.to_vec()),
        ])];
        prop_assert_eq!(sum(&flat), expected);
        prop_assert_eq!(sum(&nested), expected);
    }

    #[test]
    fn extremes_bound_the_mean(xs in proptest::collection::vec(-1e6f64..1e6, 1..40)) {
        let args: Vec<Value> = xs.iter().copied().map(Value::from).collect();
        let (lo, hi, avg) = (min_of(&args), max_of(&args), average(&args));
        prop_assert!(lo <= hi);
        prop_assert!(avg >= lo - 1e-6 && avg <= hi + 1e-6);
    }

    #[test]
    fn sorted_sequences_are_ordered(items in proptest::collection::vec(leaf(), 0..30)) {
        let sorted = sorted_numeric_sequence(&items);
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(sorted.iter().all(|n| !n.is_nan()));
    }

    #[test]
    fn fixing_stays_within_half_a_unit(x in -1e9f64..1e9, digits in 0u8..=10) {
        let fixed = to_fixed(x, digits);
        let unit = 10f64.powi(-i32::from(digits));
        prop_assert!((fixed - x).abs() <= unit / 2.0 + x.abs() * 1e-15, "{} -> {}", x, fixed);
        prop_assert_eq!(to_fixed(fixed, digits), fixed);
    }

    #[test]
    fn random_draws_stay_in_range(a in -1e6f64..1e6, b in -1e6f64..1e6, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let args = vec![Value::Array(vec![Value::Number(a), Value::Number(b)])];
        let (lo, hi) = (a.min(b), a.max(b));
        let r = ranged_random_with(&mut rng, &args);
        prop_assert!(r >= lo && r <= hi, "{} not in [{}, {}]", r, lo, hi);
    }

    #[test]
    fn ascending_chains_hold(xs in proptest::collection::vec(-1000i64..1000, 1..10)) {
        let mut xs = xs;
        xs.sort_unstable();
        let mut chain = vec![Value::Int(xs[0])];
        for &x in &xs[1..] {
            chain.push(Value::from("<="));
            chain.push(Value::Int(x));
        }
        prop_assert_eq!(check_number(&chain), ChainOutcome::Satisfied);
    }
}
