use flexnum_common::{Value, values};
use flexnum_eval::{
    average, clamp, coefficient_of_variation, distance, log_base, max_of, min_of, ranged_random,
    stddev, sum, to_fixed, variance,
};

#[test]
fn sums() {
    assert_eq!(sum(&values![values![]]), 0.0);
    assert_eq!(sum(&values![values![1, 2, 3]]), 6.0);
    assert_eq!(sum(&values![values![1, "2", values![3]]]), 6.0);
}

#[test]
fn averages() {
    assert!(average(&values![values![]]).is_nan());
    assert_eq!(average(&values![values![1, 2, 3]]), 2.0);
}

#[test]
fn dispersion() {
    assert_eq!(variance(&values![values![1, 2, 3, 4, 5]]), 2.0);
    assert_eq!(stddev(&values![values![1, 2, 3, 4, 5]]), 1.4142135623730951);
    assert_eq!(
        coefficient_of_variation(&values![values![22, 985, 3654, 98474, 698], 2]),
        2.09
    );
}

#[test]
fn empty_extremes_are_asymmetric() {
    for empty in [values![], values![values![]], values![values!["a", values![]]]] {
        assert_eq!(max_of(&empty), f64::NEG_INFINITY, "{empty:?}");
        assert_eq!(min_of(&empty), f64::INFINITY, "{empty:?}");
    }
}

#[test]
fn clamp_filters_then_sorts_bounds() {
    assert_eq!(clamp(10.0, &values![values![false, "Hi", values![-1], "7"]]), 7.0);
}

#[test]
fn rounded_random_draws_are_whole_and_right_closed() {
    for _ in 0..1000 {
        let n = ranged_random(&values![values![100, 500], 0]);
        assert_eq!(n.fract(), 0.0, "{n}");
        assert!((100.0..=500.0).contains(&n), "{n}");
    }
}

#[test]
fn distances_and_logs() {
    let p = |x: i32, y: i32| Value::from(values![x, y]);
    assert_eq!(distance(&p(0, 0), &p(3, 4)), 5.0);
    assert_eq!(distance(&p(6, 7), &p(12, 15)), 10.0);
    assert_eq!(log_base(2.0, 1024.0), 10.0);
    assert_eq!(log_base(81.0, 9.0), 0.5);
}

#[test]
fn rounding_yields_numbers_equal_to_fixing() {
    let data = values![values![1.005, 2.25, 3.3333, "4.4"], 2];
    let Value::Array(set) = &data[0] else {
        unreachable!()
    };
    let raw = sum(set);
    assert_eq!(sum(&data), to_fixed(raw, 2));
    let raw_avg = average(set);
    assert_eq!(average(&data), to_fixed(raw_avg, 2));
}

#[test]
fn infinities_pass_through_pure_aggregation() {
    assert_eq!(sum(&values![1, f64::INFINITY]), f64::INFINITY);
    assert_eq!(sum(&values![values!["Infinity", 2]]), f64::INFINITY);
    assert_eq!(average(&values![values!["-Infinity", 2]]), f64::NEG_INFINITY);
    assert!(variance(&values![1, f64::INFINITY]).is_nan());
    assert!(stddev(&values![values![1, "Infinity"]]).is_nan());
}

#[test]
fn variadic_trailing_number_is_data() {
    assert_eq!(sum(&values![1, 2, 2]), 5.0);
    assert_eq!(sum(&values![values![1, 2], 2]), 3.0);
    assert_eq!(max_of(&values![1, 2, 0]), 2.0);
}
