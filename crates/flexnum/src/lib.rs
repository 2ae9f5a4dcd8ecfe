//! Meta crate that re-exports the flexnum layers behind feature flags.
//!
//! `common` carries the dynamic [`Value`] model; `eval` adds coercion, the
//! aggregates, the chained comparators and the function registry. Most
//! callers only need the flat re-exports below.

#[cfg(feature = "common")]
pub use flexnum_common as common;

#[cfg(feature = "eval")]
pub use flexnum_eval as eval;

#[cfg(feature = "common")]
pub use flexnum_common::{Value, ValueError, ValueKind, values};

#[cfg(feature = "eval")]
pub use flexnum_eval::{
    BuiltinGroup, ChainOutcome, EvalError, FractionSpec, average, check_number, check_text, clamp,
    coefficient_of_variation, distance, load_builtins, load_groups, log_base, max_of, min_of,
    ranged_random, stddev, sum, to_fixed, to_fixed_num, variance,
};
