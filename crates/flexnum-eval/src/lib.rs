pub mod args;
pub mod coercion;
pub mod error;
pub mod flatten;
pub mod function;
pub mod function_registry;
pub mod telemetry;

pub mod builtins;

pub use args::{CallArgs, CallShape, FractionSpec};
pub use builtins::compare::{ChainOutcome, CompareOp, check_number, check_text};
pub use builtins::math::{
    LOG_DEFAULT_FRACTION, average, distance, log_base, log_base_with, max_of, min_of, sum,
};
pub use builtins::number::{clamp, to_fixed_num};
pub use builtins::random::{ranged_random, ranged_random_with};
pub use builtins::stats::{coefficient_of_variation, stddev, variance};
pub use builtins::utils::to_fixed;
pub use builtins::{BuiltinGroup, load_builtins, load_groups};
pub use error::EvalError;
pub use flatten::flatten;

mod macros;

#[cfg(test)]
mod tests;
