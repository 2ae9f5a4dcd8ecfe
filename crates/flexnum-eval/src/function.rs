//! flexnum-eval/src/function.rs
// Core `Function` trait for registry-dispatched builtins and its capability flags.

use flexnum_common::Value;

use crate::error::EvalError;

bitflags::bitflags! {
    /// Describes the capabilities and properties of a function.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FnCaps: u16 {
        /// Same output for the same input, no side effects.
        const PURE          = 0b0000_0001;
        /// Output can change between calls with identical input (`rangedRandom`).
        const VOLATILE      = 0b0000_0010;
        /// Reduces a flattened data set to a single number (`sum`, `variance`).
        const REDUCTION     = 0b0000_0100;
        /// Only the numeric view of its arguments matters.
        const NUMERIC_ONLY  = 0b0000_1000;
        /// Answers true / false / malformed rather than a number.
        const PREDICATE     = 0b0001_0000;
        /// Honours a trailing precision argument in the sequence calling form.
        const FRACTION      = 0b0010_0000;
    }
}

/// Object-safe trait for every builtin reachable through the registry.
///
/// The typed functions in [`crate::builtins`] are the primary API; a
/// `Function` wraps one of them for callers that only hold `&[Value]`.
pub trait Function: Send + Sync + 'static {
    fn caps(&self) -> FnCaps {
        FnCaps::PURE
    }

    fn name(&self) -> &'static str;

    /// Alternate names that resolve to the same function.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Install group this function belongs to (`Math`, `Number`, `Global`).
    fn namespace(&self) -> &'static str {
        ""
    }

    fn min_args(&self) -> usize {
        0
    }

    fn variadic(&self) -> bool {
        false
    }

    fn volatile(&self) -> bool {
        self.caps().contains(FnCaps::VOLATILE)
    }

    fn eval(&self, args: &[Value]) -> Result<Value, EvalError>;

    /// Arity check followed by [`Function::eval`].
    fn dispatch(&self, args: &[Value]) -> Result<Value, EvalError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "dispatch",
            ns = self.namespace(),
            name = self.name(),
            args = args.len()
        )
        .entered();
        if args.len() < self.min_args() {
            return Err(EvalError::Arity {
                name: self.name(),
                expected: self.min_args(),
                got: args.len(),
            });
        }
        self.eval(args)
    }
}
