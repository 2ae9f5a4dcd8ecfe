use flexnum_common::ValueError;

/// Failures at the dynamic dispatch boundary.
///
/// The typed numeric API never returns these: bad numeric input degrades to
/// `NaN` there. Only calls routed through the function registry can fail
/// structurally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown function {namespace}::{name}")]
    UnknownFunction { namespace: String, name: String },

    #[error("{name} expects at least {expected} argument(s), got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Value(#[from] ValueError),
}

