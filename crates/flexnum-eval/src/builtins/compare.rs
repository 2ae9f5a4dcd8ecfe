//! Chained comparators: `$$num` and `$$str`.
//!
//! A chain is `seed, op, operand, op, operand, …` and holds when every
//! adjacent pair satisfies its operator, so `(3, "<", 5, "<=", 5)` reads as
//! `3 < 5 && 5 <= 5`. Shorter arities double as kind and equality checks:
//!
//! | arity | meaning                                      |
//! |-------|----------------------------------------------|
//! | 0     | always satisfied                             |
//! | 1     | the seed is of the checker's kind            |
//! | 2     | the two values are strictly equal            |
//! | 3+    | evaluate the chain left to right             |

use std::cmp::Ordering;

use flexnum_common::Value;
use smallvec::SmallVec;

use crate::builtins::GLOBAL;
use crate::coercion::to_number;
use crate::error::EvalError;
use crate::func_caps;
use crate::function::Function;

/// Result of checking a chain.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChainOutcome {
    Satisfied,
    Violated,
    /// Unknown operator, a non-number operand in a numeric chain, or an
    /// operator with nothing on its right.
    Malformed,
}

impl ChainOutcome {
    fn from_bool(holds: bool) -> Self {
        if holds { Self::Satisfied } else { Self::Violated }
    }

    pub fn is_satisfied(self) -> bool {
        self == Self::Satisfied
    }

    /// `Some(bool)` for a well-formed chain.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Satisfied => Some(true),
            Self::Violated => Some(false),
            Self::Malformed => None,
        }
    }

    /// `Boolean` for a well-formed chain, `Undefined` otherwise.
    pub fn to_value(self) -> Value {
        self.as_bool().map_or(Value::Undefined, Value::Boolean)
    }
}

/// Operators accepted between chain operands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl CompareOp {
    pub fn parse(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            "=" => Self::Eq,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "=",
        }
    }

    /// Whether `lhs op rhs` given their ordering. Unordered pairs (a `NaN`
    /// on either side) satisfy no operator.
    pub fn holds(self, ord: Option<Ordering>) -> bool {
        use Ordering::*;
        matches!(
            (self, ord),
            (Self::Lt, Some(Less))
                | (Self::Le, Some(Less | Equal))
                | (Self::Gt, Some(Greater))
                | (Self::Ge, Some(Greater | Equal))
                | (Self::Eq, Some(Equal))
        )
    }
}

/// Positions of the operators in a chain of `len` arguments.
fn operator_positions(len: usize) -> impl Iterator<Item = usize> {
    (1..len).step_by(2)
}

/// Numeric chain check.
///
/// Every right operand must be a number. Left operands are the seed or the
/// previous right operand; a non-number seed is coerced for the relational
/// operators and never equals anything under `=`.
///
/// ```
/// use flexnum_common::values;
/// use flexnum_eval::{ChainOutcome, check_number};
///
/// assert_eq!(check_number(&values![20, "<", 30, ">=", 30]), ChainOutcome::Satisfied);
/// assert_eq!(check_number(&values![20, ">", 30]), ChainOutcome::Violated);
/// assert_eq!(check_number(&values![20, "<", "30"]), ChainOutcome::Malformed);
/// ```
pub fn check_number(args: &[Value]) -> ChainOutcome {
    match args {
        [] => ChainOutcome::Satisfied,
        [seed] => ChainOutcome::from_bool(seed.is_number()),
        [a, b] => ChainOutcome::from_bool(a.strict_eq(b)),
        _ => {
            for i in operator_positions(args.len()) {
                let Some(op) = args[i].as_text().and_then(CompareOp::parse) else {
                    return ChainOutcome::Malformed;
                };
                let Some(rhs) = args.get(i + 1).and_then(Value::as_f64) else {
                    return ChainOutcome::Malformed;
                };
                let lhs = &args[i - 1];
                let holds = match op {
                    CompareOp::Eq => lhs.as_f64().is_some_and(|l| l == rhs),
                    _ => op.holds(to_number(lhs).and_then(|l| l.partial_cmp(&rhs))),
                };
                if !holds {
                    return ChainOutcome::Violated;
                }
            }
            ChainOutcome::Satisfied
        }
    }
}

/// Text chain check.
///
/// Every argument is rendered to its string form first; relational operators
/// compare UTF-16 code units, so `"Z" < "a"` and `"10" < "9"`.
///
/// ```
/// use flexnum_common::values;
/// use flexnum_eval::{ChainOutcome, check_text};
///
/// assert_eq!(check_text(&values!["a", "<", "b", "<", "c"]), ChainOutcome::Satisfied);
/// assert_eq!(check_text(&values!["10", "<", 9]), ChainOutcome::Satisfied);
/// assert_eq!(check_text(&values!["a", "~", "b"]), ChainOutcome::Malformed);
/// ```
pub fn check_text(args: &[Value]) -> ChainOutcome {
    match args {
        [] => ChainOutcome::Satisfied,
        [seed] => ChainOutcome::from_bool(seed.is_text()),
        [a, b] => ChainOutcome::from_bool(a.strict_eq(b)),
        _ => {
            let rendered: SmallVec<[String; 8]> = args.iter().map(Value::to_js_string).collect();
            for i in operator_positions(rendered.len()) {
                let Some(op) = CompareOp::parse(&rendered[i]) else {
                    return ChainOutcome::Malformed;
                };
                let Some(rhs) = rendered.get(i + 1) else {
                    return ChainOutcome::Malformed;
                };
                let ord = rendered[i - 1].encode_utf16().cmp(rhs.encode_utf16());
                if !op.holds(Some(ord)) {
                    return ChainOutcome::Violated;
                }
            }
            ChainOutcome::Satisfied
        }
    }
}

#[derive(Debug)]
pub struct CheckNumberFn;

impl Function for CheckNumberFn {
    func_caps!(PURE, PREDICATE);

    fn name(&self) -> &'static str {
        "$$num"
    }
    fn namespace(&self) -> &'static str {
        GLOBAL
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(check_number(args).to_value())
    }
}

#[derive(Debug)]
pub struct CheckTextFn;

impl Function for CheckTextFn {
    func_caps!(PURE, PREDICATE);

    fn name(&self) -> &'static str {
        "$$str"
    }
    fn namespace(&self) -> &'static str {
        GLOBAL
    }
    fn variadic(&self) -> bool {
        true
    }
    fn eval(&self, args: &[Value]) -> Result<Value, EvalError> {
        Ok(check_text(args).to_value())
    }
}

pub fn register_builtins() {
    crate::register_functions!(CheckNumberFn, CheckTextFn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexnum_common::values;
    use super::ChainOutcome::*;

    #[test]
    fn short_arities() {
        assert_eq!(check_number(&[]), Satisfied);
        assert_eq!(check_number(&values![20]), Satisfied);
        assert_eq!(check_number(&values![f64::NAN]), Satisfied);
        assert_eq!(check_number(&values!["20"]), Violated);
        assert_eq!(check_number(&values![20, 20.0]), Satisfied);
        assert_eq!(check_number(&values![20, "20"]), Violated);
        assert_eq!(check_number(&values![f64::NAN, f64::NAN]), Violated);
        assert_eq!(check_number(&values![-0.0, 0]), Satisfied);

        assert_eq!(check_text(&[]), Satisfied);
        assert_eq!(check_text(&values!["20"]), Satisfied);
        assert_eq!(check_text(&values![20]), Violated);
        assert_eq!(check_text(&values!["a", "a"]), Satisfied);
        assert_eq!(check_text(&values!["20", 20]), Violated);
    }

    #[test]
    fn numeric_chains() {
        assert_eq!(check_number(&values![20, "<", 30]), Satisfied);
        assert_eq!(check_number(&values![20, "<=", 20, "=", 20, ">", 10]), Satisfied);
        assert_eq!(check_number(&values![20, ">", 30]), Violated);
        assert_eq!(check_number(&values![20, "<", 30, "<", 25]), Violated);
        assert_eq!(check_number(&values![f64::NAN, "<", 1]), Violated);
        assert_eq!(check_number(&values![1, ">=", f64::NAN]), Violated);
    }

    #[test]
    fn numeric_seed_is_coerced_for_relations_only() {
        assert_eq!(check_number(&values!["20", "<", 30]), Satisfied);
        assert_eq!(check_number(&values![values![5], ">", 4]), Satisfied);
        assert_eq!(check_number(&values![(), "<", 1]), Satisfied);
        assert_eq!(check_number(&values!["abc", "<", 30]), Violated);
        assert_eq!(check_number(&values!["20", "=", 20]), Violated);
    }

    #[test]
    fn malformed_numeric_chains() {
        assert_eq!(check_number(&values![20, "<", "30"]), Malformed);
        assert_eq!(check_number(&values![20, "!=", 30]), Malformed);
        assert_eq!(check_number(&values![20, 1, 30]), Malformed);
        assert_eq!(check_number(&values![20, "<", 30, "<"]), Malformed);
    }

    #[test]
    fn earlier_violation_wins_over_later_malformation() {
        assert_eq!(check_number(&values![20, ">", 30, "??", 1]), Violated);
        assert_eq!(check_number(&values![20, ">", 30, "<"]), Violated);
        assert_eq!(check_text(&values!["b", "<", "a", "??", "c"]), Violated);
    }

    #[test]
    fn text_chains() {
        assert_eq!(check_text(&values!["a", "<", "b", "<=", "b"]), Satisfied);
        assert_eq!(check_text(&values!["b", "<", "a"]), Violated);
        assert_eq!(check_text(&values!["Z", "<", "a"]), Satisfied);
        assert_eq!(check_text(&values!["abc", "=", "abc", ">", "ab"]), Satisfied);
        assert_eq!(check_text(&values![10, "<", 9]), Satisfied);
        assert_eq!(check_text(&values![values![1, 2], "=", "1,2"]), Satisfied);
    }

    #[test]
    fn text_order_is_utf16() {
        // U+FF5E sorts above U+1F600 in UTF-16 (surrogates are 0xD83D..)
        assert_eq!(check_text(&values!["\u{1F600}", "<", "\u{FF5E}"]), Satisfied);
    }

    #[test]
    fn malformed_text_chains() {
        assert_eq!(check_text(&values!["a", "<>", "b"]), Malformed);
        assert_eq!(check_text(&values!["a", "<", "b", "<"]), Malformed);
    }

    #[test]
    fn registry_values() {
        assert_eq!(CheckNumberFn.eval(&values![1, "<", 2]).unwrap(), Value::Boolean(true));
        assert_eq!(CheckTextFn.eval(&values![1]).unwrap(), Value::Boolean(false));
        assert_eq!(CheckNumberFn.eval(&values![1, "<", "2"]).unwrap(), Value::Undefined);
    }

    #[test]
    fn operator_symbols_round_trip() {
        for op in [CompareOp::Lt, CompareOp::Le, CompareOp::Gt, CompareOp::Ge, CompareOp::Eq] {
            assert_eq!(CompareOp::parse(op.symbol()), Some(op));
        }
        assert_eq!(CompareOp::parse("=="), None);
    }
}
