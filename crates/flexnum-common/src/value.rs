use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::{ValueError, ValueKind, render::number_to_string};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dynamically-typed argument value.
///
/// This is what callers hand to the numeric engine: anything from a plain
/// number to a nested array of mixed garbage. Nothing here coerces; see
/// `flexnum_eval::coercion` for the numeric view.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Int(i64),
    Number(f64),
    Text(String),
    Boolean(bool),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Null,
    #[default]
    Undefined,
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) | Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
        }
    }

    /// True for every numeric value, `NaN` and the infinities included.
    pub fn is_number(&self) -> bool {
        self.kind() == ValueKind::Number
    }

    pub fn is_text(&self) -> bool {
        self.kind() == ValueKind::Text
    }

    pub fn is_array(&self) -> bool {
        self.kind() == ValueKind::Array
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// The numeric payload, without any coercion.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            Value::Boolean(b) => *b,
            Value::Array(_) | Value::Object(_) => true,
            Value::Null | Value::Undefined => false,
        }
    }

    /// String form of the value as a host would produce it.
    ///
    /// Arrays join their elements with `,`, rendering `null`/`undefined`
    /// elements as empty strings.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Int(i) => i.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::Text(s) => s.clone(),
            Value::Boolean(b) => b.to_string(),
            Value::Array(items) => items
                .iter()
                .map(|v| {
                    if v.is_nullish() {
                        String::new()
                    } else {
                        v.to_js_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Null => "null".to_string(),
            Value::Undefined => "undefined".to_string(),
        }
    }

    /// Reduce a compound value to the primitive it stands for.
    ///
    /// Arrays with at most one element become their string form (`[]` → `""`,
    /// `[7]` → `"7"`); longer arrays cannot stand for a single value. Objects
    /// become their class tag text. Primitives are returned unchanged.
    pub fn to_primitive(&self) -> Result<Value, ValueError> {
        match self {
            Value::Array(items) if items.len() > 1 => {
                Err(ValueError::ImplicitScalar { len: items.len() })
            }
            Value::Array(_) | Value::Object(_) => Ok(Value::Text(self.to_js_string())),
            other => Ok(other.clone()),
        }
    }

    /// Strict equality: no cross-kind conversion, `NaN` never equals itself,
    /// `-0` equals `0`. Compound values are equal only to the very same
    /// instance.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
                std::ptr::eq(self, other)
            }
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    pub fn expect_kind(&self, expected: ValueKind) -> Result<&Value, ValueError> {
        let found = self.kind();
        if found == expected {
            Ok(self)
        } else {
            Err(ValueError::KindMismatch { expected, found })
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

/// Build a `Vec<Value>` from heterogeneous literals.
///
/// Nested calls produce nested arrays: `values![1, "2", values![3]]`.
#[macro_export]
macro_rules! values {
    () => { ::std::vec::Vec::<$crate::Value>::new() };
    ( $($e:expr),+ $(,)? ) => {
        vec![ $( $crate::Value::from($e) ),+ ]
    };
}
