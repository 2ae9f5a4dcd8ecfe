use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primitive classification of a [`Value`](crate::Value).
///
/// `Display` renders the canonical class tag (`Number`, `String`, …) so the
/// names line up with what a host's "class of" facility would report.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Text,
    Boolean,
    Array,
    Object,
    Null,
    Undefined,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "Number",
            Self::Text => "String",
            Self::Boolean => "Boolean",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Null => "Null",
            Self::Undefined => "Undefined",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tags() {
        assert_eq!(ValueKind::Number.to_string(), "Number");
        assert_eq!(ValueKind::Text.to_string(), "String");
        assert_eq!(ValueKind::Undefined.to_string(), "Undefined");
    }
}
