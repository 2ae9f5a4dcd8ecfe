//! Depth-first expansion of nested arrays.
//!
//! Leaves are visited left to right; nested arrays are spliced in place.
//! Nothing is coerced here. `Value` owns its children, so cyclic input
//! cannot be constructed.

use flexnum_common::Value;

/// Flattens `values` into an owned sequence of leaves.
pub fn flatten(values: &[Value]) -> Vec<Value> {
    leaves(values).into_iter().cloned().collect()
}

/// Borrowing variant of [`flatten`] used by the coercion pipeline.
pub fn leaves(values: &[Value]) -> Vec<&Value> {
    let mut out = Vec::with_capacity(values.len());
    push_leaves(values, &mut out);
    out
}

fn push_leaves<'a>(values: &'a [Value], out: &mut Vec<&'a Value>) {
    for v in values {
        match v {
            Value::Array(inner) => push_leaves(inner, out),
            leaf => out.push(leaf),
        }
    }
}
