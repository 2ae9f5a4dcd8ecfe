use crate::error::EvalError;
use crate::function::Function;
use dashmap::DashMap;
use flexnum_common::Value;
use once_cell::sync::Lazy;
use std::sync::Arc;

fn key(ns: &str, name: &str) -> String {
    format!("{ns}::{name}")
}

static REG: Lazy<DashMap<String, Arc<dyn Function>>> = Lazy::new(DashMap::new);

/// Installs `f` under `(f.namespace(), f.name())` and each of its aliases,
/// replacing any previous entry with the same key. Installing the same
/// builtin twice is a no-op in effect.
pub fn register(f: Arc<dyn Function>) {
    let ns = f.namespace();
    for alias in f.aliases() {
        REG.insert(key(ns, alias), Arc::clone(&f));
    }
    REG.insert(key(ns, f.name()), f);
}

pub fn get(ns: &str, name: &str) -> Option<Arc<dyn Function>> {
    REG.get(&key(ns, name)).map(|v| Arc::clone(v.value()))
}

pub fn is_registered(ns: &str, name: &str) -> bool {
    REG.contains_key(&key(ns, name))
}

/// Looks up and dispatches a builtin in one step.
pub fn call(ns: &str, name: &str, args: &[Value]) -> Result<Value, EvalError> {
    let f = get(ns, name).ok_or_else(|| EvalError::UnknownFunction {
        namespace: ns.to_string(),
        name: name.to_string(),
    })?;
    f.dispatch(args)
}

/// Sorted canonical names of everything installed under `ns`; aliases are
/// not listed.
pub fn names_in(ns: &str) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REG
        .iter()
        .filter(|entry| entry.value().namespace() == ns)
        .map(|entry| entry.value().name())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}
